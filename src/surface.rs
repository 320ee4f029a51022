//! Chart surface: where a [`Figure`] ends up on screen.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::error::ChartError;
use crate::hit::HitRegion;
use crate::render::{self, ChartStyle, Figure, RegionOverlay, TraceStyle};
use crate::scale::Scales;

/// A surface that can show a whole figure and patch a single trace's style.
pub trait ChartSurface {
    /// Replace whatever is shown with `figure`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the underlying surface rejects a draw call.
    fn redraw(&mut self, figure: &Figure, regions: &[HitRegion]) -> Result<(), ChartError>;

    /// Restyle trace `trace` of the figure currently shown.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::NoSuchTrace`] for an unknown trace, or `Err` if a
    /// draw call fails.
    fn restyle(&mut self, trace: usize, style: &TraceStyle) -> Result<(), ChartError>;
}

/// Canvas 2D implementation of [`ChartSurface`].
///
/// Keeps the last figure so a restyle can repaint without the caller
/// rebuilding the scene.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    scales: Scales,
    style: ChartStyle,
    show_regions: bool,
    shown: Option<(Figure, Vec<HitRegion>)>,
}

impl CanvasSurface {
    /// Bind to `canvas`, sizing it to `size` × `size` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::MissingContext`] if the canvas has no 2D context.
    pub fn new(canvas: &HtmlCanvasElement, size: f64, scales: Scales, style: ChartStyle) -> Result<Self, ChartError> {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let px = size.round().max(0.0) as u32;
        canvas.set_width(px);
        canvas.set_height(px);

        let ctx = canvas
            .get_context("2d")?
            .ok_or(ChartError::MissingContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| ChartError::MissingContext)?;

        Ok(Self { ctx, scales, style, show_regions: false, shown: None })
    }

    /// Toggle the hit-region outlines and repaint.
    ///
    /// # Errors
    ///
    /// Returns `Err` if repainting fails.
    pub fn set_show_regions(&mut self, show: bool) -> Result<(), ChartError> {
        self.show_regions = show;
        self.repaint()
    }

    fn repaint(&self) -> Result<(), ChartError> {
        let Some((figure, regions)) = &self.shown else {
            return Ok(());
        };
        let overlay = RegionOverlay {
            regions,
            ray_colors: &self.style.region_colors,
            curve_color: &self.style.curve_region_color,
        };
        let overlay = self.show_regions.then_some(&overlay);
        render::draw(&self.ctx, figure, &self.scales, &self.style, overlay)?;
        Ok(())
    }
}

impl ChartSurface for CanvasSurface {
    fn redraw(&mut self, figure: &Figure, regions: &[HitRegion]) -> Result<(), ChartError> {
        self.shown = Some((figure.clone(), regions.to_vec()));
        self.repaint()
    }

    fn restyle(&mut self, trace: usize, style: &TraceStyle) -> Result<(), ChartError> {
        let Some((figure, _)) = &mut self.shown else {
            return Ok(());
        };
        let target = figure.traces.get_mut(trace).ok_or(ChartError::NoSuchTrace(trace))?;
        target.line = style.clone();
        self.repaint()
    }
}
