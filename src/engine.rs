use web_sys::{Document, HtmlCanvasElement};

use crate::config::ChartConfig;
use crate::consts::CURVE_HIT_PAD_PX;
use crate::dom::{self, DomLabels};
use crate::error::ChartError;
use crate::geometry::Point;
use crate::hit::{self, HitRegion, HitTarget};
use crate::input::{DragState, curve_step_for, ray_candidate};
use crate::labels::sync_labels;
use crate::render::{Figure, TraceStyle, build_figure};
use crate::scale::Scales;
use crate::state::ChartState;
use crate::surface::{CanvasSurface, ChartSurface};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Cursor while a ray is held.
pub const CURSOR_GRABBING: &str = "grabbing";
/// Cursor over a draggable region when nothing is held.
pub const CURSOR_POINTER: &str = "pointer";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetCursor(String),
    Restyle { trace: usize, style: TraceStyle },
    RenderNeeded,
    LabelsChanged,
}

/// Core engine state: all logic that does not depend on the browser.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct ChartCore {
    pub config: ChartConfig,
    pub state: ChartState,
    pub scales: Scales,
    pub drag: DragState,
    regions: Vec<HitRegion>,
}

impl ChartCore {
    #[must_use]
    pub fn new(config: ChartConfig) -> Self {
        let state = ChartState::new(&config);
        let scales = Scales::new(&config);
        let mut core = Self { config, state, scales, drag: DragState::Idle, regions: Vec::new() };
        core.refresh_regions();
        core
    }

    // --- Queries ---

    /// The scene for the current state.
    #[must_use]
    pub fn figure(&self) -> Figure {
        build_figure(&self.state, &self.config.style, self.config.surface_size_px, self.drag.active_ray())
    }

    /// Hit-regions matching the last state change.
    #[must_use]
    pub fn regions(&self) -> &[HitRegion] {
        &self.regions
    }

    /// Current angle of every ray, in degrees.
    #[must_use]
    pub fn angles(&self) -> Vec<f64> {
        self.state.angles()
    }

    fn ray_style(&self, active: bool) -> TraceStyle {
        let style = &self.config.style;
        let color = if active { &style.active_ray_color } else { &style.ray_color };
        TraceStyle { color: color.clone(), width: style.ray_width }
    }

    fn refresh_regions(&mut self) {
        self.regions = hit::build_regions(&self.state, &self.scales, self.config.hit_thickness_px, CURVE_HIT_PAD_PX);
    }

    // --- Input events ---

    /// Start a gesture if `px` lands on a hit-region.
    pub fn on_pointer_down(&mut self, px: Point) -> Vec<Action> {
        if !self.drag.is_idle() {
            return Vec::new();
        }
        let Some(target) = hit::hit_test(&self.regions, px) else {
            return Vec::new();
        };

        self.drag = DragState::begin(target);
        log::debug!("drag start on {target:?}");
        match target {
            HitTarget::Ray(index) => vec![
                Action::SetCursor(CURSOR_GRABBING.to_string()),
                Action::Restyle { trace: index, style: self.ray_style(true) },
            ],
            HitTarget::Curve => vec![Action::SetCursor(CURSOR_POINTER.to_string())],
        }
    }

    /// Advance the gesture in progress toward `px`.
    pub fn on_pointer_move(&mut self, px: Point) -> Vec<Action> {
        match self.drag {
            DragState::Idle => Vec::new(),
            DragState::DraggingRay { index } => {
                let accepted = ray_candidate(&self.state, &self.scales, index, px)
                    .is_some_and(|candidate| self.state.try_set_ray_end(index, candidate));
                if accepted {
                    log::debug!("ray {index} moved to {:?}", self.state.rays[index].end);
                } else {
                    log::debug!("ray {index} move rejected; angles would lose ordering");
                }
                self.refresh_regions();
                vec![Action::RenderNeeded, Action::LabelsChanged]
            }
            DragState::DraggingCurve => {
                if let Some(step) = curve_step_for(&self.state, &self.scales, px, self.config.curve_dead_zone) {
                    if self.state.step_curve(step, self.config.curve_step) {
                        log::debug!("curve {step:?} to control point {:?}", self.state.curve.control_point);
                    }
                }
                self.refresh_regions();
                vec![Action::RenderNeeded]
            }
        }
    }

    /// End the gesture in progress.
    pub fn on_pointer_up(&mut self, _px: Point) -> Vec<Action> {
        let ended = std::mem::take(&mut self.drag);
        match ended {
            DragState::Idle => Vec::new(),
            DragState::DraggingRay { index } => {
                log::debug!("drag end on ray {index}");
                vec![
                    Action::SetCursor(CURSOR_POINTER.to_string()),
                    Action::Restyle { trace: index, style: self.ray_style(false) },
                ]
            }
            DragState::DraggingCurve => vec![Action::SetCursor(CURSOR_POINTER.to_string())],
        }
    }
}

/// The full chart engine. Wraps `ChartCore` and owns the browser-facing collaborators.
pub struct Engine {
    canvas: HtmlCanvasElement,
    surface: CanvasSurface,
    labels: DomLabels,
    pub core: ChartCore,
}

impl Engine {
    /// Bind to `canvas`, create the angle readouts inside `container_id`, and
    /// draw the initial state.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context or the first draw fails.
    pub fn new(
        canvas: HtmlCanvasElement,
        document: Document,
        container_id: &str,
        config: ChartConfig,
    ) -> Result<Self, ChartError> {
        let core = ChartCore::new(config);
        let surface =
            CanvasSurface::new(&canvas, core.config.surface_size_px, core.scales, core.config.style.clone())?;
        dom::build_angle_inputs(&document, container_id, &core.state.rays)?;

        let mut engine = Self { canvas, surface, labels: DomLabels::new(document), core };
        engine.apply(vec![Action::RenderNeeded, Action::LabelsChanged])?;
        log::info!("angle chart ready with {} rays", engine.core.state.rays.len());
        Ok(engine)
    }

    // --- Input events ---

    /// # Errors
    ///
    /// Returns `Err` if a resulting redraw or style change fails.
    pub fn on_pointer_down(&mut self, px: Point) -> Result<(), ChartError> {
        let actions = self.core.on_pointer_down(px);
        self.apply(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if a resulting redraw or style change fails.
    pub fn on_pointer_move(&mut self, px: Point) -> Result<(), ChartError> {
        let actions = self.core.on_pointer_move(px);
        self.apply(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if a resulting redraw or style change fails.
    pub fn on_pointer_up(&mut self, px: Point) -> Result<(), ChartError> {
        let actions = self.core.on_pointer_up(px);
        self.apply(actions)
    }

    /// Toggle hit-region outlines.
    ///
    /// # Errors
    ///
    /// Returns `Err` if repainting fails.
    pub fn set_show_regions(&mut self, show: bool) -> Result<(), ChartError> {
        self.surface.set_show_regions(show)
    }

    fn apply(&mut self, actions: Vec<Action>) -> Result<(), ChartError> {
        for action in actions {
            match action {
                Action::SetCursor(cursor) => dom::set_cursor(&self.canvas, &cursor)?,
                Action::Restyle { trace, style } => self.surface.restyle(trace, &style)?,
                Action::RenderNeeded => self.surface.redraw(&self.core.figure(), self.core.regions())?,
                Action::LabelsChanged => sync_labels(&self.core.state, &mut self.labels),
            }
        }
        Ok(())
    }
}
