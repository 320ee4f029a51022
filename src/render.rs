//! Rendering: builds the chart scene and paints it to a 2D context.
//!
//! The scene is rebuilt wholesale from [`ChartState`] on every change by
//! [`build_figure`]; there is no incremental diffing. A [`Figure`] is plain
//! data (traces, filled shapes, layout, surface options) and serializes to
//! the shape a JS charting library expects, so the same scene can be handed
//! to a host-side chart instead of the built-in canvas painter.
//!
//! [`draw`] is the only place in this module that touches
//! [`web_sys::CanvasRenderingContext2d`]. All fallible `Canvas2D` calls
//! propagate errors via `Result<(), JsValue>`.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::{Deserialize, Serialize, Serializer};
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::geometry::Point;
use crate::hit::{HitRegion, HitTarget};
use crate::scale::Scales;
use crate::state::ChartState;

/// Legend swatch length in pixels.
const LEGEND_SWATCH_PX: f64 = 24.0;
/// Vertical distance between legend rows in pixels.
const LEGEND_ROW_PX: f64 = 18.0;
/// Legend box width in pixels, measured from the right edge of the surface.
const LEGEND_WIDTH_PX: f64 = 170.0;

// =============================================================
// Style parameters
// =============================================================

/// Colors and widths used when building the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    pub ray_color: String,
    pub active_ray_color: String,
    pub ray_width: f64,
    pub axis_color: String,
    pub fill_color: String,
    pub shape_line_color: String,
    pub shape_line_width: f64,
    pub background: String,
    pub font: String,
    /// Outline colors for the ray hit-regions, by ray index.
    pub region_colors: Vec<String>,
    pub curve_region_color: String,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            ray_color: "blue".to_string(),
            active_ray_color: "green".to_string(),
            ray_width: 2.0,
            axis_color: "black".to_string(),
            fill_color: "rgba(0, 0, 255, 0.2)".to_string(),
            shape_line_color: "rgba(0, 0, 255, 0.6)".to_string(),
            shape_line_width: 2.0,
            background: "white".to_string(),
            font: "12px sans-serif".to_string(),
            region_colors: ["red", "blue", "yellow", "purple"].map(String::from).to_vec(),
            curve_region_color: "gray".to_string(),
        }
    }
}

/// Per-trace line style; also the payload of a restyle patch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceStyle {
    pub color: String,
    pub width: f64,
}

// =============================================================
// Scene description
// =============================================================

/// What hovering a trace reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverInfo {
    Name,
    Skip,
}

/// A polyline in domain coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub mode: &'static str,
    pub name: Option<String>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub line: TraceStyle,
    #[serde(rename = "showlegend")]
    pub show_legend: bool,
    #[serde(rename = "hoverinfo")]
    pub hover_info: HoverInfo,
}

impl Trace {
    fn segment(name: Option<String>, from: Point, to: Point, line: TraceStyle) -> Self {
        Self {
            kind: "scatter",
            mode: "lines",
            name,
            x: vec![from.x, to.x],
            y: vec![from.y, to.y],
            line,
            show_legend: true,
            hover_info: HoverInfo::Name,
        }
    }

    /// Points of the trace, paired up.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| Point::new(x, y))
    }
}

/// One drawing command of a filled shape path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCmd {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, to: Point },
    Close,
}

/// Render a path as SVG path data, e.g. `M 0 0 L 6 3 Z`.
#[must_use]
pub fn svg_path(cmds: &[PathCmd]) -> String {
    cmds.iter()
        .map(|cmd| match cmd {
            PathCmd::MoveTo(p) => format!("M {} {}", p.x, p.y),
            PathCmd::LineTo(p) => format!("L {} {}", p.x, p.y),
            PathCmd::QuadTo { control, to } => format!("Q {} {}, {} {}", control.x, control.y, to.x, to.y),
            PathCmd::Close => "Z".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn serialize_path<S: Serializer>(cmds: &[PathCmd], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&svg_path(cmds))
}

/// A filled path overlay in domain coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(serialize_with = "serialize_path")]
    pub path: Vec<PathCmd>,
    #[serde(rename = "fillcolor")]
    pub fill_color: String,
    pub line: TraceStyle,
}

/// One axis of the layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub range: [f64; 2],
    #[serde(rename = "showgrid")]
    pub show_grid: bool,
    #[serde(rename = "zeroline")]
    pub zero_line: bool,
    /// Axis this one is locked to, e.g. `"x"`.
    #[serde(rename = "scaleanchor", skip_serializing_if = "Option::is_none")]
    pub scale_anchor: Option<&'static str>,
    /// Pixels-per-unit ratio to the anchor axis; 1 keeps equal aspect.
    #[serde(rename = "scaleratio", skip_serializing_if = "Option::is_none")]
    pub scale_ratio: Option<f64>,
}

impl Axis {
    fn plain(range: [f64; 2]) -> Self {
        Self { range, show_grid: false, zero_line: false, scale_anchor: None, scale_ratio: None }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    #[serde(rename = "xaxis")]
    pub x_axis: Axis,
    #[serde(rename = "yaxis")]
    pub y_axis: Axis,
    #[serde(rename = "showlegend")]
    pub show_legend: bool,
    /// Built-in drag gestures of the chart surface. Always `false`;
    /// interaction goes through hit-regions instead.
    #[serde(rename = "dragmode")]
    pub drag_mode: bool,
    #[serde(rename = "hovermode")]
    pub hover_mode: &'static str,
}

/// Options for the chart surface chrome.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SurfaceConfig {
    pub display_mode_bar: bool,
    #[serde(rename = "displaylogo")]
    pub display_logo: bool,
    pub mode_bar_buttons_to_remove: Vec<&'static str>,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            display_mode_bar: true,
            display_logo: false,
            mode_bar_buttons_to_remove: vec!["select2d", "lasso2d", "hoverClosestCartesian", "hoverCompareCartesian"],
        }
    }
}

/// The complete scene. Ray `i` is trace `i`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub traces: Vec<Trace>,
    pub shapes: Vec<Shape>,
    pub layout: Layout,
    pub config: SurfaceConfig,
}

/// Build the scene for `state`. `active` is the ray being dragged, if any,
/// which is drawn in the active color.
#[must_use]
pub fn build_figure(state: &ChartState, style: &ChartStyle, surface_size: f64, active: Option<usize>) -> Figure {
    let axis_range = state.viewport.x_max;
    let origin = Point::default();

    let mut traces: Vec<Trace> = state
        .rays
        .iter()
        .enumerate()
        .map(|(i, ray)| {
            let color = if active == Some(i) { &style.active_ray_color } else { &style.ray_color };
            let line = TraceStyle { color: color.clone(), width: style.ray_width };
            Trace::segment(Some(ray.name.clone()), ray.start, ray.end, line)
        })
        .collect();

    let axis_line = TraceStyle { color: style.axis_color.clone(), width: 1.0 };
    for end in [Point::new(axis_range, 0.0), Point::new(0.0, axis_range)] {
        traces.push(Trace {
            show_legend: false,
            hover_info: HoverInfo::Skip,
            ..Trace::segment(None, origin, end, axis_line.clone())
        });
    }

    let outline = TraceStyle { color: style.shape_line_color.clone(), width: style.shape_line_width };
    let filled =
        |path: Vec<PathCmd>| Shape { kind: "path", path, fill_color: style.fill_color.clone(), line: outline.clone() };

    let mut shapes: Vec<Shape> = state
        .rays
        .chunks_exact(2)
        .map(|pair| {
            filled(vec![PathCmd::MoveTo(origin), PathCmd::LineTo(pair[0].end), PathCmd::LineTo(pair[1].end), PathCmd::Close])
        })
        .collect();

    let curve = &state.curve;
    shapes.push(filled(vec![
        PathCmd::MoveTo(origin),
        PathCmd::LineTo(curve.start),
        PathCmd::QuadTo { control: curve.control_point, to: curve.end },
        PathCmd::Close,
    ]));

    let layout = Layout {
        width: surface_size,
        height: surface_size,
        x_axis: Axis::plain([0.0, axis_range]),
        y_axis: Axis { scale_anchor: Some("x"), scale_ratio: Some(1.0), ..Axis::plain([0.0, axis_range]) },
        show_legend: true,
        drag_mode: false,
        hover_mode: "closest",
    };

    Figure { traces, shapes, layout, config: SurfaceConfig::default() }
}

// =============================================================
// Canvas painter
// =============================================================

/// Hit-region outlines drawn over the scene, colored by target.
pub struct RegionOverlay<'a> {
    pub regions: &'a [HitRegion],
    pub ray_colors: &'a [String],
    pub curve_color: &'a str,
}

/// Paint `figure` onto `ctx`, mapping domain coordinates through `scales`.
///
/// Shapes and traces are clipped to the layout's axis ranges. `scales` must
/// already give both axes the same pixels-per-unit (see [`Scales::new`]).
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    figure: &Figure,
    scales: &Scales,
    style: &ChartStyle,
    overlay: Option<&RegionOverlay<'_>>,
) -> Result<(), JsValue> {
    let layout = &figure.layout;

    // Layer 1: clear.
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, layout.width, layout.height);
    ctx.set_fill_style_str(&style.background);
    ctx.fill_rect(0.0, 0.0, layout.width, layout.height);

    let (x, y, w, h) = scales.pixel_rect(layout.x_axis.range, layout.y_axis.range);
    ctx.save();
    ctx.begin_path();
    ctx.rect(x, y, w, h);
    ctx.clip();

    // Layer 2: filled shapes under the lines.
    for shape in &figure.shapes {
        draw_shape(ctx, shape, scales);
    }

    // Layer 3: traces.
    for trace in &figure.traces {
        draw_trace(ctx, trace, scales);
    }
    ctx.restore();

    if layout.show_legend {
        draw_legend(ctx, figure, style)?;
    }

    if let Some(overlay) = overlay {
        draw_regions(ctx, overlay);
    }

    Ok(())
}

fn trace_path(ctx: &CanvasRenderingContext2d, cmds: &[PathCmd], scales: &Scales) {
    ctx.begin_path();
    for cmd in cmds {
        match *cmd {
            PathCmd::MoveTo(p) => {
                let px = scales.domain_to_pixel(p);
                ctx.move_to(px.x, px.y);
            }
            PathCmd::LineTo(p) => {
                let px = scales.domain_to_pixel(p);
                ctx.line_to(px.x, px.y);
            }
            PathCmd::QuadTo { control, to } => {
                let c = scales.domain_to_pixel(control);
                let t = scales.domain_to_pixel(to);
                ctx.quadratic_curve_to(c.x, c.y, t.x, t.y);
            }
            PathCmd::Close => ctx.close_path(),
        }
    }
}

fn draw_shape(ctx: &CanvasRenderingContext2d, shape: &Shape, scales: &Scales) {
    trace_path(ctx, &shape.path, scales);
    ctx.set_fill_style_str(&shape.fill_color);
    ctx.fill();
    ctx.set_stroke_style_str(&shape.line.color);
    ctx.set_line_width(shape.line.width);
    ctx.stroke();
}

fn draw_trace(ctx: &CanvasRenderingContext2d, trace: &Trace, scales: &Scales) {
    ctx.begin_path();
    for (i, p) in trace.points().enumerate() {
        let px = scales.domain_to_pixel(p);
        if i == 0 {
            ctx.move_to(px.x, px.y);
        } else {
            ctx.line_to(px.x, px.y);
        }
    }
    ctx.set_stroke_style_str(&trace.line.color);
    ctx.set_line_width(trace.line.width);
    ctx.stroke();
}

fn draw_legend(ctx: &CanvasRenderingContext2d, figure: &Figure, style: &ChartStyle) -> Result<(), JsValue> {
    let left = figure.layout.width - LEGEND_WIDTH_PX;
    let mut y = LEGEND_ROW_PX;

    ctx.set_font(&style.font);
    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");

    for trace in figure.traces.iter().filter(|t| t.show_legend) {
        let Some(name) = trace.name.as_deref() else {
            continue;
        };
        ctx.begin_path();
        ctx.move_to(left, y);
        ctx.line_to(left + LEGEND_SWATCH_PX, y);
        ctx.set_stroke_style_str(&trace.line.color);
        ctx.set_line_width(trace.line.width);
        ctx.stroke();

        ctx.set_fill_style_str(&style.axis_color);
        ctx.fill_text(name, left + LEGEND_SWATCH_PX + 6.0, y)?;
        y += LEGEND_ROW_PX;
    }
    Ok(())
}

fn draw_regions(ctx: &CanvasRenderingContext2d, overlay: &RegionOverlay<'_>) {
    ctx.set_line_width(2.0);
    for region in overlay.regions {
        let color = match region.target {
            HitTarget::Ray(i) => overlay.ray_colors.get(i).map_or(overlay.curve_color, String::as_str),
            HitTarget::Curve => overlay.curve_color,
        };
        let corners = region.corners();
        ctx.begin_path();
        ctx.move_to(corners[0].x, corners[0].y);
        for c in &corners[1..] {
            ctx.line_to(c.x, c.y);
        }
        ctx.close_path();
        ctx.set_stroke_style_str(color);
        ctx.stroke();
    }
}
