//! Shared numeric constants for the chart crate.

// ── Domain ──────────────────────────────────────────────────────

/// Upper bound of the x axis (and of the curve control point) in domain units.
pub const AXIS_RANGE: f64 = 6.0;

/// Upper bound of the y axis in domain units.
pub const Y_MAX: f64 = 12.0;

// ── Pixels ──────────────────────────────────────────────────────

/// Pixel extent of the plot area along x.
pub const PLOT_WIDTH_PX: f64 = 720.0;

/// Pixel extent of the plot area along y.
pub const PLOT_HEIGHT_PX: f64 = 720.0;

/// Logical size of the square chart surface.
pub const SURFACE_SIZE_PX: f64 = 800.0;

// ── Hit-testing ─────────────────────────────────────────────────

/// Thickness of the grab band laid over each ray, in pixels.
pub const RAY_HIT_THICKNESS_PX: f64 = 10.0;

/// Padding around the curve's grab box, in pixels.
pub const CURVE_HIT_PAD_PX: f64 = 10.0;

// ── Curve drag ──────────────────────────────────────────────────

/// Vertical dead-zone (domain units) a curve drag must exceed before stepping.
pub const CURVE_DEAD_ZONE: f64 = 0.1;

/// Amount the curve's control coordinates move per step.
pub const CURVE_STEP: f64 = 1.0;
