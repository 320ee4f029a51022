//! Input model: the drag state machine and per-frame drag math.
//!
//! `DragState` is the gesture tracked between pointer-down and pointer-up.
//! The free functions turn a pointer position into a proposed change; the
//! engine decides whether to apply it.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;
use crate::hit::HitTarget;
use crate::scale::Scales;
use crate::state::{ChartState, CurveStep};

/// Internal state for the drag state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A ray is being rotated about its start point.
    DraggingRay {
        /// Index of the ray being dragged.
        index: usize,
    },
    /// The curve is being reshaped in discrete steps.
    DraggingCurve,
}

impl DragState {
    /// The gesture a pointer-down on `target` starts.
    #[must_use]
    pub fn begin(target: HitTarget) -> Self {
        match target {
            HitTarget::Ray(index) => Self::DraggingRay { index },
            HitTarget::Curve => Self::DraggingCurve,
        }
    }

    #[must_use]
    pub fn is_idle(self) -> bool {
        self == Self::Idle
    }

    /// Index of the ray being dragged, if any.
    #[must_use]
    pub fn active_ray(self) -> Option<usize> {
        match self {
            Self::DraggingRay { index } => Some(index),
            _ => None,
        }
    }
}

/// Where ray `index` would end if dragged toward pixel point `pointer_px`.
///
/// The ray keeps its current length and turns toward the pointer; the result
/// is clamped into the scale domains and then pushed out to the viewport
/// boundary along the same direction. `None` when the ray doesn't exist or
/// the direction degenerates.
#[must_use]
pub fn ray_candidate(state: &ChartState, scales: &Scales, index: usize, pointer_px: Point) -> Option<Point> {
    let ray = state.rays.get(index)?;
    let pointer = scales.pixel_to_domain(pointer_px);

    let heading = (pointer.y - ray.start.y).atan2(pointer.x - ray.start.x);
    let length = ray.length();

    let x = scales.x.clamp_domain(ray.start.x + length * heading.cos());
    let y = scales.y.clamp_domain(ray.start.y + length * heading.sin());

    state.viewport.clamp_ray(x - ray.start.x, y - ray.start.y)
}

/// Which way a curve drag at pixel point `pointer_px` steps the curve, if at all.
///
/// The pointer must sit more than `dead_zone` domain units above or below the
/// control point.
#[must_use]
pub fn curve_step_for(state: &ChartState, scales: &Scales, pointer_px: Point, dead_zone: f64) -> Option<CurveStep> {
    let dy = scales.y.invert(pointer_px.y) - state.curve.control_point.y;
    if dy > dead_zone {
        Some(CurveStep::Grow)
    } else if dy < -dead_zone {
        Some(CurveStep::Shrink)
    } else {
        None
    }
}
