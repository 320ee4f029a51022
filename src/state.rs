//! Chart state: the four rays and the curve, owned in one place.
//!
//! `ChartState` is created once from a [`ChartConfig`] and then mutated only
//! through its methods, which enforce the ordering invariant on ray angles
//! and the range limits on the curve's control point.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;
use crate::geometry::{Point, Viewport, angle_between_checked, direction, strictly_increasing};

/// One draggable ray from the origin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ray {
    pub name: String,
    /// Angle the ray was created with, in degrees. The live angle is
    /// [`Ray::current_angle`], derived from the endpoints.
    pub angle: f64,
    pub start: Point,
    pub end: Point,
}

impl Ray {
    /// Angle of the ray as drawn, in degrees. `None` when the ray has
    /// collapsed onto its start point.
    #[must_use]
    pub fn current_angle(&self) -> Option<f64> {
        angle_between_checked(self.start, self.end)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// Quadratic curve bounding the no-call region near the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveState {
    pub start: Point,
    pub end: Point,
    pub control_point: Point,
}

impl Default for CurveState {
    fn default() -> Self {
        Self {
            start: Point::new(0.0, 4.0),
            end: Point::new(4.0, 0.0),
            control_point: Point::new(4.0, 4.0),
        }
    }
}

/// Which way a curve step moves the control coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveStep {
    Grow,
    Shrink,
}

/// Everything the chart draws, plus the bounds it is drawn in.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartState {
    pub rays: Vec<Ray>,
    pub curve: CurveState,
    pub viewport: Viewport,
}

impl ChartState {
    /// Build the initial state: each ray's endpoint is where its configured
    /// direction leaves the viewport.
    #[must_use]
    pub fn new(cfg: &ChartConfig) -> Self {
        let viewport = Viewport::new(cfg.axis_range, cfg.y_max);
        let rays = cfg
            .rays
            .iter()
            .map(|spec| {
                let (dx, dy) = direction(spec.angle);
                Ray {
                    name: spec.name.clone(),
                    angle: spec.angle,
                    start: Point::default(),
                    end: viewport.clamp_ray(dx, dy).unwrap_or_default(),
                }
            })
            .collect();
        Self { rays, curve: cfg.curve, viewport }
    }

    /// Current angle of every ray, in index order. A collapsed ray reports
    /// NaN, which never satisfies the ordering check.
    #[must_use]
    pub fn angles(&self) -> Vec<f64> {
        self.rays.iter().map(|ray| ray.current_angle().unwrap_or(f64::NAN)).collect()
    }

    /// Angles as they would be with ray `index` ending at `candidate`.
    #[must_use]
    pub fn angles_with(&self, index: usize, candidate: Point) -> Vec<f64> {
        self.rays
            .iter()
            .enumerate()
            .map(|(i, ray)| {
                let angle = if i == index { angle_between_checked(ray.start, candidate) } else { ray.current_angle() };
                angle.unwrap_or(f64::NAN)
            })
            .collect()
    }

    /// Move ray `index` to end at `candidate` if the angles stay strictly
    /// increasing. Returns whether the move was applied.
    pub fn try_set_ray_end(&mut self, index: usize, candidate: Point) -> bool {
        if index >= self.rays.len() || !candidate.is_finite() {
            return false;
        }
        if !strictly_increasing(&self.angles_with(index, candidate)) {
            return false;
        }
        self.rays[index].end = candidate;
        true
    }

    /// Step the curve by `amount`: control point, `start.y` and `end.x` move
    /// together. The step is skipped if it would take the control point
    /// outside `[0, viewport.x_max]`. Returns whether the curve changed.
    pub fn step_curve(&mut self, step: CurveStep, amount: f64) -> bool {
        let delta = match step {
            CurveStep::Grow => amount,
            CurveStep::Shrink => -amount,
        };
        let cp = self.curve.control_point;
        let next = Point::new(cp.x + delta, cp.y + delta);
        let limit = 0.0..=self.viewport.x_max;
        if !(limit.contains(&next.x) && limit.contains(&next.y)) {
            return false;
        }
        self.curve.control_point = next;
        self.curve.start.y += delta;
        self.curve.end.x += delta;
        true
    }
}
