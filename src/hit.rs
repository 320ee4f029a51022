//! Hit-regions: invisible grab areas laid over each ray and the curve.
//!
//! Regions live in pixel space and are rebuilt from the state after every
//! render, so they always match what is on screen. Later regions sit on top
//! of earlier ones, and [`hit_test`] checks them topmost-first.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geometry::Point;
use crate::scale::Scales;
use crate::state::ChartState;

/// What a hit-region is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Ray at this index.
    Ray(usize),
    /// The curve's control point.
    Curve,
}

/// A rectangle, possibly rotated, in pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub target: HitTarget,
    pub center: Point,
    /// Half extent along the rectangle's own x axis.
    pub half_len: f64,
    /// Half extent across it.
    pub half_thick: f64,
    /// Rotation of the rectangle's x axis, in radians.
    pub angle: f64,
}

impl HitRegion {
    /// Band of `thickness` pixels centred on the segment `a`–`b`.
    #[must_use]
    pub fn along_segment(target: HitTarget, a: Point, b: Point, thickness: f64) -> Self {
        Self {
            target,
            center: a.midpoint(b),
            half_len: a.distance(b) * 0.5,
            half_thick: thickness * 0.5,
            angle: (b.y - a.y).atan2(b.x - a.x),
        }
    }

    /// Axis-aligned box with top-left corner `(x, y)`.
    #[must_use]
    pub fn axis_aligned(target: HitTarget, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            target,
            center: Point::new(x + w * 0.5, y + h * 0.5),
            half_len: w * 0.5,
            half_thick: h * 0.5,
            angle: 0.0,
        }
    }

    /// Whether pixel point `p` falls inside the region (edges included).
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        let local = self.pixel_to_local(p);
        local.x.abs() <= self.half_len && local.y.abs() <= self.half_thick
    }

    /// Corners in pixel space, in drawing order.
    #[must_use]
    pub fn corners(&self) -> [Point; 4] {
        [
            (-self.half_len, -self.half_thick),
            (self.half_len, -self.half_thick),
            (self.half_len, self.half_thick),
            (-self.half_len, self.half_thick),
        ]
        .map(|(x, y)| self.local_to_pixel(Point::new(x, y)))
    }

    fn pixel_to_local(&self, p: Point) -> Point {
        let (sin, cos) = self.angle.sin_cos();
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        Point::new(dx * cos + dy * sin, -dx * sin + dy * cos)
    }

    fn local_to_pixel(&self, local: Point) -> Point {
        let (sin, cos) = self.angle.sin_cos();
        Point::new(
            self.center.x + local.x * cos - local.y * sin,
            self.center.y + local.x * sin + local.y * cos,
        )
    }
}

/// Rebuild every region from the current state: one band per ray, then the
/// curve's box on top.
#[must_use]
pub fn build_regions(state: &ChartState, scales: &Scales, ray_thickness: f64, curve_pad: f64) -> Vec<HitRegion> {
    let mut regions: Vec<HitRegion> = state
        .rays
        .iter()
        .enumerate()
        .map(|(i, ray)| {
            let a = scales.domain_to_pixel(ray.start);
            let b = scales.domain_to_pixel(ray.end);
            HitRegion::along_segment(HitTarget::Ray(i), a, b, ray_thickness)
        })
        .collect();

    let curve = &state.curve;
    let start_y = scales.y.map(curve.start.y);
    let control_y = scales.y.map(curve.control_point.y);
    regions.push(HitRegion::axis_aligned(
        HitTarget::Curve,
        scales.x.map(curve.start.x) - curve_pad,
        start_y.min(control_y) - curve_pad,
        scales.x.map(curve.end.x) + curve_pad * 2.0,
        (start_y - control_y).abs() + curve_pad * 2.0,
    ));
    regions
}

/// Topmost region containing pixel point `p`.
#[must_use]
pub fn hit_test(regions: &[HitRegion], p: Point) -> Option<HitTarget> {
    regions.iter().rev().find(|r| r.contains(p)).map(|r| r.target)
}
