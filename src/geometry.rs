//! Pure geometry: points, ray/viewport clamping, and angles.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A point in either domain or pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Midpoint of the segment `self`–`other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned viewport anchored at the origin: `[0, x_max] × [0, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x_max: f64,
    pub y_max: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(x_max: f64, y_max: f64) -> Self {
        Self { x_max, y_max }
    }

    /// Whether `p` lies inside the viewport (edges included).
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        (0.0..=self.x_max).contains(&p.x) && (0.0..=self.y_max).contains(&p.y)
    }

    /// Where a ray from the origin along `(dx, dy)` leaves the viewport.
    ///
    /// The ray hits the right edge unless that would put it above the top
    /// edge, in which case it hits the top edge. Rays live in the first
    /// quadrant, so negative components are treated as zero: a vertical
    /// direction exits at `(0, y_max)` and a horizontal one at `(x_max, 0)`.
    /// Returns `None` for a zero or non-finite direction.
    #[must_use]
    pub fn clamp_ray(&self, dx: f64, dy: f64) -> Option<Point> {
        if !dx.is_finite() || !dy.is_finite() {
            return None;
        }
        let dx = dx.max(0.0);
        let dy = dy.max(0.0);

        if dx == 0.0 && dy == 0.0 {
            return None;
        }
        if dx == 0.0 {
            return Some(Point::new(0.0, self.y_max));
        }

        let slope = dy / dx;
        let y_at_x_max = slope * self.x_max;
        if y_at_x_max <= self.y_max {
            Some(Point::new(self.x_max, y_at_x_max))
        } else {
            Some(Point::new(self.y_max / slope, self.y_max))
        }
    }
}

/// Direction angle from `start` to `end` in degrees, in `(-180, 180]`.
///
/// Coincident points yield `0.0`; use [`angle_between_checked`] to detect them.
#[must_use]
pub fn angle_between(start: Point, end: Point) -> f64 {
    (end.y - start.y).atan2(end.x - start.x).to_degrees()
}

/// Like [`angle_between`], but `None` when the points coincide.
#[must_use]
pub fn angle_between_checked(start: Point, end: Point) -> Option<f64> {
    if start == end {
        return None;
    }
    Some(angle_between(start, end))
}

/// Whether `angles` is strictly increasing.
#[must_use]
pub fn strictly_increasing(angles: &[f64]) -> bool {
    angles.windows(2).all(|w| w[0] < w[1])
}

/// Unit direction for an angle in degrees.
#[must_use]
pub fn direction(angle_deg: f64) -> (f64, f64) {
    let rad = angle_deg.to_radians();
    (rad.cos(), rad.sin())
}
