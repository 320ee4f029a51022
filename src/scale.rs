#[cfg(test)]
#[path = "scale_test.rs"]
mod scale_test;

use crate::config::ChartConfig;
use crate::geometry::Point;

/// Linear mapping from a domain interval onto a pixel interval.
///
/// The range may be inverted (`range.0 > range.1`), which is how the y axis
/// puts larger values higher on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Domain value to pixel.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = (value - d0) / (d1 - d0);
        t.mul_add(r1 - r0, r0)
    }

    /// Pixel to domain value.
    #[must_use]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = (px - r0) / (r1 - r0);
        t.mul_add(d1 - d0, d0)
    }

    /// Clamp a domain value into this scale's domain.
    #[must_use]
    pub fn clamp_domain(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        value.clamp(d0.min(d1), d0.max(d1))
    }

    /// Domain distance to pixel distance (unsigned).
    #[must_use]
    pub fn span_px(&self, domain_dist: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        (domain_dist * (r1 - r0) / (d1 - d0)).abs()
    }
}

/// The pair of axis scales used by rendering and pointer handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl Scales {
    /// Build both scales from the chart configuration.
    ///
    /// The visible plot is the square `[0, axis_range]²` fitted into the plot
    /// area, so both axes share one pixels-per-unit factor. The y domain still
    /// runs to `y_max`; the part above `axis_range` maps above the plot and is
    /// clipped when painted. The y pixel range is inverted so larger domain
    /// values render higher.
    #[must_use]
    pub fn new(cfg: &ChartConfig) -> Self {
        let px_per_unit = (cfg.plot_width_px / cfg.axis_range).min(cfg.plot_height_px / cfg.axis_range);
        let bottom = cfg.plot_height_px;
        Self {
            x: LinearScale::new((0.0, cfg.axis_range), (0.0, cfg.axis_range * px_per_unit)),
            y: LinearScale::new((0.0, cfg.y_max), (bottom, cfg.y_max.mul_add(-px_per_unit, bottom))),
        }
    }

    /// Pixel rectangle `(x, y, w, h)` covering the domain box
    /// `x_range × y_range`.
    #[must_use]
    pub fn pixel_rect(&self, x_range: [f64; 2], y_range: [f64; 2]) -> (f64, f64, f64, f64) {
        let a = self.domain_to_pixel(Point::new(x_range[0], y_range[1]));
        let b = self.domain_to_pixel(Point::new(x_range[1], y_range[0]));
        (a.x.min(b.x), a.y.min(b.y), (b.x - a.x).abs(), (b.y - a.y).abs())
    }

    /// Domain point to pixel point.
    #[must_use]
    pub fn domain_to_pixel(&self, p: Point) -> Point {
        Point::new(self.x.map(p.x), self.y.map(p.y))
    }

    /// Pixel point to domain point.
    #[must_use]
    pub fn pixel_to_domain(&self, px: Point) -> Point {
        Point::new(self.x.invert(px.x), self.y.invert(px.y))
    }
}
