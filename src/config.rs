//! Chart configuration.
//!
//! Every field has a default matching the stock zygosity chart, so a host may
//! pass no config at all, or a JSON object overriding only some fields:
//!
//! ```json
//! { "rays": [ { "name": "A", "angle": 20 }, ... ], "log_level": "debug" }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    AXIS_RANGE, CURVE_DEAD_ZONE, CURVE_STEP, PLOT_HEIGHT_PX, PLOT_WIDTH_PX, RAY_HIT_THICKNESS_PX, SURFACE_SIZE_PX,
    Y_MAX,
};
use crate::error::ChartError;
use crate::geometry::strictly_increasing;
use crate::render::ChartStyle;
use crate::state::CurveState;

/// Number of rays the chart is built around (two wedges of two rays each).
pub const RAY_COUNT: usize = 4;

/// Name and initial angle of one ray.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaySpec {
    pub name: String,
    /// Initial angle in degrees, measured from the positive x axis.
    pub angle: f64,
}

impl RaySpec {
    fn new(name: &str, angle: f64) -> Self {
        Self { name: name.to_string(), angle }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub axis_range: f64,
    pub y_max: f64,
    pub plot_width_px: f64,
    pub plot_height_px: f64,
    pub surface_size_px: f64,
    pub rays: Vec<RaySpec>,
    pub curve: CurveState,
    pub hit_thickness_px: f64,
    pub curve_dead_zone: f64,
    pub curve_step: f64,
    pub style: ChartStyle,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            axis_range: AXIS_RANGE,
            y_max: Y_MAX,
            plot_width_px: PLOT_WIDTH_PX,
            plot_height_px: PLOT_HEIGHT_PX,
            surface_size_px: SURFACE_SIZE_PX,
            rays: vec![
                RaySpec::new("Homozygous Max", 30.0),
                RaySpec::new("Heterozygous Min", 50.0),
                RaySpec::new("Heterozygous Max", 54.0),
                RaySpec::new("Homozygous Min", 65.0),
            ],
            curve: CurveState::default(),
            hit_thickness_px: RAY_HIT_THICKNESS_PX,
            curve_dead_zone: CURVE_DEAD_ZONE,
            curve_step: CURVE_STEP,
            style: ChartStyle::default(),
            log_level: "info".to_string(),
        }
    }
}

impl ChartConfig {
    /// Parse a config from JSON and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Config`] on malformed JSON and
    /// [`ChartError::InvalidConfig`] when [`ChartConfig::validate`] fails.
    pub fn from_json(raw: &str) -> Result<Self, ChartError> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse an optional JSON config, falling back to defaults when absent or blank.
    ///
    /// # Errors
    ///
    /// Same as [`ChartConfig::from_json`].
    pub fn from_optional_json(raw: Option<&str>) -> Result<Self, ChartError> {
        match raw.map(str::trim) {
            Some(s) if !s.is_empty() => Self::from_json(s),
            _ => Ok(Self::default()),
        }
    }

    /// Check the invariants the chart relies on.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidConfig`] describing the first violation.
    pub fn validate(&self) -> Result<(), ChartError> {
        let extents = [
            ("axis_range", self.axis_range),
            ("y_max", self.y_max),
            ("plot_width_px", self.plot_width_px),
            ("plot_height_px", self.plot_height_px),
            ("surface_size_px", self.surface_size_px),
            ("hit_thickness_px", self.hit_thickness_px),
            ("curve_step", self.curve_step),
        ];
        for (name, value) in extents {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if !(self.curve_dead_zone.is_finite() && self.curve_dead_zone >= 0.0) {
            return Err(invalid(format!("curve_dead_zone must be non-negative, got {}", self.curve_dead_zone)));
        }

        if self.rays.len() != RAY_COUNT {
            return Err(invalid(format!("expected {RAY_COUNT} rays, got {}", self.rays.len())));
        }
        if let Some(ray) = self.rays.iter().find(|r| !(r.angle > 0.0 && r.angle < 90.0)) {
            return Err(invalid(format!("ray {:?} angle {} outside (0, 90)", ray.name, ray.angle)));
        }
        let angles: Vec<f64> = self.rays.iter().map(|r| r.angle).collect();
        if !strictly_increasing(&angles) {
            return Err(invalid(format!("ray angles must be strictly increasing, got {angles:?}")));
        }

        let cp = self.curve.control_point;
        if !((0.0..=self.axis_range).contains(&cp.x) && (0.0..=self.axis_range).contains(&cp.y)) {
            return Err(invalid(format!("curve control point ({}, {}) outside [0, {}]", cp.x, cp.y, self.axis_range)));
        }
        Ok(())
    }

    /// The configured log level, defaulting to `Info` when unrecognised.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

fn invalid(msg: String) -> ChartError {
    ChartError::InvalidConfig(msg)
}
