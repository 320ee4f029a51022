#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = ChartConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.axis_range, 6.0);
    assert_eq!(cfg.y_max, 12.0);
    assert_eq!(cfg.rays.len(), 4);
    let angles: Vec<f64> = cfg.rays.iter().map(|r| r.angle).collect();
    assert_eq!(angles, [30.0, 50.0, 54.0, 65.0]);
}

#[test]
fn missing_json_uses_defaults() {
    assert_eq!(ChartConfig::from_optional_json(None).unwrap(), ChartConfig::default());
    assert_eq!(ChartConfig::from_optional_json(Some("  ")).unwrap(), ChartConfig::default());
}

#[test]
fn partial_json_overrides_only_given_fields() {
    let cfg = ChartConfig::from_json(r#"{ "log_level": "debug", "hit_thickness_px": 14 }"#).unwrap();
    assert_eq!(cfg.hit_thickness_px, 14.0);
    assert_eq!(cfg.log_level(), log::Level::Debug);
    assert_eq!(cfg.rays, ChartConfig::default().rays);
}

#[test]
fn nested_style_is_partial_too() {
    let cfg = ChartConfig::from_json(r#"{ "style": { "ray_color": "navy" } }"#).unwrap();
    assert_eq!(cfg.style.ray_color, "navy");
    assert_eq!(cfg.style.active_ray_color, "green");
}

#[test]
fn custom_rays() {
    let raw = r#"{ "rays": [
        { "name": "a", "angle": 10 },
        { "name": "b", "angle": 20 },
        { "name": "c", "angle": 30 },
        { "name": "d", "angle": 40 }
    ] }"#;
    let cfg = ChartConfig::from_json(raw).unwrap();
    assert_eq!(cfg.rays[2].name, "c");
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = ChartConfig::from_json("{ nope").unwrap_err();
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn unordered_rays_are_rejected() {
    let mut cfg = ChartConfig::default();
    cfg.rays[1].angle = 60.0;
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, ChartError::InvalidConfig(ref m) if m.contains("strictly increasing")));
}

#[test]
fn wrong_ray_count_is_rejected() {
    let mut cfg = ChartConfig::default();
    cfg.rays.pop();
    assert!(matches!(cfg.validate(), Err(ChartError::InvalidConfig(_))));
}

#[test]
fn ray_angle_outside_first_quadrant_is_rejected() {
    let mut cfg = ChartConfig::default();
    cfg.rays[3].angle = 90.0;
    assert!(matches!(cfg.validate(), Err(ChartError::InvalidConfig(_))));
}

#[test]
fn non_positive_extent_is_rejected() {
    let mut cfg = ChartConfig::default();
    cfg.axis_range = 0.0;
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("axis_range"));
}

#[test]
fn control_point_outside_axis_range_is_rejected() {
    let mut cfg = ChartConfig::default();
    cfg.curve.control_point = crate::geometry::Point::new(7.0, 7.0);
    assert!(matches!(cfg.validate(), Err(ChartError::InvalidConfig(_))));
}

#[test]
fn unknown_log_level_falls_back_to_info() {
    let cfg = ChartConfig { log_level: "chatty".to_string(), ..ChartConfig::default() };
    assert_eq!(cfg.log_level(), log::Level::Info);
}
