#![allow(clippy::float_cmp)]

use super::*;
use crate::geometry::direction;
use crate::labels::LabelSink;

const EPSILON: f64 = 1e-6;

// =============================================================
// Helpers
// =============================================================

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn core() -> ChartCore {
    ChartCore::new(ChartConfig::default())
}

/// Pixel point on ray `index`, inside the visible square and clear of the curve.
fn on_ray(core: &ChartCore, index: usize) -> Point {
    let ray = &core.state.rays[index];
    let len = ray.length();
    let t = 5.5 / len;
    let p = Point::new(ray.start.x + (ray.end.x - ray.start.x) * t, ray.start.y + (ray.end.y - ray.start.y) * t);
    core.scales.domain_to_pixel(p)
}

/// Pixel point at `angle` degrees from the origin, well inside the plot.
fn toward(core: &ChartCore, angle: f64) -> Point {
    let (dx, dy) = direction(angle);
    core.scales.domain_to_pixel(Point::new(dx * 3.0, dy * 3.0))
}

fn domain_px(core: &ChartCore, x: f64, y: f64) -> Point {
    core.scales.domain_to_pixel(Point::new(x, y))
}

#[derive(Default)]
struct RecordingSink {
    labels: Vec<String>,
}

impl LabelSink for RecordingSink {
    fn set_label(&mut self, index: usize, text: &str) {
        if self.labels.len() <= index {
            self.labels.resize(index + 1, String::new());
        }
        self.labels[index] = text.to_string();
    }
}

/// Apply actions the way `Engine` does, minus the browser.
fn labels_after(core: &ChartCore, actions: &[Action], sink: &mut RecordingSink) {
    if actions.contains(&Action::LabelsChanged) {
        sync_labels(&core.state, sink);
    }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn starts_idle_with_regions() {
    let c = core();
    assert!(c.drag.is_idle());
    assert_eq!(c.regions().len(), 5);
}

#[test]
fn initial_angles() {
    let angles = core().angles();
    for (got, want) in angles.iter().zip([30.0, 50.0, 54.0, 65.0]) {
        assert!(approx_eq(*got, want));
    }
}

#[test]
fn figure_has_rays_axes_and_shapes() {
    let f = core().figure();
    assert_eq!(f.traces.len(), 6);
    assert_eq!(f.shapes.len(), 3);
}

// =============================================================
// Pointer down
// =============================================================

#[test]
fn pointer_down_on_empty_space_does_nothing() {
    let mut c = core();
    let actions = c.on_pointer_down(domain_px(&c, 5.5, 0.5));
    assert!(actions.is_empty());
    assert!(c.drag.is_idle());
}

#[test]
fn pointer_down_on_ray_grabs_and_highlights() {
    let mut c = core();
    let px = on_ray(&c, 1);
    let actions = c.on_pointer_down(px);
    assert_eq!(c.drag, DragState::DraggingRay { index: 1 });
    assert_eq!(actions[0], Action::SetCursor("grabbing".to_string()));
    assert_eq!(
        actions[1],
        Action::Restyle { trace: 1, style: TraceStyle { color: "green".to_string(), width: 2.0 } }
    );
}

#[test]
fn figure_highlights_dragged_ray() {
    let mut c = core();
    let px = on_ray(&c, 2);
    c.on_pointer_down(px);
    let f = c.figure();
    assert_eq!(f.traces[2].line.color, "green");
    assert_eq!(f.traces[1].line.color, "blue");
}

#[test]
fn pointer_down_on_curve_starts_curve_drag() {
    let mut c = core();
    let px = domain_px(&c, 2.0, 4.0);
    let actions = c.on_pointer_down(px);
    assert_eq!(c.drag, DragState::DraggingCurve);
    assert_eq!(actions, vec![Action::SetCursor("pointer".to_string())]);
}

#[test]
fn second_pointer_down_is_ignored_mid_drag() {
    let mut c = core();
    let px = on_ray(&c, 0);
    c.on_pointer_down(px);
    let px = on_ray(&c, 3);
    assert!(c.on_pointer_down(px).is_empty());
    assert_eq!(c.drag, DragState::DraggingRay { index: 0 });
}

// =============================================================
// Ray drag
// =============================================================

#[test]
fn drag_between_neighbours_is_accepted() {
    let mut c = core();
    let mut sink = RecordingSink::default();
    let px = on_ray(&c, 1);
    c.on_pointer_down(px);

    let px = toward(&c, 52.0);
    let actions = c.on_pointer_move(px);
    assert_eq!(actions, vec![Action::RenderNeeded, Action::LabelsChanged]);
    labels_after(&c, &actions, &mut sink);

    assert!(approx_eq(c.angles()[1], 52.0));
    assert_eq!(sink.labels[1], "52.00°");
}

#[test]
fn drag_past_neighbour_is_rejected_and_label_kept() {
    let mut c = core();
    let mut sink = RecordingSink::default();
    sync_labels(&c.state, &mut sink);
    let before = c.state.rays[1].end;

    let px = on_ray(&c, 1);
    c.on_pointer_down(px);
    let px = toward(&c, 55.0);
    let actions = c.on_pointer_move(px);
    labels_after(&c, &actions, &mut sink);

    assert_eq!(c.state.rays[1].end, before);
    assert_eq!(sink.labels[1], "50.00°");
    // Rejected steps still re-render.
    assert!(actions.contains(&Action::RenderNeeded));
}

#[test]
fn accepted_then_rejected_keeps_last_accepted() {
    let mut c = core();
    let px = on_ray(&c, 1);
    c.on_pointer_down(px);
    let px = toward(&c, 52.0);
    c.on_pointer_move(px);
    let accepted = c.state.rays[1].end;

    let px = toward(&c, 70.0);
    c.on_pointer_move(px);
    assert_eq!(c.state.rays[1].end, accepted);
}

#[test]
fn regions_follow_the_moved_ray() {
    let mut c = core();
    let px = on_ray(&c, 0);
    c.on_pointer_down(px);
    let px = toward(&c, 20.0);
    c.on_pointer_move(px);

    let region = c.regions()[0];
    let a = c.scales.domain_to_pixel(c.state.rays[0].start);
    let b = c.scales.domain_to_pixel(c.state.rays[0].end);
    assert!(approx_eq(region.angle, (b.y - a.y).atan2(b.x - a.x)));
}

#[test]
fn angles_stay_strictly_increasing_under_any_drag() {
    let mut c = core();
    for index in 0..4 {
        let px = on_ray(&c, index);
        let down = c.on_pointer_down(px);
        assert!(!down.is_empty(), "ray {index} not grabbed");
        for step in 0..=36 {
            let px = toward(&c, f64::from(step) * 2.5);
            c.on_pointer_move(px);
            let angles = c.angles();
            assert!(angles.windows(2).all(|w| w[0] < w[1]), "ray {index} at step {step}: {angles:?}");
        }
        c.on_pointer_up(px);
    }
}

// =============================================================
// Curve drag
// =============================================================

#[test]
fn curve_drag_up_grows_one_step_per_move() {
    let mut c = core();
    let px = domain_px(&c, 2.0, 4.0);
    c.on_pointer_down(px);
    let px = domain_px(&c, 2.0, 5.5);
    let actions = c.on_pointer_move(px);
    assert_eq!(actions, vec![Action::RenderNeeded]);
    assert_eq!(c.state.curve.control_point, Point::new(5.0, 5.0));
    assert_eq!(c.state.curve.start.y, 5.0);
    assert_eq!(c.state.curve.end.x, 5.0);
}

#[test]
fn curve_control_point_is_capped() {
    let mut c = core();
    let px = domain_px(&c, 2.0, 4.0);
    c.on_pointer_down(px);
    for _ in 0..5 {
        let px = domain_px(&c, 2.0, 6.0);
        c.on_pointer_move(px);
    }
    assert_eq!(c.state.curve.control_point, Point::new(6.0, 6.0));
    for _ in 0..10 {
        let px = domain_px(&c, 2.0, 0.0);
        c.on_pointer_move(px);
    }
    assert_eq!(c.state.curve.control_point, Point::new(0.0, 0.0));
}

#[test]
fn curve_drag_inside_dead_zone_keeps_shape() {
    let mut c = core();
    let px = domain_px(&c, 2.0, 4.0);
    c.on_pointer_down(px);
    let px = domain_px(&c, 3.0, 4.05);
    c.on_pointer_move(px);
    assert_eq!(c.state.curve.control_point, Point::new(4.0, 4.0));
}

#[test]
fn curve_region_moves_with_curve() {
    let mut c = core();
    let before = c.regions()[4].center.y;
    let px = domain_px(&c, 2.0, 4.0);
    c.on_pointer_down(px);
    let px = domain_px(&c, 2.0, 5.5);
    c.on_pointer_move(px);
    assert!(c.regions()[4].center.y < before);
}

// =============================================================
// Pointer up
// =============================================================

#[test]
fn pointer_up_releases_ray_and_restores_color() {
    let mut c = core();
    let px = on_ray(&c, 3);
    c.on_pointer_down(px);
    let actions = c.on_pointer_up(px);
    assert!(c.drag.is_idle());
    assert_eq!(actions[0], Action::SetCursor("pointer".to_string()));
    assert_eq!(
        actions[1],
        Action::Restyle { trace: 3, style: TraceStyle { color: "blue".to_string(), width: 2.0 } }
    );
    assert_eq!(c.figure().traces[3].line.color, "blue");
}

#[test]
fn pointer_up_when_idle_does_nothing() {
    let mut c = core();
    assert!(c.on_pointer_up(Point::new(0.0, 0.0)).is_empty());
}

#[test]
fn move_when_idle_does_nothing() {
    let mut c = core();
    let before = c.state.clone();
    let px = toward(&c, 52.0);
    assert!(c.on_pointer_move(px).is_empty());
    assert_eq!(c.state, before);
}

// =============================================================
// Readouts match the painted scene
// =============================================================

#[test]
fn painted_ray_angle_matches_readout() {
    let mut c = core();
    let px = on_ray(&c, 1);
    c.on_pointer_down(px);
    let px = toward(&c, 52.0);
    c.on_pointer_move(px);

    for (i, ray) in c.state.rays.iter().enumerate() {
        let a = c.scales.domain_to_pixel(ray.start);
        let b = c.scales.domain_to_pixel(ray.end);
        let on_screen = (a.y - b.y).atan2(b.x - a.x).to_degrees();
        assert!(approx_eq(on_screen, c.angles()[i]), "ray {i}: {on_screen} vs {}", c.angles()[i]);
    }
}
