//! Angle readouts: formatting and syncing them into the host's text fields.

#[cfg(test)]
#[path = "labels_test.rs"]
mod labels_test;

use crate::state::ChartState;

/// Readout shown for a ray with no defined angle.
pub const UNDEFINED_ANGLE: &str = "n/a";

/// Element id of the text field showing ray `index`.
#[must_use]
pub fn label_id(index: usize) -> String {
    format!("angle-{index}")
}

/// Format an angle for display: two decimals and a degree sign.
#[must_use]
pub fn format_angle(deg: f64) -> String {
    format!("{deg:.2}°")
}

/// Somewhere angle readouts can be written.
pub trait LabelSink {
    /// Set the text of the readout for ray `index`. Missing readouts are ignored.
    fn set_label(&mut self, index: usize, text: &str);
}

/// Recompute every ray's angle from its endpoints and write it to `sink`.
pub fn sync_labels<S: LabelSink + ?Sized>(state: &ChartState, sink: &mut S) {
    for (index, ray) in state.rays.iter().enumerate() {
        let text = ray.current_angle().map_or_else(|| UNDEFINED_ANGLE.to_string(), format_angle);
        sink.set_label(index, &text);
    }
}
