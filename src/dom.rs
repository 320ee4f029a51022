//! DOM collaborator: angle input fields and cursor styling.
//!
//! Lookups that come back empty are tolerated: the operation is skipped and
//! logged, never an error.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use crate::error::ChartError;
use crate::labels::{LabelSink, format_angle, label_id};
use crate::state::Ray;

/// Create a `div.angle-label` and an `input.angle-input#angle-{i}` per ray
/// inside the element with id `container_id`.
///
/// # Errors
///
/// Returns `Err` if element creation or insertion fails.
pub fn build_angle_inputs(document: &Document, container_id: &str, rays: &[Ray]) -> Result<(), ChartError> {
    let Some(container) = document.get_element_by_id(container_id) else {
        log::warn!("angle input container #{container_id} not found; readouts disabled");
        return Ok(());
    };

    for (index, ray) in rays.iter().enumerate() {
        let label = document.create_element("div")?;
        label.set_class_name("angle-label");
        label.set_text_content(Some(&format!("{}:", ray.name)));

        let input = document
            .create_element("input")?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| ChartError::Js("created <input> is not an HtmlInputElement".to_string()))?;
        input.set_type("text");
        input.set_class_name("angle-input");
        input.set_id(&label_id(index));
        input.set_value(&format_angle(ray.angle));

        container.append_child(&label)?;
        container.append_child(&input)?;
    }
    Ok(())
}

/// Writes readouts into the `angle-{i}` inputs of a document.
pub struct DomLabels {
    document: Document,
}

impl DomLabels {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl LabelSink for DomLabels {
    fn set_label(&mut self, index: usize, text: &str) {
        let id = label_id(index);
        match self.document.get_element_by_id(&id) {
            Some(el) => match el.dyn_ref::<HtmlInputElement>() {
                Some(input) => input.set_value(text),
                None => el.set_text_content(Some(text)),
            },
            None => log::debug!("readout #{id} not found"),
        }
    }
}

/// Set the CSS cursor on `element`.
///
/// # Errors
///
/// Returns `Err` if the style property cannot be set.
pub fn set_cursor(element: &HtmlElement, cursor: &str) -> Result<(), ChartError> {
    element.style().set_property("cursor", cursor)?;
    Ok(())
}
