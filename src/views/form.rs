// ============================================================================
// FORM HELPERS - Campos compartidos por las vistas add/edit
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{event_input_value, on_input, ElementBuilder};

/// Campo de formulario con label: el input queda enlazado a un
/// Rc<RefCell<String>> que se actualiza en cada evento input.
pub fn labeled_input(
    label: &str,
    id: &str,
    placeholder: &str,
    binding: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("div")?.class("form-row").build();

    let label_el = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label)
        .build();
    row.append_child(&label_el)?;

    let input = ElementBuilder::new("input")?
        .id(id)?
        .attr("type", "text")?
        .attr("placeholder", placeholder)?
        .attr("value", &binding.borrow())?
        .build();

    {
        let binding = binding.clone();
        on_input(&input, move |event| {
            if let Some(value) = event_input_value(&event) {
                *binding.borrow_mut() = value;
            }
        })?;
    }

    row.append_child(&input)?;
    Ok(row)
}

/// Mostrar un mensaje en el div de error del formulario
pub fn show_form_error(error_el: &Element, message: &str) {
    log::warn!("⚠️ [FORM] {}", message);
    error_el.set_text_content(Some(message));
}
