// ============================================================================
// EDIT INTERN VIEW - Formulario de edición (ruta "/edit/:id")
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::models::intern::NewIntern;
use crate::router::Router;
use crate::services::ApiClient;
use crate::state::AppState;
use crate::views::form::{labeled_input, show_form_error};

/// Renderizar el formulario de edición para el intern capturado en la ruta.
/// Si la colección aún no se cargó en esta sesión, dispara la carga y
/// muestra un loading; el rerender posterior encuentra el registro.
pub fn render_edit_intern(
    state: &AppState,
    router: &Router,
    id: &str,
) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("intern-form").build();

    container.append_child(
        &ElementBuilder::new("h2")?
            .class("form-title")
            .text("Edit Intern")
            .build(),
    )?;

    let intern = match state.find_intern(id) {
        Some(intern) => intern,
        None => {
            if state.needs_fetch() {
                crate::views::intern_list::fetch_interns(state);
            }
            let message = if *state.fetched.borrow() {
                format!("Intern {} not found", id)
            } else {
                "Loading intern…".to_string()
            };
            container.append_child(
                &ElementBuilder::new("p")?.class("loading").text(&message).build(),
            )?;
            container.append_child(&back_button(router)?.into())?;
            return Ok(container);
        }
    };

    // Estado local del formulario, sembrado con los valores actuales
    let name = Rc::new(RefCell::new(intern.name.clone()));
    let email = Rc::new(RefCell::new(intern.email.clone()));
    let phone = Rc::new(RefCell::new(intern.phone.clone().unwrap_or_default()));

    container.append_child(&labeled_input("Name", "intern-name", "Full name", name.clone())?.into())?;
    container.append_child(&labeled_input(
        "Email",
        "intern-email",
        "name@example.com",
        email.clone(),
    )?.into())?;
    container.append_child(&labeled_input(
        "Phone",
        "intern-phone",
        "Optional",
        phone.clone(),
    )?.into())?;

    let error_el = ElementBuilder::new("div")?.class("form-error").build();
    container.append_child(&error_el)?;

    let actions = ElementBuilder::new("div")?.class("form-actions").build();

    let save_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("Save")
        .build();
    {
        let state = state.clone();
        let router = router.clone();
        let error_el = error_el.clone();
        let id = id.to_string();
        on_click(&save_btn, move |_| {
            let name = name.borrow().trim().to_string();
            let email = email.borrow().trim().to_string();
            let phone = phone.borrow().trim().to_string();

            if name.is_empty() || email.is_empty() {
                show_form_error(&error_el, "Name and email are required");
                return;
            }

            let payload = NewIntern {
                name,
                email,
                phone: if phone.is_empty() { None } else { Some(phone) },
            };

            let state = state.clone();
            let router = router.clone();
            let error_el = error_el.clone();
            let id = id.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                match api.update_intern(&id, &payload).await {
                    Ok(_) => {
                        log::info!("✅ [EDIT] Intern {} actualizado", id);
                        state.invalidate_interns();
                        if let Err(e) = router.navigate("/") {
                            log::error!("❌ [EDIT] Error navegando a /: {:?}", e);
                        }
                    }
                    Err(e) => show_form_error(&error_el, &format!("Could not save intern: {}", e)),
                }
            });
        })?;
    }
    actions.append_child(&save_btn)?;

    actions.append_child(&back_button(router)?.into())?;
    container.append_child(&actions)?;

    Ok(container)
}

fn back_button(router: &Router) -> Result<Element, JsValue> {
    let btn = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .text("Cancel")
        .build();
    let router = router.clone();
    on_click(&btn, move |_| {
        if let Err(e) = router.navigate("/") {
            log::error!("❌ [EDIT] Error navegando a /: {:?}", e);
        }
    })?;
    Ok(btn)
}
