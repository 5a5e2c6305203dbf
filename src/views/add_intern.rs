// ============================================================================
// ADD INTERN VIEW - Formulario de alta (ruta "/add")
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

/// Renderizar el formulario de alta
pub fn render_add_intern(state: &AppState, router: &Router) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("intern-form").build();

    container.append_child(
        &ElementBuilder::new("h2")?
            .class("form-title")
            .text("Add Intern")
            .build(),
    )?;

    // Estado local del formulario (vive en los closures)
    let name = Rc::new(RefCell::new(String::new()));
    let email = Rc::new(RefCell::new(String::new()));
    let phone = Rc::new(RefCell::new(String::new()));

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
            spawn_local(async move {
                let api = ApiClient::new();
                match api.create_intern(&payload).await {
                    Ok(created) => {
                        log::info!("✅ [ADD] Intern creado con id {}", created.id);
                        // La lista se vuelve a pedir al volver a "/"
                        state.invalidate_interns();
                        if let Err(e) = router.navigate("/") {
                            log::error!("❌ [ADD] Error navegando a /: {:?}", e);
                        }
                    }
                    Err(e) => show_form_error(&error_el, &format!("Could not save intern: {}", e)),
                }
            });
        })?;
    }
    actions.append_child(&save_btn)?;

    let cancel_btn = ElementBuilder::new("button")?
        .class("btn btn-secondary")
        .text("Cancel")
        .build();
    {
        let router = router.clone();
        on_click(&cancel_btn, move |_| {
            if let Err(e) = router.navigate("/") {
                log::error!("❌ [ADD] Error navegando a /: {:?}", e);
            }
        })?;
    }
    actions.append_child(&cancel_btn)?;

    container.append_child(&actions)?;
    Ok(container)
}
