// ============================================================================
// INTERN LIST VIEW - Vista de lista (ruta "/")
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::models::Intern;
use crate::router::Router;
use crate::services::ApiClient;
use crate::state::AppState;

/// Renderizar la lista de interns. El primer render de la sesión dispara
/// el fetch; mientras tanto se pinta el cache (si lo hay) o un loading.
pub fn render_intern_list(state: &AppState, router: &Router) -> Result<Element, JsValue> {
    if state.needs_fetch() {
        fetch_interns(state);
    }

    let container = ElementBuilder::new("div")?.class("intern-list").build();

    let toolbar = ElementBuilder::new("div")?.class("list-toolbar").build();
    let add_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("Add Intern")
        .build();
    {
        let router = router.clone();
        on_click(&add_btn, move |_| {
            if let Err(e) = router.navigate("/add") {
                log::error!("❌ [LIST] Error navegando a /add: {:?}", e);
            }
        })?;
    }
    toolbar.append_child(&add_btn)?;
    container.append_child(&toolbar)?;

    if let Some(message) = state.error.borrow().as_ref() {
        let banner = ElementBuilder::new("div")?
            .class("error-banner")
            .text(message)
            .build();
        container.append_child(&banner)?;
    }

    let interns = state.interns.borrow().clone();
    match interns {
        None => {
            let loading = ElementBuilder::new("p")?
                .class("loading")
                .text("Loading interns…")
                .build();
            container.append_child(&loading)?;
        }
        Some(list) if list.is_empty() => {
            let empty = ElementBuilder::new("p")?
                .class("empty-state")
                .text("No interns yet. Add the first one!")
                .build();
            container.append_child(&empty)?;
        }
        Some(list) => {
            let cards = ElementBuilder::new("div")?.class("intern-cards").build();
            for intern in &list {
                cards.append_child(&render_intern_card(state, router, intern)?.into())?;
            }
            container.append_child(&cards)?;
        }
    }

    Ok(container)
}

fn render_intern_card(
    state: &AppState,
    router: &Router,
    intern: &Intern,
) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("intern-card")
        .attr("data-intern-id", &intern.id)?
        .build();

    let info = ElementBuilder::new("div")?.class("intern-info").build();
    info.append_child(
        &ElementBuilder::new("h3")?
            .class("intern-name")
            .text(&intern.name)
            .build(),
    )?;
    info.append_child(
        &ElementBuilder::new("p")?
            .class("intern-email")
            .text(&intern.email)
            .build(),
    )?;
    if let Some(phone) = &intern.phone {
        info.append_child(
            &ElementBuilder::new("p")?
                .class("intern-phone")
                .text(phone)
                .build(),
        )?;
    }
    card.append_child(&info)?;

    let actions = ElementBuilder::new("div")?.class("intern-actions").build();

    let edit_btn = ElementBuilder::new("button")?
        .class("btn btn-edit")
        .text("Edit")
        .build();
    {
        let router = router.clone();
        let id = intern.id.clone();
        on_click(&edit_btn, move |_| {
            if let Err(e) = router.navigate(&format!("/edit/{}", id)) {
                log::error!("❌ [LIST] Error navegando a edit: {:?}", e);
            }
        })?;
    }
    actions.append_child(&edit_btn)?;

    let delete_btn = ElementBuilder::new("button")?
        .class("btn btn-delete")
        .text("Delete")
        .build();
    {
        let state = state.clone();
        let id = intern.id.clone();
        on_click(&delete_btn, move |_| {
            let state = state.clone();
            let id = id.clone();
            spawn_local(async move {
                let api = ApiClient::new();
                match api.delete_intern(&id).await {
                    Ok(()) => {
                        log::info!("✅ [LIST] Intern {} borrado", id);
                        state.remove_intern(&id);
                    }
                    Err(e) => state.set_error(format!("Could not delete intern: {}", e)),
                }
            });
        })?;
    }
    actions.append_child(&delete_btn)?;

    card.append_child(&actions)?;
    Ok(card)
}

/// Disparar el fetch de la colección (una vez por sesión o tras invalidar).
/// También lo usa la vista de edición cuando entra por URL directa.
pub(crate) fn fetch_interns(state: &AppState) {
    state.begin_loading();
    let state = state.clone();
    spawn_local(async move {
        let api = ApiClient::new();
        match api.list_interns().await {
            Ok(list) => {
                log::info!("✅ [LIST] {} interns recibidos del backend", list.len());
                state.set_interns(list);
            }
            // Si había cache se sigue mostrando; solo se expone el error
            Err(e) => state.set_fetch_error(e),
        }
    });
}
