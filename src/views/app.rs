// ============================================================================
// APP VIEW - Shell de la aplicación + dispatch por ruta
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::router::{RouteMatch, Router, View};
use crate::state::AppState;
use crate::views::{
    render_add_intern, render_edit_intern, render_intern_list, render_not_found,
};

/// Renderizar la aplicación completa: header + vista activa según la ruta
pub fn render_app(state: &AppState, router: &Router) -> Result<Element, JsValue> {
    let app = ElementBuilder::new("div")?.class("app").build();

    app.append_child(&render_header(router)?.into())?;

    let main = ElementBuilder::new("main")?.class("app-content").build();

    // Dispatch: la celda "ruta actual" decide la vista
    let view = match router.current() {
        RouteMatch::Found(route) => match route.view {
            View::InternList => render_intern_list(state, router)?,
            View::AddIntern => render_add_intern(state, router)?,
            View::EditIntern => {
                // La tabla garantiza que EditIntern siempre captura "id"
                let id = route.params.get("id").cloned().unwrap_or_default();
                render_edit_intern(state, router, &id)?
            }
        },
        RouteMatch::NotFound { path } => render_not_found(router, &path)?,
    };

    main.append_child(&view)?;
    app.append_child(&main)?;

    Ok(app)
}

fn render_header(router: &Router) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?.class("app-header").build();

    let title = ElementBuilder::new("h1")?
        .class("app-title")
        .text("Intern Manager")
        .build();
    header.append_child(&title)?;

    let nav = ElementBuilder::new("nav")?.class("app-nav").build();

    let list_btn = ElementBuilder::new("button")?
        .class("nav-link")
        .text("Interns")
        .build();
    {
        let router = router.clone();
        on_click(&list_btn, move |_| {
            if let Err(e) = router.navigate("/") {
                log::error!("❌ [NAV] Error navegando a /: {:?}", e);
            }
        })?;
    }
    nav.append_child(&list_btn)?;

    let add_btn = ElementBuilder::new("button")?
        .class("nav-link")
        .text("Add Intern")
        .build();
    {
        let router = router.clone();
        on_click(&add_btn, move |_| {
            if let Err(e) = router.navigate("/add") {
                log::error!("❌ [NAV] Error navegando a /add: {:?}", e);
            }
        })?;
    }
    nav.append_child(&add_btn)?;

    header.append_child(&nav)?;
    Ok(header)
}
