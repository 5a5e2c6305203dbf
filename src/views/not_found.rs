// ============================================================================
// NOT FOUND VIEW - Path sin ruta en la tabla
// ============================================================================
// El router no define catch-all ni redirect: el NotFound llega hasta aquí
// y se pinta tal cual. Volver a la lista es una acción del usuario.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::router::Router;

pub fn render_not_found(router: &Router, path: &str) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?.class("not-found").build();

    container.append_child(
        &ElementBuilder::new("h2")?
            .class("not-found-title")
            .text("Page not found")
            .build(),
    )?;
    container.append_child(
        &ElementBuilder::new("p")?
            .class("not-found-path")
            .text(&format!("No route matches {}", path))
            .build(),
    )?;

    let back_btn = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .text("Go to intern list")
        .build();
    {
        let router = router.clone();
        on_click(&back_btn, move |_| {
            if let Err(e) = router.navigate("/") {
                log::error!("❌ [404] Error navegando a /: {:?}", e);
            }
        })?;
    }
    container.append_child(&back_btn)?;

    Ok(container)
}
