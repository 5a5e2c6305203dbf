// ============================================================================
// EVENT HANDLING - Registro de listeners
// ============================================================================
// GESTIÓN DE MEMORY LEAKS:
// - Listeners sobre elementos del DOM: al destruir el elemento (p.ej. con
//   set_inner_html("")) el navegador limpia los listeners, así que
//   closure.forget() es seguro para listeners locales.
// - Listeners globales (window): registrar UNA sola vez al inicio; si se
//   registran varias veces se acumulan (ver Router::start y su flag).
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, InputEvent, MouseEvent, PopStateEvent};

/// Click handler sobre un elemento
pub fn on_click<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(MouseEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(MouseEvent)>);
    element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    // forget() mantiene el closure vivo; el navegador lo limpia con el elemento
    closure.forget();
    Ok(())
}

/// Input handler sobre un elemento
pub fn on_input<F>(element: &Element, handler: F) -> Result<(), JsValue>
where
    F: FnMut(InputEvent) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(InputEvent)>);
    element.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Popstate handler global (back/forward del navegador).
/// Listener de window: el caller es responsable de registrarlo una sola vez.
pub fn on_window_popstate<F>(handler: F) -> Result<(), JsValue>
where
    F: FnMut(PopStateEvent) + 'static,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(PopStateEvent)>);
    window.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
