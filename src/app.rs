// ============================================================================
// APP - Aplicación principal (bootstrap + re-render completo)
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html};
use crate::router::Router;
use crate::state::AppState;
use crate::utils::constants::APP_HOST_ID;
use crate::views::render_app;

/// Aplicación principal: dueña del estado y del router.
/// El router se construye fuera y se pasa explícitamente, así los tests
/// pueden armar uno fresco por caso.
pub struct App {
    state: AppState,
    router: Router,
    root: Element,
}

impl App {
    /// Crear la aplicación montada sobre #app. Si el host no existe el error
    /// se propaga hasta el start de wasm: fallo fatal de arranque, sin retry.
    pub fn new(router: Router) -> Result<Self, JsValue> {
        let root = get_element_by_id(APP_HOST_ID)
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Estado inicial del router: la ruta del navegador en este momento
        router.init_from_location()?;

        // Cualquier cambio de estado o de ruta re-renderiza. El Timeout(0)
        // batchea ráfagas de updates en un solo render.
        state.subscribe_to_changes(schedule_rerender);
        router.subscribe(schedule_rerender);

        Ok(Self { state, router, root })
    }

    /// Re-render completo: limpiar el host y volver a pintar la vista activa
    pub fn render(&mut self) -> Result<(), JsValue> {
        set_inner_html(&self.root, "");
        let view = render_app(&self.state, &self.router)?;
        append_child(&self.root, &view)?;
        Ok(())
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn router(&self) -> &Router {
        &self.router
    }
}

fn schedule_rerender() {
    Timeout::new(0, || {
        crate::rerender_app();
    })
    .forget();
}
