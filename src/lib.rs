// ============================================================================
// INTERN MANAGER - SPA de gestión de interns (Rust puro + WASM)
// ============================================================================
// - Views: funciones que renderizan DOM
// - Router: tabla estática de rutas + celda "ruta actual"
// - Services: SOLO comunicación API
// - State: Rc<RefCell> + subscribers
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::router::{app_routes, Router};

// Instancia global de la app: el entry point la crea una sola vez y los
// subscribers la alcanzan vía rerender_app()
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

/// Entry point: corre exactamente una vez por vida del proceso.
/// Un #app ausente hace fallar el arranque (error no capturado), por diseño.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 Intern Manager starting...");

    // Router primero (dependencia hoja), luego la app con el router inyectado
    let router = Router::new(app_routes());
    router.start()?;

    let mut app = App::new(router)?;
    app.render()?;

    APP.with(|cell| {
        *cell.borrow_mut() = Some(app);
    });

    log::info!("✅ Intern Manager montado en #app");
    Ok(())
}

/// Re-renderizar la instancia global (no-op si aún no hay instancia)
pub fn rerender_app() {
    APP.with(|cell| {
        if let Some(app) = cell.borrow_mut().as_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ [APP] Error re-renderizando: {:?}", e);
            }
        }
    });
}
