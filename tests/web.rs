// ============================================================================
// TESTS DE INTEGRACIÓN - Bootstrap + navegación contra un DOM real
// ============================================================================
// Se ejecutan con wasm-pack test --headless (requieren navegador).
// ============================================================================

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use web_sys::Element;

use intern_manager::app::App;
use intern_manager::router::{app_routes, RouteMatch, Router, View};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Dejar el body con un único div#app y devolverlo
fn ensure_app_host() -> Element {
    remove_app_host();
    let doc = document();
    let host = doc.create_element("div").unwrap();
    host.set_id("app");
    doc.body().unwrap().append_child(&host).unwrap();
    host
}

fn remove_app_host() {
    if let Some(existing) = document().get_element_by_id("app") {
        existing.remove();
    }
}

#[wasm_bindgen_test]
fn mount_succeeds_with_app_host() {
    let host = ensure_app_host();

    let router = Router::new(app_routes());
    let mut app = App::new(router).expect("bootstrap con #app presente debe funcionar");
    app.render().expect("render inicial");

    // El subtree de #app queda no vacío tras el montaje
    assert!(host.child_element_count() > 0);
}

#[wasm_bindgen_test]
fn mount_fails_without_app_host() {
    remove_app_host();

    let router = Router::new(app_routes());
    // Host ausente: error fatal de arranque, no hay modo degradado
    assert!(App::new(router).is_err());
}

#[wasm_bindgen_test]
fn navigate_updates_current_route() {
    ensure_app_host();

    let router = Router::new(app_routes());
    let mut app = App::new(router).unwrap();

    app.router().navigate("/add").unwrap();
    match app.router().current() {
        RouteMatch::Found(route) => assert_eq!(route.view, View::AddIntern),
        other => panic!("esperaba AddIntern, obtuve {:?}", other),
    }

    app.router().navigate("/edit/7").unwrap();
    match app.router().current() {
        RouteMatch::Found(route) => {
            assert_eq!(route.view, View::EditIntern);
            assert_eq!(route.params.get("id").map(String::as_str), Some("7"));
        }
        other => panic!("esperaba EditIntern, obtuve {:?}", other),
    }

    // Path sin ruta: NotFound observable, la vista 404 se renderiza igual
    app.router().navigate("/bogus").unwrap();
    assert!(matches!(app.router().current(), RouteMatch::NotFound { .. }));
    app.render().unwrap();
}
