// ============================================================================
// ROUTER - Tabla de rutas estática + resolución de paths
// ============================================================================
// La tabla es inmutable tras la construcción. La resolución es una función
// pura sobre la tabla; el único estado mutable es la celda "ruta actual",
// que solo el Router escribe (navigate / popstate / init).
// ============================================================================

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::dom::{on_window_popstate, window};
use crate::state::ReactiveState;

/// Identificador de vista referenciada desde la tabla de rutas
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    InternList,
    AddIntern,
    EditIntern,
}

/// Segmento de un patrón de ruta
#[derive(Clone, PartialEq, Eq, Debug)]
enum Segment {
    /// Debe coincidir literalmente
    Static(String),
    /// `:name` captura un componente de path NO vacío
    Param(String),
}

/// Entrada de la tabla: patrón → vista con nombre
#[derive(Clone, Debug)]
pub struct RouteEntry {
    pub path: String,
    pub name: String,
    pub view: View,
    segments: Vec<Segment>,
}

impl RouteEntry {
    /// Parsear el patrón una sola vez, al construir la tabla
    pub fn new(path: &str, name: &str, view: View) -> Self {
        let segments: Vec<Segment> = split_path(path)
            .into_iter()
            .map(|s| match s.strip_prefix(':') {
                Some(param) => Segment::Param(param.to_string()),
                None => Segment::Static(s.to_string()),
            })
            .collect();

        // Como máximo un segmento dinámico por patrón
        debug_assert!(
            segments.iter().filter(|s| matches!(s, Segment::Param(_))).count() <= 1,
            "route pattern {path} has more than one dynamic segment"
        );

        Self {
            path: path.to_string(),
            name: name.to_string(),
            view,
            segments,
        }
    }

    /// Intentar hacer match contra los segmentos de un path concreto
    fn matches(&self, path_segments: &[&str]) -> Option<HashMap<String, String>> {
        if path_segments.len() != self.segments.len() {
            return None;
        }

        let mut params = HashMap::new();
        for (pattern, actual) in self.segments.iter().zip(path_segments) {
            match pattern {
                Segment::Static(expected) => {
                    if expected != actual {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    // Captura vacía no cuenta como match
                    if actual.is_empty() {
                        return None;
                    }
                    params.insert(name.clone(), (*actual).to_string());
                }
            }
        }
        Some(params)
    }
}

/// Ruta ya resuelta: vista + parámetros capturados
#[derive(Clone, PartialEq, Debug)]
pub struct ResolvedRoute {
    pub view: View,
    pub name: String,
    pub path: String,
    pub params: HashMap<String, String>,
}

/// Resultado de una resolución
#[derive(Clone, PartialEq, Debug)]
pub enum RouteMatch {
    Found(ResolvedRoute),
    /// Path sin entrada en la tabla. No hay catch-all ni redirect:
    /// la capa de vistas decide qué pintar.
    NotFound { path: String },
}

/// Tabla de rutas de la aplicación, en orden de declaración.
/// La ruta dinámica va al final: los patrones estáticos ganan por orden.
pub fn app_routes() -> Vec<RouteEntry> {
    vec![
        RouteEntry::new("/", "InternList", View::InternList),
        RouteEntry::new("/add", "AddIntern", View::AddIntern),
        RouteEntry::new("/edit/:id", "EditIntern", View::EditIntern),
    ]
}

/// Router: tabla inmutable + celda reactiva "ruta actual"
#[derive(Clone)]
pub struct Router {
    routes: Rc<Vec<RouteEntry>>,
    current: ReactiveState<RouteMatch>,
    popstate_hooked: Rc<Cell<bool>>,
}

impl Router {
    /// Construir el router con su tabla. No toca el DOM: la sincronización
    /// con el navegador se hace aparte (init_from_location / start).
    pub fn new(routes: Vec<RouteEntry>) -> Self {
        debug_assert!(unique_by(&routes, |r| &r.path), "duplicate route path");
        debug_assert!(unique_by(&routes, |r| &r.name), "duplicate route name");

        Self {
            routes: Rc::new(routes),
            current: ReactiveState::new(RouteMatch::NotFound { path: String::new() }),
            popstate_hooked: Rc::new(Cell::new(false)),
        }
    }

    /// Resolver un path contra la tabla. Función pura: primera entrada
    /// que hace match estructural gana, en orden de declaración.
    pub fn resolve(&self, path: &str) -> RouteMatch {
        let clean = strip_query_and_hash(path);
        let segments = split_path(clean);

        for entry in self.routes.iter() {
            if let Some(params) = entry.matches(&segments) {
                return RouteMatch::Found(ResolvedRoute {
                    view: entry.view,
                    name: entry.name.clone(),
                    path: clean.to_string(),
                    params,
                });
            }
        }

        RouteMatch::NotFound { path: clean.to_string() }
    }

    /// Ruta actual (copia)
    pub fn current(&self) -> RouteMatch {
        self.current.get_cloned()
    }

    /// Suscribirse a cambios de la ruta actual
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.current.subscribe(callback);
    }

    /// Navegación programática: resuelve, empuja una entrada al history
    /// y actualiza la celda (lo que notifica a los subscribers).
    pub fn navigate(&self, path: &str) -> Result<(), JsValue> {
        let resolved = self.resolve(path);
        if let RouteMatch::NotFound { path } = &resolved {
            log::warn!("🧭 [ROUTER] navigate a path sin ruta: {}", path);
        } else {
            log::info!("🧭 [ROUTER] navigate: {}", path);
        }

        let window = window().ok_or_else(|| JsValue::from_str("No window"))?;
        window
            .history()?
            .push_state_with_url(&JsValue::NULL, "", Some(path))?;

        self.current.set(resolved);
        Ok(())
    }

    /// Estado inicial: la ruta resuelta desde el path actual del navegador
    pub fn init_from_location(&self) -> Result<(), JsValue> {
        let window = window().ok_or_else(|| JsValue::from_str("No window"))?;
        let path = window.location().pathname()?;
        log::info!("🧭 [ROUTER] ruta inicial: {}", path);
        self.current.set(self.resolve(&path));
        Ok(())
    }

    /// Registrar el listener de popstate (back/forward). Listener global:
    /// debe registrarse UNA sola vez, de ahí el flag.
    pub fn start(&self) -> Result<(), JsValue> {
        if self.popstate_hooked.get() {
            return Ok(());
        }
        self.popstate_hooked.set(true);

        let router = self.clone();
        on_window_popstate(move |_event| {
            if let Some(window) = window() {
                if let Ok(path) = window.location().pathname() {
                    log::info!("🧭 [ROUTER] popstate: {}", path);
                    // popstate no empuja entrada nueva, solo re-resuelve
                    router.current.set(router.resolve(&path));
                }
            }
        })
    }
}

/// Quitar query string y fragment antes de resolver
fn strip_query_and_hash(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Partir un path en segmentos. "/" produce cero segmentos; un slash final
/// produce un segmento vacío que nunca hace match (captura no vacía).
fn split_path(path: &str) -> Vec<&str> {
    let rest = path.strip_prefix('/').unwrap_or(path);
    if rest.is_empty() {
        Vec::new()
    } else {
        rest.split('/').collect()
    }
}

fn unique_by<'a, T, K, F>(items: &'a [T], key: F) -> bool
where
    F: Fn(&'a T) -> &'a K,
    K: PartialEq + 'a,
{
    for (i, a) in items.iter().enumerate() {
        if items.iter().skip(i + 1).any(|b| key(a) == key(b)) {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> Router {
        Router::new(app_routes())
    }

    fn expect_view(m: &RouteMatch) -> &ResolvedRoute {
        match m {
            RouteMatch::Found(r) => r,
            RouteMatch::NotFound { path } => panic!("expected match, got NotFound for {path}"),
        }
    }

    #[test]
    fn test_resuelve_las_tres_rutas_declaradas() {
        let router = router();

        let root = router.resolve("/");
        let r = expect_view(&root);
        assert_eq!(r.view, View::InternList);
        assert!(r.params.is_empty());

        let add = router.resolve("/add");
        let r = expect_view(&add);
        assert_eq!(r.view, View::AddIntern);
        assert!(r.params.is_empty());

        let edit = router.resolve("/edit/123");
        let r = expect_view(&edit);
        assert_eq!(r.view, View::EditIntern);
        assert_eq!(r.params.get("id").map(String::as_str), Some("123"));
    }

    #[test]
    fn test_path_desconocido_es_not_found() {
        let router = router();
        assert_eq!(
            router.resolve("/unknown"),
            RouteMatch::NotFound { path: "/unknown".to_string() }
        );
        assert_eq!(
            router.resolve("/edit/1/extra"),
            RouteMatch::NotFound { path: "/edit/1/extra".to_string() }
        );
    }

    #[test]
    fn test_captura_vacia_no_hace_match() {
        // "/edit/" termina en segmento vacío: el parámetro exige captura
        // no vacía, así que NO debe resolver a EditIntern
        let router = router();
        assert_eq!(
            router.resolve("/edit/"),
            RouteMatch::NotFound { path: "/edit/".to_string() }
        );
        assert_eq!(
            router.resolve("/edit//x"),
            RouteMatch::NotFound { path: "/edit//x".to_string() }
        );
    }

    #[test]
    fn test_resolve_es_idempotente() {
        let router = router();
        assert_eq!(router.resolve("/edit/42"), router.resolve("/edit/42"));
        assert_eq!(router.resolve("/nope"), router.resolve("/nope"));
    }

    #[test]
    fn test_query_y_hash_se_ignoran() {
        let router = router();
        let m = router.resolve("/edit/9?tab=info#top");
        let r = expect_view(&m);
        assert_eq!(r.view, View::EditIntern);
        assert_eq!(r.params.get("id").map(String::as_str), Some("9"));
    }

    #[test]
    fn test_gana_la_primera_entrada_en_orden_de_declaracion() {
        // Tabla artificial con colisión estructural: la dinámica declarada
        // primero captura el literal que la estática también cubriría
        let router = Router::new(vec![
            RouteEntry::new("/x/:id", "Dynamic", View::EditIntern),
            RouteEntry::new("/x/add", "Static", View::AddIntern),
        ]);

        let m = router.resolve("/x/add");
        let r = expect_view(&m);
        assert_eq!(r.view, View::EditIntern);
        assert_eq!(r.params.get("id").map(String::as_str), Some("add"));

        // En la tabla real la dinámica va al final, así que /add resuelve
        // a la entrada estática
        let real = Router::new(app_routes());
        let m = real.resolve("/add");
        assert_eq!(expect_view(&m).view, View::AddIntern);
    }

    #[test]
    fn test_estado_inicial_sin_navegador() {
        // Antes de init_from_location la celda arranca en NotFound vacío
        let router = router();
        assert_eq!(router.current(), RouteMatch::NotFound { path: String::new() });
    }
}
