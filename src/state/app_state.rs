// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Intern;
use crate::utils::constants::INTERNS_CACHE_KEY;
use crate::utils::storage::{load_from_storage, remove_from_storage, save_to_storage};

/// Estado global: colección de interns + flags de carga.
/// La "ruta actual" NO vive aquí: es propiedad exclusiva del Router.
#[derive(Clone)]
pub struct AppState {
    /// Colección cargada desde el backend (None = nunca cargada en esta sesión)
    pub interns: Rc<RefCell<Option<Vec<Intern>>>>,
    /// true mientras hay un fetch en vuelo
    pub loading: Rc<RefCell<bool>>,
    /// true cuando ya se intentó el fetch de esta sesión (con o sin éxito)
    pub fetched: Rc<RefCell<bool>>,
    /// Último error de red/backend visible en la UI
    pub error: Rc<RefCell<Option<String>>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado. Siembra la colección desde el cache de localStorage
    /// para pintar algo de inmediato; el primer render de la lista dispara
    /// el fetch fresco igualmente.
    pub fn new() -> Self {
        let cached: Option<Vec<Intern>> = load_from_storage(INTERNS_CACHE_KEY);
        if let Some(list) = &cached {
            log::info!("💾 [STATE] Cache de interns encontrado: {} registros", list.len());
        }

        Self {
            interns: Rc::new(RefCell::new(cached)),
            loading: Rc::new(RefCell::new(false)),
            fetched: Rc::new(RefCell::new(false)),
            error: Rc::new(RefCell::new(None)),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// ¿Hace falta disparar un fetch? (ni cargando ni ya intentado)
    pub fn needs_fetch(&self) -> bool {
        !*self.loading.borrow() && !*self.fetched.borrow()
    }

    /// Marcar fetch en vuelo. No notifica: se llama durante el render.
    pub fn begin_loading(&self) {
        *self.loading.borrow_mut() = true;
    }

    /// Fetch exitoso: reemplaza la colección, actualiza el cache y notifica
    pub fn set_interns(&self, list: Vec<Intern>) {
        *self.interns.borrow_mut() = Some(list);
        *self.loading.borrow_mut() = false;
        *self.fetched.borrow_mut() = true;
        *self.error.borrow_mut() = None;
        self.cache_interns();
        self.notify_subscribers();
    }

    /// Fetch fallido: conserva lo que hubiera (cache) y expone el error
    pub fn set_fetch_error(&self, message: String) {
        log::error!("❌ [STATE] Error cargando interns: {}", message);
        *self.loading.borrow_mut() = false;
        *self.fetched.borrow_mut() = true;
        *self.error.borrow_mut() = Some(message);
        self.notify_subscribers();
    }

    /// Exponer un error de operación (delete/update) sin tocar los flags de carga
    pub fn set_error(&self, message: String) {
        log::error!("❌ [STATE] {}", message);
        *self.error.borrow_mut() = Some(message);
        self.notify_subscribers();
    }

    /// Quitar un intern de la colección local (tras un DELETE exitoso)
    pub fn remove_intern(&self, id: &str) {
        if let Some(list) = self.interns.borrow_mut().as_mut() {
            list.retain(|i| i.id != id);
        }
        self.cache_interns();
        self.notify_subscribers();
    }

    /// Buscar un intern por id en la colección cargada
    pub fn find_intern(&self, id: &str) -> Option<Intern> {
        self.interns
            .borrow()
            .as_ref()
            .and_then(|list| list.iter().find(|i| i.id == id).cloned())
    }

    /// Invalidar la colección: el próximo render de la lista vuelve a pedirla.
    /// Se usa tras crear/editar, justo antes de navegar de vuelta a `/`.
    pub fn invalidate_interns(&self) {
        *self.fetched.borrow_mut() = false;
        *self.loading.borrow_mut() = false;
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify_subscribers(&self) {
        let subs: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().iter().cloned().collect();
        for callback in subs {
            callback();
        }
    }

    fn cache_interns(&self) {
        let interns = self.interns.borrow();
        match interns.as_ref() {
            Some(list) if !list.is_empty() => {
                if let Err(e) = save_to_storage(INTERNS_CACHE_KEY, list) {
                    log::warn!("⚠️ [STATE] No se pudo guardar el cache de interns: {}", e);
                }
            }
            // Colección vacía: mejor sin clave que un "[]" sembrado al arrancar
            _ => {
                let _ = remove_from_storage(INTERNS_CACHE_KEY);
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
