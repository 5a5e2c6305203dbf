// ============================================================================
// REACTIVITY - Celda de estado con subscribers
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Subscriber = Rc<dyn Fn()>;

/// Celda reactiva: un valor compartido + lista de subscribers.
/// Los clones comparten tanto el valor como los subscribers, de modo que
/// un `set` notifica sin importar desde qué clone se hizo.
pub struct ReactiveState<T> {
    value: Rc<RefCell<T>>,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl<T> ReactiveState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Referencia al valor interno (para lecturas sin clonar)
    pub fn get(&self) -> Rc<RefCell<T>> {
        self.value.clone()
    }

    /// Copia del valor actual
    pub fn get_cloned(&self) -> T
    where
        T: Clone,
    {
        self.value.borrow().clone()
    }

    /// Establecer nuevo valor y notificar
    pub fn set(&self, new_value: T) {
        *self.value.borrow_mut() = new_value;
        self.notify();
    }

    /// Mutar el valor con un closure y notificar
    pub fn update<F>(&self, updater: F)
    where
        F: FnOnce(&mut T),
    {
        updater(&mut *self.value.borrow_mut());
        self.notify();
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    fn notify(&self) {
        // Clonar la lista antes de iterar: un callback puede suscribir a su vez
        let subs: Vec<Subscriber> = self.subscribers.borrow().iter().cloned().collect();
        for callback in subs {
            callback();
        }
    }
}

impl<T> Clone for ReactiveState<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            subscribers: self.subscribers.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_set_notifica_subscribers() {
        let cell = ReactiveState::new(0u32);
        let hits = Rc::new(Cell::new(0u32));

        let hits_clone = hits.clone();
        cell.subscribe(move || hits_clone.set(hits_clone.get() + 1));

        cell.set(1);
        cell.update(|v| *v += 1);

        assert_eq!(cell.get_cloned(), 2);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_clones_comparten_valor_y_subscribers() {
        let a = ReactiveState::new(String::from("x"));
        let b = a.clone();

        let hits = Rc::new(Cell::new(0u32));
        let hits_clone = hits.clone();
        a.subscribe(move || hits_clone.set(hits_clone.get() + 1));

        // Un set desde el clone notifica al subscriber registrado en el original
        b.set(String::from("y"));
        assert_eq!(a.get_cloned(), "y");
        assert_eq!(hits.get(), 1);
    }
}
