// ============================================================================
// RESOURCE STATE - Lista compartida de un recurso + flags de carga
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

/// Estado de una lista de recursos (véhicules, affectations, etc).
/// Clonar comparte el mismo estado interno.
///
/// `loaded` marca que la pantalla ya disparó su fetch y evita que cada
/// re-render vuelva a pedir la lista. Se resetea al navegar.
pub struct ResourceState<T> {
    items: Rc<RefCell<Vec<T>>>,
    loading: Rc<RefCell<bool>>,
    loaded: Rc<RefCell<bool>>,
}

impl<T> ResourceState<T> {
    pub fn new() -> Self {
        Self {
            items: Rc::new(RefCell::new(Vec::new())),
            loading: Rc::new(RefCell::new(false)),
            loaded: Rc::new(RefCell::new(false)),
        }
    }

    /// ¿La pantalla tiene que disparar el fetch inicial?
    pub fn needs_load(&self) -> bool {
        !*self.loaded.borrow() && !*self.loading.borrow()
    }

    /// Marcar el fetch como en vuelo ANTES de spawnearlo, para que un
    /// re-render intermedio no lance otro.
    pub fn begin_load(&self) {
        *self.loaded.borrow_mut() = true;
        *self.loading.borrow_mut() = true;
    }

    pub fn finish(&self, items: Vec<T>) {
        *self.items.borrow_mut() = items;
        *self.loading.borrow_mut() = false;
    }

    /// Fetch fallido: se conserva la lista anterior.
    pub fn fail(&self) {
        *self.loading.borrow_mut() = false;
    }

    /// Invalidar la carga; el próximo render de la pantalla re-fetchea.
    pub fn reset(&self) {
        *self.loaded.borrow_mut() = false;
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }
}

impl<T: Clone> ResourceState<T> {
    pub fn get_items(&self) -> Vec<T> {
        self.items.borrow().clone()
    }
}

impl<T> Clone for ResourceState<T> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
            loading: Rc::clone(&self.loading),
            loaded: Rc::clone(&self.loaded),
        }
    }
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_load_lifecycle() {
        let state: ResourceState<u32> = ResourceState::new();
        assert!(state.needs_load());

        state.begin_load();
        assert!(!state.needs_load());
        assert!(state.is_loading());

        state.finish(vec![1, 2, 3]);
        assert!(!state.needs_load());
        assert!(!state.is_loading());
        assert_eq!(state.get_items(), vec![1, 2, 3]);
    }

    #[test]
    fn test_reset_triggers_refetch() {
        let state: ResourceState<u32> = ResourceState::new();
        state.begin_load();
        state.finish(vec![7]);

        state.reset();
        assert!(state.needs_load());
        // La lista anterior sigue disponible mientras llega la nueva
        assert_eq!(state.get_items(), vec![7]);
    }

    #[test]
    fn test_fail_keeps_previous_items() {
        let state: ResourceState<u32> = ResourceState::new();
        state.begin_load();
        state.finish(vec![4]);

        state.reset();
        state.begin_load();
        state.fail();

        assert!(!state.is_loading());
        assert_eq!(state.get_items(), vec![4]);
    }

    #[test]
    fn test_clone_shares_state() {
        let state: ResourceState<u32> = ResourceState::new();
        let alias = state.clone();

        state.begin_load();
        alias.finish(vec![9]);

        assert_eq!(state.get_items(), vec![9]);
        assert!(!state.is_loading());
    }
}
