//! Observable value cell
//!
//! A `Property` holds a value plus a list of listeners. Every `set` notifies
//! all listeners synchronously, in registration order, before returning.
//! There is no dirty check: writing an equal value still notifies.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Listener callback, invoked with `(new_value, old_value)`.
///
/// `old_value` is `None` only for the immediate call made by [`Property::link`].
pub type Listener<T> = dyn FnMut(&T, Option<&T>);

/// Handle returned by `link`/`lazy_link`, used to unlink later
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

/// A value cell with synchronous change notification
pub struct Property<T> {
    value: RefCell<T>,
    initial: T,
    listeners: RefCell<Vec<(ListenerId, Rc<RefCell<Listener<T>>>)>>,
    next_listener_id: Cell<u32>,
    /// Bumped by every `set`; lets an outer notification see a nested write
    generation: Cell<u64>,
}

impl<T: Clone + 'static> Property<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value.clone()),
            initial: value,
            listeners: RefCell::new(Vec::new()),
            next_listener_id: Cell::new(0),
            generation: Cell::new(0),
        }
    }

    /// Current value
    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Value this property was constructed with
    pub fn initial_value(&self) -> &T {
        &self.initial
    }

    /// Overwrite the value and notify every listener
    pub fn set(&self, value: T) {
        let old = self.value.replace(value.clone());
        self.generation.set(self.generation.get().wrapping_add(1));
        self.notify(&value, Some(&old));
    }

    /// Restore the initial value (notifies like any other `set`)
    pub fn reset(&self) {
        self.set(self.initial.clone());
    }

    /// Register a listener and call it once right away with the current value
    pub fn link(&self, listener: impl FnMut(&T, Option<&T>) + 'static) -> ListenerId {
        let id = self.lazy_link(listener);
        let current = self.get();
        if let Some(listener) = self.find(id) {
            if let Ok(mut f) = listener.try_borrow_mut() {
                f(&current, None);
            }
        }
        id
    }

    /// Register a listener without calling it
    pub fn lazy_link(&self, listener: impl FnMut(&T, Option<&T>) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id.get());
        self.next_listener_id.set(id.0 + 1);
        let listener: Rc<RefCell<Listener<T>>> = Rc::new(RefCell::new(listener));
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    /// Remove a listener. Returns false if it was not linked.
    pub fn unlink(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(lid, _)| *lid != id);
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn find(&self, id: ListenerId) -> Option<Rc<RefCell<Listener<T>>>> {
        self.listeners
            .borrow()
            .iter()
            .find(|(lid, _)| *lid == id)
            .map(|(_, l)| Rc::clone(l))
    }

    fn notify(&self, new: &T, old: Option<&T>) {
        // Snapshot so listeners may link/unlink/set while we iterate
        let snapshot: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .map(|(id, l)| (*id, Rc::clone(l)))
            .collect();
        let generation = self.generation.get();

        for (id, listener) in snapshot {
            // A listener wrote the property again; the nested notification
            // already delivered the newer value to everyone
            if self.generation.get() != generation {
                break;
            }
            // Unlinked by an earlier listener during this notification
            if self.find(id).is_none() {
                continue;
            }
            match listener.try_borrow_mut() {
                Ok(mut f) => f(new, old),
                Err(_) => log::warn!("Skipping reentrant notification of listener {:?}", id),
            }
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Property<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Property")
            .field("value", &*self.value.borrow())
            .field("initial", &self.initial)
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}
