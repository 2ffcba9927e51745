//! Always-latest callback slot.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Handler<T> = Box<dyn Fn(&T)>;

/// A single mutable slot holding the current change handler.
///
/// Hosts overwrite the slot on every configuration cycle and the owning
/// controller invokes it indirectly, so a stale closure captured at an
/// earlier cycle is never called. Cloning a `CallbackSlot` produces another
/// handle to the same slot.
///
/// # Thread Safety
///
/// Uses `Rc<RefCell<...>>` internally and is not thread-safe.
pub struct CallbackSlot<T> {
    handler: Rc<RefCell<Option<Handler<T>>>>,
}

impl<T> CallbackSlot<T> {
    /// Creates an empty slot.
    pub fn new() -> Self {
        Self {
            handler: Rc::new(RefCell::new(None)),
        }
    }

    /// Installs `handler`, replacing whatever handler was registered before.
    pub fn set(&self, handler: impl Fn(&T) + 'static) {
        *self.handler.borrow_mut() = Some(Box::new(handler));
    }

    /// Removes the current handler, if any.
    pub fn clear(&self) {
        self.handler.borrow_mut().take();
    }

    /// Returns `true` if a handler is currently registered.
    pub fn is_set(&self) -> bool {
        self.handler.borrow().is_some()
    }

    /// Invokes the current handler with `value`. A no-op when the slot is
    /// empty.
    ///
    /// The handler is moved out of the slot for the duration of the call and
    /// restored afterwards unless it installed a replacement, so a handler
    /// may safely call [`set`](Self::set) on its own slot.
    pub fn invoke(&self, value: &T) {
        let handler = self.handler.borrow_mut().take();
        if let Some(handler) = handler {
            handler(value);
            let mut slot = self.handler.borrow_mut();
            if slot.is_none() {
                *slot = Some(handler);
            }
        }
    }
}

impl<T> Clone for CallbackSlot<T> {
    fn clone(&self) -> Self {
        Self {
            handler: Rc::clone(&self.handler),
        }
    }
}

impl<T> Default for CallbackSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for CallbackSlot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackSlot")
            .field("is_set", &self.is_set())
            .finish()
    }
}
