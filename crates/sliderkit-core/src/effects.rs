//! Post-commit side-effect queue.

use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

type Hook = Box<dyn FnOnce()>;

/// A FIFO queue of hooks that run after a state transition has settled.
///
/// Controllers schedule hooks while mutating state and drain the queue once
/// the transition is complete, so observers always see fully committed
/// values. Hooks scheduled while the queue is draining run in the same
/// drain, after the hooks already queued. A nested [`drain`](Self::drain)
/// call is a no-op: delivery never re-enters the owner synchronously.
///
/// Cloning a `SideEffectQueue` produces another handle to the same queue.
pub struct SideEffectQueue {
    inner: Rc<QueueInner>,
}

struct QueueInner {
    pending: RefCell<SmallVec<[Hook; 2]>>,
    draining: Cell<bool>,
}

/// Clears the draining flag when a drain pass unwinds.
struct DrainGuard<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

impl SideEffectQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(QueueInner {
                pending: RefCell::new(SmallVec::new()),
                draining: Cell::new(false),
            }),
        }
    }

    /// Appends `hook` to the queue. It runs on the next [`drain`](Self::drain),
    /// or within the current one if a drain is already in progress.
    pub fn schedule(&self, hook: impl FnOnce() + 'static) {
        self.inner.pending.borrow_mut().push(Box::new(hook));
    }

    /// Returns `true` if no hooks are queued.
    pub fn is_empty(&self) -> bool {
        self.inner.pending.borrow().is_empty()
    }

    /// Runs queued hooks in FIFO order until the queue is empty.
    ///
    /// Re-entrant calls return immediately; the outer drain picks up any
    /// hooks scheduled by the hooks it runs.
    pub fn drain(&self) {
        if self.inner.draining.get() {
            return;
        }
        self.inner.draining.set(true);
        let _guard = DrainGuard {
            flag: &self.inner.draining,
        };

        loop {
            let batch = std::mem::take(&mut *self.inner.pending.borrow_mut());
            if batch.is_empty() {
                break;
            }
            log::trace!("running {} deferred hook(s)", batch.len());
            for hook in batch {
                hook();
            }
        }
    }
}

impl Clone for SideEffectQueue {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl Default for SideEffectQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SideEffectQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SideEffectQueue")
            .field("pending", &self.inner.pending.borrow().len())
            .field("draining", &self.inner.draining.get())
            .finish()
    }
}
