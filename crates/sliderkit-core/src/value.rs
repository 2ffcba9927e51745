//! Owned observable value cell.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// A shared, mutable value cell.
///
/// Cloning a `MutableValue` produces another handle to the same cell, so a
/// controller and the closures it hands out can all observe the same state.
/// The cell itself carries no change notification; hosts that need one
/// compose it with [`SideEffectQueue`](crate::SideEffectQueue).
///
/// # Thread Safety
///
/// Uses `Rc<RefCell<T>>` internally and is not thread-safe. It should only
/// be used from the thread driving the hosting widget.
pub struct MutableValue<T> {
    inner: Rc<RefCell<T>>,
}

impl<T> MutableValue<T> {
    /// Creates a cell holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(value)),
        }
    }

    /// Reads the current value through a closure.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow())
    }

    /// Replaces the current value.
    pub fn set(&self, value: T) {
        *self.inner.borrow_mut() = value;
    }

    /// Mutates the current value in place.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.borrow_mut());
    }

    /// Returns `true` if `other` is a handle to the same cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Copy> MutableValue<T> {
    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        *self.inner.borrow()
    }
}

impl<T> Clone for MutableValue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Default> Default for MutableValue<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for MutableValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MutableValue").field(&self.inner.borrow()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_initial_value() {
        let cell = MutableValue::new(3);
        assert_eq!(cell.get(), 3);
    }

    #[test]
    fn set_replaces_value() {
        let cell = MutableValue::new(3);
        cell.set(7);
        assert_eq!(cell.get(), 7);
    }

    #[test]
    fn update_mutates_in_place() {
        let cell = MutableValue::new(vec![1, 2]);
        cell.update(|v| v.push(3));
        cell.with(|v| assert_eq!(v, &[1, 2, 3]));
    }

    #[test]
    fn clone_shares_the_cell() {
        let cell = MutableValue::new(1);
        let handle = cell.clone();
        handle.set(9);
        assert_eq!(cell.get(), 9);
        assert!(cell.ptr_eq(&handle));
    }

    #[test]
    fn new_cells_are_distinct() {
        let a = MutableValue::new(1);
        let b = MutableValue::new(1);
        assert!(!a.ptr_eq(&b));
    }
}
