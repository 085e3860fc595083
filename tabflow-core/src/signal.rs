//! A compact signal system for reactive widget state.
//!
//! Widgets hold their shared state in [StateSignal]s so that sibling widgets
//! (and callbacks handed out to them) can observe and mutate the same value
//! without threading references through the tree. Signals are
//! [Rc](std::rc::Rc)-based and therefore single-threaded by design, matching
//! the event model of the UI thread.

use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

/// A boxed signal.
pub type BoxedSignal<T> = Box<dyn Signal<T>>;

/// A borrowed view of a signal's current value.
pub enum Ref<'a, T> {
    /// A borrow out of a [RefCell]-backed signal.
    Borrowed(std::cell::Ref<'a, T>),
    /// A plain reference to an inline value.
    Plain(&'a T),
}

impl<'a, T> Deref for Ref<'a, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self {
            Ref::Borrowed(r) => r,
            Ref::Plain(v) => v,
        }
    }
}

/// The base trait for observable values.
pub trait Signal<T: 'static> {
    /// Get a borrowed view of the current value.
    fn get(&self) -> Ref<'_, T>;

    /// Replace the current value.
    fn set(&self, value: T);

    /// Clone this signal into a boxed trait object sharing the same storage.
    fn dyn_clone(&self) -> BoxedSignal<T>;
}

/// Simple signal implementation based on [Rc] and [RefCell] to get and set a
/// shared value.
pub struct StateSignal<T: 'static> {
    value: Rc<RefCell<T>>,
}

impl<T: 'static> StateSignal<T> {
    /// Creates a new signal with the given value.
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
        }
    }

    /// Mutate the inner value in place.
    pub fn mutate(&self, op: impl FnOnce(&mut T)) {
        op(&mut self.value.borrow_mut());
    }
}

impl<T: 'static> Signal<T> for StateSignal<T> {
    fn get(&self) -> Ref<'_, T> {
        Ref::Borrowed(self.value.borrow())
    }

    fn set(&self, value: T) {
        *self.value.borrow_mut() = value;
    }

    fn dyn_clone(&self) -> BoxedSignal<T> {
        Box::new(self.clone())
    }
}

impl<T: 'static> Clone for StateSignal<T> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
        }
    }
}

/// Either a plain value or a signal producing one.
///
/// Widget properties are typically `MaybeSignal`s: static configuration is
/// passed as a value, dynamic configuration as a signal shared with whoever
/// drives it.
pub enum MaybeSignal<T: 'static> {
    /// An inline value.
    Value(T),
    /// A boxed signal.
    Signal(BoxedSignal<T>),
}

impl<T: 'static> MaybeSignal<T> {
    /// Create a `MaybeSignal` from a plain value.
    pub fn value(value: T) -> Self {
        Self::Value(value)
    }

    /// Create a `MaybeSignal` from a signal.
    pub fn signal(signal: impl Signal<T> + 'static) -> Self {
        Self::Signal(Box::new(signal))
    }

    /// Get a borrowed view of the current value.
    pub fn get(&self) -> Ref<'_, T> {
        match self {
            Self::Value(v) => Ref::Plain(v),
            Self::Signal(s) => s.get(),
        }
    }

    /// Return the underlying signal, if this is one.
    pub fn as_signal(&self) -> Option<&BoxedSignal<T>> {
        match self {
            Self::Value(_) => None,
            Self::Signal(s) => Some(s),
        }
    }
}

impl<T: 'static> From<T> for MaybeSignal<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: 'static> From<StateSignal<T>> for MaybeSignal<T> {
    fn from(signal: StateSignal<T>) -> Self {
        Self::Signal(Box::new(signal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_signal_shared_storage() {
        let a = StateSignal::new(1usize);
        let b = a.clone();

        b.set(5);
        assert_eq!(*a.get(), 5);

        a.mutate(|v| *v += 1);
        assert_eq!(*b.get(), 6);
    }

    #[test]
    fn test_maybe_signal_value_and_signal() {
        let plain: MaybeSignal<u32> = 7.into();
        assert_eq!(*plain.get(), 7);
        assert!(plain.as_signal().is_none());

        let state = StateSignal::new(3u32);
        let wrapped: MaybeSignal<u32> = state.clone().into();
        state.set(9);
        assert_eq!(*wrapped.get(), 9);
        assert!(wrapped.as_signal().is_some());
    }
}
