//! Reference-counted handle sharing one policy instance across particles

use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;

use crate::policy::signal::{Policy, StateChange};

/// Aliased ownership of a single policy instance
///
/// Particles store policies by value, so sharing one instance (a counter
/// bumped once per frame, a scene-wide accumulator) needs an indirection
/// that still looks like a plain value-typed policy. `Shared` is that
/// indirection: cloning a handle aliases the same storage, and mutation
/// through any handle is immediately visible through all others. The
/// instance is dropped with the last handle.
///
/// Non-atomic by design: the whole core is single-threaded and provides no
/// internal locking.
pub struct Shared<P> {
    inner: Rc<RefCell<P>>,
}

impl<P> Shared<P> {
    /// Build the policy in shared storage and return the first handle
    pub fn new(policy: P) -> Self {
        Self {
            inner: Rc::new(RefCell::new(policy)),
        }
    }

    /// Read-only borrow of the shared instance
    ///
    /// Panics if the instance is currently borrowed mutably, which cannot
    /// happen from engine-driven calls (each forwards and returns before the
    /// next stage runs).
    pub fn get(&self) -> Ref<'_, P> {
        self.inner.borrow()
    }

    /// Mutable borrow of the shared instance
    pub fn get_mut(&self) -> RefMut<'_, P> {
        self.inner.borrow_mut()
    }

    /// Number of handles currently aliasing the instance
    pub fn handle_count(&self) -> usize {
        Rc::strong_count(&self.inner)
    }
}

impl<P> Clone for Shared<P> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<D, P: Policy<D>> Policy<D> for Shared<P> {
    fn invoke(&mut self, data: D) {
        self.inner.borrow_mut().invoke(data)
    }

    fn signal(&mut self, change: StateChange) {
        self.inner.borrow_mut().signal(change)
    }
}
