//! Capability wrapper over a single policy value

use std::ops::{Deref, DerefMut};

use crate::policy::signal::{Policy, StateChange};

/// Uniform handle over one policy, stateless or stateful
///
/// Particles and engines store their policies through this wrapper so both
/// kinds can be driven identically: `invoke` forwards the behavior call,
/// `signal` forwards the state-change notification (a guaranteed no-op when
/// the wrapped type keeps the default [`Policy::signal`] body).
#[derive(Debug, Clone, Default)]
pub struct Stated<P> {
    policy: P,
}

impl<P> Stated<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    /// Forward a behavior call to the wrapped policy
    pub fn invoke<D>(&mut self, data: D)
    where
        P: Policy<D>,
    {
        self.policy.invoke(data)
    }

    /// Forward a state-change notification to the wrapped policy
    pub fn signal<D>(&mut self, change: StateChange)
    where
        P: Policy<D>,
    {
        self.policy.signal(change)
    }

    /// Read-only access to the wrapped policy
    pub fn get(&self) -> &P {
        &self.policy
    }

    /// Mutable access to the wrapped policy
    pub fn get_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// Move the wrapped policy out of the wrapper
    ///
    /// Deliberately consuming and explicit: a by-value conversion that could
    /// fire implicitly would silently steal a stateful policy's state.
    pub fn into_inner(self) -> P {
        self.policy
    }
}

impl<P> From<P> for Stated<P> {
    fn from(policy: P) -> Self {
        Self::new(policy)
    }
}

impl<P> Deref for Stated<P> {
    type Target = P;

    fn deref(&self) -> &P {
        &self.policy
    }
}

impl<P> DerefMut for Stated<P> {
    fn deref_mut(&mut self) -> &mut P {
        &mut self.policy
    }
}
