//! The policy trait and state-change signal protocol

/// Kind of state refresh requested from a stateful policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateChange {
    /// Fired once per particle, each frame, from the particle update
    Local,
    /// Fired once per frame, from the engine after the update loop
    Global,
}

/// A callable particle behavior
///
/// `D` is the argument-passing type: evolution policies implement
/// `Policy<&mut Data>`, draw policies implement `Policy<&Data>`, and
/// scene-level draw policies implement `Policy<&Scene<P>>`.
///
/// `signal` defaults to a no-op; a policy with internal state overrides it
/// to refresh that state on [`StateChange`] notifications. Which body runs is
/// fixed per concrete type when the generic code is instantiated, never
/// re-decided per call.
pub trait Policy<D> {
    /// Apply the behavior to the data
    fn invoke(&mut self, data: D);

    /// Deliver a state-change notification
    fn signal(&mut self, _change: StateChange) {}
}

/// A stateless policy built from a plain closure or fn item
///
/// Lifts any `FnMut(D)` into [`Policy`] with the inherited no-op `signal`.
/// A callable whose signature does not match the particle's data type is
/// rejected here, before any particle or engine exists.
#[derive(Clone)]
pub struct FnPolicy<F> {
    func: F,
}

impl<D, F: FnMut(D)> Policy<D> for FnPolicy<F> {
    fn invoke(&mut self, data: D) {
        (self.func)(data)
    }
}

/// Wrap a closure or fn item as a stateless policy
pub fn policy_fn<F>(func: F) -> FnPolicy<F> {
    FnPolicy { func }
}
