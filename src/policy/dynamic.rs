//! Trait-object policy variants for runtime behavior selection
//!
//! The generic path monomorphizes policies into the particle type; when
//! behaviors must be chosen at runtime (heterogeneous scenes, data-driven
//! setups), these boxed variants trade that zero-cost dispatch for
//! flexibility while exposing the same operations. Whether a policy accepts
//! signals is recorded in the tag once, at construction.

use crate::particle::Particle;
use crate::policy::signal::{Policy, StateChange};

/// A runtime-selected evolution policy over data `D`
pub enum DynEvolve<D> {
    /// Plain callable; signals are ignored
    Stateless(Box<dyn FnMut(&mut D)>),
    /// Full policy; signals are forwarded
    Stateful(Box<dyn for<'a> Policy<&'a mut D>>),
}

impl<D> DynEvolve<D> {
    pub fn stateless(func: impl FnMut(&mut D) + 'static) -> Self {
        Self::Stateless(Box::new(func))
    }

    pub fn stateful(policy: impl for<'a> Policy<&'a mut D> + 'static) -> Self {
        Self::Stateful(Box::new(policy))
    }
}

impl<'a, D> Policy<&'a mut D> for DynEvolve<D> {
    fn invoke(&mut self, data: &'a mut D) {
        match self {
            Self::Stateless(func) => func(data),
            Self::Stateful(policy) => policy.invoke(data),
        }
    }

    fn signal(&mut self, change: StateChange) {
        if let Self::Stateful(policy) = self {
            policy.signal(change)
        }
    }
}

/// A runtime-selected draw policy over data `D`
pub enum DynDraw<D> {
    /// Plain callable; signals are ignored
    Stateless(Box<dyn FnMut(&D)>),
    /// Full policy; signals are forwarded
    Stateful(Box<dyn for<'a> Policy<&'a D>>),
}

impl<D> DynDraw<D> {
    pub fn stateless(func: impl FnMut(&D) + 'static) -> Self {
        Self::Stateless(Box::new(func))
    }

    pub fn stateful(policy: impl for<'a> Policy<&'a D> + 'static) -> Self {
        Self::Stateful(Box::new(policy))
    }
}

impl<'a, D> Policy<&'a D> for DynDraw<D> {
    fn invoke(&mut self, data: &'a D) {
        match self {
            Self::Stateless(func) => func(data),
            Self::Stateful(policy) => policy.invoke(data),
        }
    }

    fn signal(&mut self, change: StateChange) {
        if let Self::Stateful(policy) = self {
            policy.signal(change)
        }
    }
}

/// A particle whose both policies are selected at runtime
pub type DynParticle<D> = Particle<D, DynEvolve<D>, DynDraw<D>>;
