//! Policies - swappable particle behaviors and their signal protocol
//!
//! A policy is a callable strategy: evolution policies take `&mut Data`,
//! draw policies take `&Data` (or `&Scene<P>` at the engine level). Policies
//! may carry internal state that must be refreshed at well-defined points in
//! the simulation; the [`StateChange`] protocol delivers those refresh
//! notifications:
//!
//! - `Local` fires once per particle per frame, from inside the particle
//!   update itself.
//! - `Global` fires once per simulation frame, from the engine after the
//!   update loop. Policies shared between particles key their once-per-frame
//!   work off this signal.
//!
//! Stateless policies keep the default no-op [`Policy::signal`] body, so the
//! stateless/stateful decision is made per concrete type at compile time and
//! plain closures pay nothing for the protocol.

pub mod dynamic;
pub mod shared;
pub mod signal;
pub mod stated;

pub use dynamic::{DynDraw, DynEvolve, DynParticle};
pub use shared::Shared;
pub use signal::{policy_fn, FnPolicy, Policy, StateChange};
pub use stated::Stated;
