//! Particulate - Embeddable Particle Simulation Core
//!
//! Discrete particles carry an opaque data payload plus two swappable
//! policies: an evolution step and a draw step. A manual engine executes one
//! simulation tick at a time; an automatic engine wraps it with per-frame
//! hooks, a continuation predicate, and a run loop. The core never renders
//! anything itself, it only invokes caller-supplied draw policies.

pub mod core;
pub mod engine;
pub mod particle;
pub mod policy;
pub mod scene;
