//! Engines - tick execution and the automatic run loop
//!
//! The manual engine only provides the primitives for one simulation step;
//! looping is the caller's business. The automatic engine owns a manual
//! engine and adds the canonical per-frame sequence, hook slots, and a
//! replaceable continuation predicate.

pub mod automatic;
pub mod manual;

pub use automatic::{AutoEngine, RunReport};
pub use manual::ManualEngine;
