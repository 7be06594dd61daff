//! # Probe Engine
//!
//! Turns an `N servers × M domains` cross product into one deterministic
//! [`Report`](dnscheck_common::models::Report).
//!
//! Data flows in one direction:
//!
//! * [`jobs`] enumerates the cross product lazily.
//! * [`pool`] runs a fixed number of workers, each invoking a [`prober::Prober`].
//! * [`progress`] samples a shared completion counter on a timer.
//! * [`aggregate`] sorts the results and computes the statistics.
//! * [`engine`] wires the pieces together and owns their lifecycles.

pub mod aggregate;
pub mod engine;
pub mod jobs;
pub mod pool;
pub mod prober;
pub mod progress;

pub use engine::{Engine, EngineError, RunPhase};
