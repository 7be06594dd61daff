//! Shared types for `dnscheck`.
//!
//! Everything the engine, the protocol helpers and the terminal front-end need
//! to agree on lives here: the run [`config::Config`], the data model in
//! [`models`], the per-probe [`error::ProbeError`] taxonomy and the built-in
//! [`defaults`] tables.

pub mod config;
pub mod defaults;
pub mod error;
pub mod macros;
pub mod models;

#[doc(hidden)]
pub use tracing as __tracing;
