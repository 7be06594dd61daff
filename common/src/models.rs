//! # Data Model
//!
//! Values flowing through one run, from the loaded inputs ([`Server`],
//! [`DomainEntry`]) over the per-probe [`ProbeResult`] to the final
//! [`Report`]. All of them are immutable once created.

pub mod domain;
pub mod report;
pub mod result;
pub mod server;

pub use domain::{Category, DomainEntry};
pub use report::{CategoryStats, Report, Summary};
pub use result::{ProbeOutcome, ProbeResult};
pub use server::Server;

/// Serializes durations as fractional milliseconds.
pub(crate) mod millis {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64() * 1_000.0)
    }

    pub mod option {
        use std::time::Duration;

        use serde::Serializer;

        pub fn serialize<S: Serializer>(
            value: &Option<Duration>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            match value {
                Some(duration) => super::serialize(duration, serializer),
                None => serializer.serialize_none(),
            }
        }
    }
}
