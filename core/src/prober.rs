//! The seam between the engine and the network.
//!
//! A [`Prober`] performs exactly one resolution attempt per call. It reports
//! every failure mode through [`ProbeOutcome`] instead of erroring out, the
//! worker pool relies on that to emit one result per job.

use std::time::Duration;

use async_trait::async_trait;
use dnscheck_common::models::{ProbeOutcome, Server};

pub mod udp;

pub use udp::UdpProber;

#[async_trait]
pub trait Prober: Send + Sync + 'static {
    /// Resolves `domain` against `server`, giving up after `timeout`.
    async fn probe(&self, server: &Server, domain: &str, timeout: Duration) -> ProbeOutcome;
}

/// Adapts a plain function into a [`Prober`].
///
/// Handy for simulated runs where the outcome is computed, not measured.
pub struct ProbeFn<F>(pub F);

#[async_trait]
impl<F> Prober for ProbeFn<F>
where
    F: Fn(&Server, &str, Duration) -> ProbeOutcome + Send + Sync + 'static,
{
    async fn probe(&self, server: &Server, domain: &str, timeout: Duration) -> ProbeOutcome {
        (self.0)(server, domain, timeout)
    }
}
