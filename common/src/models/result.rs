use std::net::IpAddr;
use std::time::Duration;

use serde::Serialize;

use crate::error::ProbeError;
use crate::models::{Category, DomainEntry, Server};

/// What a prober reports back for one attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub latency: Duration,
    pub answer: Result<IpAddr, ProbeError>,
}

impl ProbeOutcome {
    pub fn resolved(latency: Duration, addr: IpAddr) -> Self {
        Self {
            latency,
            answer: Ok(addr),
        }
    }

    pub fn failed(latency: Duration, err: ProbeError) -> Self {
        Self {
            latency,
            answer: Err(err),
        }
    }
}

/// The recorded result of one probe job.
///
/// Failures are data: a job that timed out or got garbage back still produces
/// exactly one `ProbeResult` with `success == false` and a reason.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProbeResult {
    pub server: Server,
    pub domain: String,
    pub category: Category,
    pub success: bool,
    #[serde(rename = "latency_ms", with = "crate::models::millis")]
    pub latency: Duration,
    #[serde(rename = "resolved_ip", skip_serializing_if = "Option::is_none")]
    pub resolved: Option<IpAddr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProbeResult {
    /// Builds the result for `entry` probed against `server`.
    ///
    /// The category is taken from the entry, never derived from the domain name.
    pub fn new(server: Server, entry: DomainEntry, outcome: ProbeOutcome) -> Self {
        let (success, resolved, error) = match outcome.answer {
            Ok(addr) => (true, Some(addr), None),
            Err(err) => (false, None, Some(err.to_string())),
        };

        Self {
            server,
            domain: entry.domain,
            category: entry.category,
            success,
            latency: outcome.latency,
            resolved,
            error,
        }
    }
}
