use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::models::{Category, ProbeResult};

/// Counts for one category.
///
/// Only built for categories that produced at least one result, so the rate
/// is always defined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub success_rate: f64,
}

impl CategoryStats {
    pub fn from_counts(total: usize, successful: usize) -> Self {
        debug_assert!(total > 0, "category stats built from zero results");
        debug_assert!(successful <= total);
        Self {
            total,
            successful,
            failed: total - successful,
            success_rate: successful as f64 / total as f64 * 100.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    /// `None` when the run produced no results.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_rate: Option<f64>,
    /// Mean latency over successful probes, `None` without any success.
    #[serde(
        rename = "average_latency_ms",
        with = "crate::models::millis::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub average_latency: Option<Duration>,
    pub categories: BTreeMap<Category, CategoryStats>,
}

/// The sole artifact of a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    timestamp: DateTime<Local>,
    results: Vec<ProbeResult>,
    summary: Summary,
}

impl Report {
    pub fn new(timestamp: DateTime<Local>, results: Vec<ProbeResult>, summary: Summary) -> Self {
        Self {
            timestamp,
            results,
            summary,
        }
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }

    /// Results sorted by server address, then domain.
    pub fn results(&self) -> &[ProbeResult] {
        &self.results
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }
}
