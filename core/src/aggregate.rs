//! Turns the unordered result stream into a deterministic report.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Local};
use dnscheck_common::models::{Category, CategoryStats, ProbeResult, Report, Summary};
use tokio::sync::mpsc;

use crate::engine::EngineError;

#[derive(Debug, Default)]
struct Tally {
    total: usize,
    successful: usize,
    latency: Duration,
}

impl Tally {
    fn record(&mut self, result: &ProbeResult) {
        self.total += 1;
        if result.success {
            self.successful += 1;
            self.latency += result.latency;
        }
    }
}

/// Receives results until the stream ends.
///
/// Ending with anything but `expected` results means a job was lost, which the
/// pool must never allow.
pub async fn collect(
    rx: &mut mpsc::Receiver<ProbeResult>,
    expected: usize,
) -> Result<Vec<ProbeResult>, EngineError> {
    let mut results: Vec<ProbeResult> = Vec::with_capacity(expected);
    while let Some(result) = rx.recv().await {
        results.push(result);
    }

    if results.len() != expected {
        return Err(EngineError::IncompleteRun {
            expected,
            received: results.len(),
        });
    }
    Ok(results)
}

/// Stable sort by server address, then domain.
pub fn sort_results(results: &mut [ProbeResult]) {
    results.sort_by(compare);
}

fn compare(a: &ProbeResult, b: &ProbeResult) -> Ordering {
    a.server
        .address
        .cmp(&b.server.address)
        .then_with(|| a.domain.cmp(&b.domain))
}

pub fn summarize(results: &[ProbeResult]) -> Summary {
    let mut overall = Tally::default();
    let mut per_category: BTreeMap<Category, Tally> = BTreeMap::new();

    for result in results {
        overall.record(result);
        per_category.entry(result.category).or_default().record(result);
    }

    let categories: BTreeMap<Category, CategoryStats> = per_category
        .into_iter()
        .map(|(category, tally)| {
            (category, CategoryStats::from_counts(tally.total, tally.successful))
        })
        .collect();

    Summary {
        total: overall.total,
        successful: overall.successful,
        failed: overall.total - overall.successful,
        success_rate: (overall.total > 0)
            .then(|| overall.successful as f64 / overall.total as f64 * 100.0),
        average_latency: average(overall.latency, overall.successful),
        categories,
    }
}

fn average(sum: Duration, count: usize) -> Option<Duration> {
    if count == 0 {
        return None;
    }
    let nanos: u128 = sum.as_nanos() / count as u128;
    Some(Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX)))
}

pub fn build_report(mut results: Vec<ProbeResult>, timestamp: DateTime<Local>) -> Report {
    sort_results(&mut results);
    let summary: Summary = summarize(&results);
    Report::new(timestamp, results, summary)
}
