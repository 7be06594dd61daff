use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr};
use std::num::NonZeroUsize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use dnscheck_common::config::Config;
use dnscheck_common::error::ProbeError;
use dnscheck_common::models::{Category, DomainEntry, ProbeOutcome, Server};
use dnscheck_core::Engine;
use dnscheck_core::prober::Prober;
use dnscheck_core::progress::NoProgress;

fn config(workers: usize, timeout: Duration) -> Config {
    Config {
        workers: NonZeroUsize::new(workers).unwrap(),
        timeout,
        progress_interval: Duration::from_millis(10),
        quiet: 2,
    }
}

fn servers(count: u8) -> Vec<Server> {
    (1..=count)
        .map(|n| Server::new(format!("10.0.0.{n}")).with_label(format!("resolver {n}")))
        .collect()
}

fn domains() -> Vec<DomainEntry> {
    vec![
        DomainEntry::new("github.com", Category::General),
        DomainEntry::new("doubleclick.net", Category::AdServer),
        DomainEntry::new("example.org", Category::Other),
        DomainEntry::new("adult.example", Category::Adult),
    ]
}

/// Blocks ad servers and adult domains, sleeps a little to overlap probes,
/// and records how many probes run at once.
#[derive(Clone, Default)]
struct FilteringResolver {
    stats: Arc<Stats>,
}

#[derive(Default)]
struct Stats {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
    calls: AtomicUsize,
}

#[async_trait]
impl Prober for FilteringResolver {
    async fn probe(&self, _server: &Server, domain: &str, _timeout: Duration) -> ProbeOutcome {
        let stats: &Stats = &self.stats;
        stats.calls.fetch_add(1, Ordering::SeqCst);
        let now = stats.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        stats.peak.fetch_max(now, Ordering::SeqCst);

        tokio::time::sleep(Duration::from_millis(5)).await;
        let latency = Duration::from_millis(5);
        let outcome = match domain {
            "doubleclick.net" => ProbeOutcome::failed(latency, ProbeError::EmptyAnswer),
            "adult.example" => ProbeOutcome::failed(latency, ProbeError::NoARecord),
            _ => ProbeOutcome::resolved(latency, IpAddr::V4(Ipv4Addr::new(192, 0, 2, 1))),
        };

        stats.in_flight.fetch_sub(1, Ordering::SeqCst);
        outcome
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn every_pair_is_probed_exactly_once() {
    let resolver = FilteringResolver::default();
    let engine = Engine::new(resolver.clone(), &config(3, Duration::from_secs(2)));

    let report = engine.run(servers(5), domains(), NoProgress).await.unwrap();

    assert_eq!(report.results().len(), 20);
    assert_eq!(resolver.stats.calls.load(Ordering::SeqCst), 20);

    let pairs: HashSet<(&str, &str)> = report
        .results()
        .iter()
        .map(|r| (r.server.address.as_str(), r.domain.as_str()))
        .collect();
    assert_eq!(pairs.len(), 20);

    let peak = resolver.stats.peak.load(Ordering::SeqCst);
    assert!(peak <= 3, "{peak} probes ran at once with 3 workers");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn results_are_sorted_and_labels_survive() {
    let resolver = FilteringResolver::default();
    let engine = Engine::new(resolver, &config(8, Duration::from_secs(2)));

    let report = engine.run(servers(3), domains(), NoProgress).await.unwrap();

    let keys: Vec<(String, String)> = report
        .results()
        .iter()
        .map(|r| (r.server.address.clone(), r.domain.clone()))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);

    let first = &report.results()[0];
    assert_eq!(first.server.label.as_deref(), Some("resolver 1"));
    assert_eq!(first.domain, "adult.example");
    assert_eq!(first.category, Category::Adult);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn summary_reflects_per_category_outcomes() {
    let resolver = FilteringResolver::default();
    let engine = Engine::new(resolver, &config(4, Duration::from_secs(2)));

    let report = engine.run(servers(4), domains(), NoProgress).await.unwrap();
    let summary = report.summary();

    assert_eq!(summary.total, 16);
    assert_eq!(summary.successful, 8);
    assert_eq!(summary.failed, 8);
    assert_eq!(summary.success_rate, Some(50.0));
    assert_eq!(summary.average_latency, Some(Duration::from_millis(5)));

    assert_eq!(summary.categories.len(), 4);
    assert_eq!(summary.categories[&Category::General].success_rate, 100.0);
    assert_eq!(summary.categories[&Category::Other].success_rate, 100.0);
    assert_eq!(summary.categories[&Category::AdServer].success_rate, 0.0);
    assert_eq!(summary.categories[&Category::Adult].failed, 4);

    let per_category: usize = summary.categories.values().map(|s| s.total).sum();
    assert_eq!(per_category, summary.total);
}

#[tokio::test]
async fn empty_inputs_produce_an_empty_report() {
    let resolver = FilteringResolver::default();
    let engine = Engine::new(resolver.clone(), &config(2, Duration::from_secs(1)));

    let no_domains = engine.run(servers(3), Vec::new(), NoProgress).await.unwrap();
    let no_servers = engine.run(Vec::new(), domains(), NoProgress).await.unwrap();

    for report in [no_domains, no_servers] {
        assert!(report.results().is_empty());
        assert_eq!(report.summary().total, 0);
        assert_eq!(report.summary().success_rate, None);
        assert!(report.summary().categories.is_empty());
    }
    assert_eq!(resolver.stats.calls.load(Ordering::SeqCst), 0);
}
