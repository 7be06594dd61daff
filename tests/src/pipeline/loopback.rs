use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::num::NonZeroUsize;
use std::time::Duration;

use dnscheck_common::config::Config;
use dnscheck_common::models::{Category, DomainEntry, ProbeResult, Server};
use dnscheck_core::Engine;
use dnscheck_core::prober::{Prober, UdpProber};
use dnscheck_core::progress::NoProgress;

use crate::utils::{Answer, spawn_responder};

const GITHUB: Ipv4Addr = Ipv4Addr::new(140, 82, 121, 4);

fn config() -> Config {
    Config {
        workers: NonZeroUsize::new(4).unwrap(),
        timeout: Duration::from_millis(500),
        progress_interval: Duration::from_millis(10),
        quiet: 2,
    }
}

fn answers() -> HashMap<String, Answer> {
    HashMap::from([
        ("github.com".to_string(), Answer::Address(GITHUB)),
        ("doubleclick.net".to_string(), Answer::Nothing),
        ("slow.example".to_string(), Answer::Silent),
        ("noisy.example".to_string(), Answer::StrayThen(GITHUB)),
        ("www.github.com".to_string(), Answer::Aliased(GITHUB)),
        ("broken.example".to_string(), Answer::Garbled),
    ])
}

fn find<'a>(results: &'a [ProbeResult], domain: &str) -> &'a ProbeResult {
    results
        .iter()
        .find(|r| r.domain == domain)
        .unwrap_or_else(|| panic!("no result for {domain}"))
}

#[tokio::test]
async fn udp_prober_resolves_against_local_responder() {
    let responder = spawn_responder(answers()).await.unwrap();
    let prober = UdpProber::with_port(responder.port);

    let outcome = prober
        .probe(&Server::new("127.0.0.1"), "github.com", Duration::from_secs(1))
        .await;

    assert_eq!(outcome.answer, Ok(IpAddr::V4(GITHUB)));
    assert!(outcome.latency < Duration::from_secs(1));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn full_run_over_udp_records_each_failure_mode() {
    let responder = spawn_responder(answers()).await.unwrap();
    let engine = Engine::new(UdpProber::with_port(responder.port), &config());
    let servers = vec![Server::new("127.0.0.1").with_label("loopback")];
    let domains = vec![
        DomainEntry::new("github.com", Category::General),
        DomainEntry::new("doubleclick.net", Category::AdServer),
        DomainEntry::new("slow.example", Category::Other),
        DomainEntry::new("noisy.example", Category::Other),
        DomainEntry::new("www.github.com", Category::General),
        DomainEntry::new("broken.example", Category::Other),
    ];

    let report = engine.run(servers, domains, NoProgress).await.unwrap();
    let results = report.results();
    assert_eq!(results.len(), 6);

    let github = find(results, "github.com");
    assert!(github.success);
    assert_eq!(github.resolved, Some(IpAddr::V4(GITHUB)));

    let ads = find(results, "doubleclick.net");
    assert!(!ads.success);
    assert_eq!(ads.error.as_deref(), Some("no answer received"));

    let slow = find(results, "slow.example");
    assert!(!slow.success);
    let reason: &str = slow.error.as_deref().unwrap_or_default();
    assert!(reason.contains("timed out"), "{reason}");
    assert!(slow.latency >= Duration::from_millis(500));

    let noisy = find(results, "noisy.example");
    assert!(
        noisy.success,
        "stray datagram was not skipped: {:?}",
        noisy.error
    );
    assert_eq!(noisy.resolved, Some(IpAddr::V4(GITHUB)));

    let aliased = find(results, "www.github.com");
    assert!(
        aliased.success,
        "A record after CNAME was missed: {:?}",
        aliased.error
    );
    assert_eq!(aliased.resolved, Some(IpAddr::V4(GITHUB)));

    let broken = find(results, "broken.example");
    assert!(!broken.success);
    let reason: &str = broken.error.as_deref().unwrap_or_default();
    assert!(reason.starts_with("malformed response"), "{reason}");

    assert_eq!(report.summary().successful, 3);
    assert_eq!(report.summary().categories[&Category::Other].successful, 1);
}

#[tokio::test]
async fn unparseable_server_fails_without_network() {
    let engine = Engine::new(UdpProber::default(), &config());
    let servers = vec![Server::new("not-an-ip")];
    let domains = vec![DomainEntry::new("github.com", Category::General)];

    let report = engine.run(servers, domains, NoProgress).await.unwrap();

    let result = &report.results()[0];
    assert!(!result.success);
    let reason: &str = result.error.as_deref().unwrap_or_default();
    assert!(reason.contains("not-an-ip"), "{reason}");
}
