use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use colored::*;
use tracing::Instrument;

use crate::input;
use crate::report;
use crate::terminal::{colors, print, progress};
use dnscheck_common::config::Config;
use dnscheck_common::defaults;
use dnscheck_common::models::{DomainEntry, Report, Server};
use dnscheck_common::{info, success, warn};
use dnscheck_core::Engine;
use dnscheck_core::prober::UdpProber;
use dnscheck_core::progress::NoProgress;

use super::CommandLine;

pub async fn check(args: &CommandLine, cfg: &Config) -> anyhow::Result<()> {
    let servers: Vec<Server> = match &args.list {
        Some(path) => input::load_servers(path)?,
        None => {
            info!("No server list given, using the built-in DNS servers");
            defaults::default_servers()
        }
    };
    let domains: Vec<DomainEntry> = match &args.domains {
        Some(path) => input::load_domains(path)?,
        None => {
            info!("No domain list given, using the built-in domains");
            defaults::default_domains()
        }
    };

    if servers.is_empty() {
        warn!("Server list is empty, nothing will be probed");
    }
    if domains.is_empty() {
        warn!("Domain list is empty, nothing will be probed");
    }

    print::header("DNS Check", cfg.quiet);
    info!(
        "Testing {} servers against {} domains",
        servers.len(),
        domains.len()
    );

    let start_time: Instant = Instant::now();
    let report: Report = run_engine(servers, domains, cfg)
        .await
        .context("probe run failed")?;
    check_ends(&report, start_time.elapsed(), cfg);

    let content: String = report::render(&report, args.format)?;
    report::write(&content, args.output.as_deref())?;
    if let Some(path) = args.output.as_deref() {
        results_saved(path);
    }
    Ok(())
}

async fn run_engine(
    servers: Vec<Server>,
    domains: Vec<DomainEntry>,
    cfg: &Config,
) -> Result<Report, dnscheck_core::EngineError> {
    let engine = Engine::new(UdpProber::default(), cfg);

    if cfg.quiet >= 2 {
        return engine.run(servers, domains, NoProgress).await;
    }

    let span = progress::probe_span();
    let renderer = progress::SpanProgress::new(span.clone());
    engine
        .run(servers, domains, renderer)
        .instrument(span)
        .await
}

fn check_ends(report: &Report, total_time: Duration, cfg: &Config) {
    let summary = report.summary();
    let resolved: ColoredString = format!("{}/{} probes", summary.successful, summary.total)
        .bold()
        .green();
    let total_time: ColoredString = format!("{:.2}s", total_time.as_secs_f64()).bold().yellow();
    let output: ColoredString =
        format!("Check Complete: {resolved} resolved in {total_time}").color(colors::TEXT_DEFAULT);

    print::fat_separator(cfg.quiet);
    success!("{output}");
}

fn results_saved(path: &Path) {
    info!("Results saved to {}", path.display());
}
