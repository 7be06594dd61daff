//! Orchestrates one run: generation, dispatch, collection and teardown.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use dnscheck_common::config::Config;
use dnscheck_common::models::{DomainEntry, ProbeResult, Report, Server};
use thiserror::Error;
use tokio::sync::{mpsc, watch};
use tracing::debug;

use crate::aggregate;
use crate::jobs::JobGenerator;
use crate::pool::WorkerPool;
use crate::prober::Prober;
use crate::progress::{ProgressCounter, ProgressMonitor, ProgressRenderer};

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("run ended with {received} of {expected} results")]
    IncompleteRun { expected: usize, received: usize },
}

/// Lifecycle of a single run. Phases only ever move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RunPhase {
    Idle,
    /// Jobs are being generated and queued.
    Dispatching,
    /// Workers are probing, the monitor is ticking.
    Probing,
    /// The result stream has closed, results are being sorted and summarized.
    Draining,
    /// Report available, monitor stopped.
    Done,
}

/// Publishes the phase of one run and rejects backward moves.
struct PhaseTracker<'a> {
    current: RunPhase,
    published: &'a watch::Sender<RunPhase>,
}

impl<'a> PhaseTracker<'a> {
    fn start(published: &'a watch::Sender<RunPhase>) -> Self {
        published.send_replace(RunPhase::Idle);
        Self {
            current: RunPhase::Idle,
            published,
        }
    }

    fn advance(&mut self, next: RunPhase) {
        debug_assert!(
            next > self.current,
            "run phase moved from {:?} to {next:?}",
            self.current
        );
        debug!("run phase {:?} -> {next:?}", self.current);
        self.current = next;
        self.published.send_replace(next);
    }
}

pub struct Engine<P: Prober> {
    prober: Arc<P>,
    workers: NonZeroUsize,
    timeout: Duration,
    progress_interval: Duration,
    phase: watch::Sender<RunPhase>,
}

impl<P: Prober> Engine<P> {
    pub fn new(prober: P, cfg: &Config) -> Self {
        Self {
            prober: Arc::new(prober),
            workers: cfg.workers,
            timeout: cfg.timeout,
            progress_interval: cfg.progress_interval,
            phase: watch::Sender::new(RunPhase::Idle),
        }
    }

    /// Follows the phase of the most recently started run.
    pub fn subscribe(&self) -> watch::Receiver<RunPhase> {
        self.phase.subscribe()
    }

    /// Probes every domain against every server and returns the report.
    ///
    /// Individual probe failures are part of the report. The only error is a
    /// run that lost results on the way.
    pub async fn run<R: ProgressRenderer>(
        &self,
        servers: Vec<Server>,
        domains: Vec<DomainEntry>,
        renderer: R,
    ) -> Result<Report, EngineError> {
        let mut phase = PhaseTracker::start(&self.phase);

        let jobs: JobGenerator = JobGenerator::new(servers.into(), domains.into());
        let total: usize = jobs.total();
        let counter: ProgressCounter = ProgressCounter::new();
        let monitor: ProgressMonitor =
            ProgressMonitor::start(counter.clone(), total, self.progress_interval, renderer);

        phase.advance(RunPhase::Dispatching);
        let pool = WorkerPool::new(self.prober.clone(), self.workers, self.timeout, counter);
        let mut results_rx: mpsc::Receiver<ProbeResult> = pool.spawn(jobs);

        phase.advance(RunPhase::Probing);
        let collected = aggregate::collect(&mut results_rx, total).await;

        phase.advance(RunPhase::Draining);
        monitor.stop().await;
        let results: Vec<ProbeResult> = collected?;
        let report: Report = aggregate::build_report(results, Local::now());

        phase.advance(RunPhase::Done);
        debug!(
            "run finished: {}/{} probes succeeded",
            report.summary().successful,
            report.summary().total
        );
        Ok(report)
    }
}
