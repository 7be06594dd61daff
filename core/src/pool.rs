//! Fixed-size worker pool.
//!
//! A dispatcher feeds jobs into a bounded queue shared by `W` workers. Each
//! worker takes the next unclaimed job, runs one probe, bumps the completion
//! counter and publishes exactly one [`ProbeResult`]. The result stream closes
//! once every worker has been joined.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use dnscheck_common::error::ProbeError;
use dnscheck_common::models::{ProbeOutcome, ProbeResult};
use tokio::sync::{Mutex, mpsc};
use tokio::task::JoinSet;
use tracing::{debug, error, trace, warn};

use crate::jobs::{JobGenerator, ProbeJob};
use crate::prober::Prober;
use crate::progress::ProgressCounter;

const QUEUE_DEPTH_PER_WORKER: usize = 2;
/// Slack granted to a prober on top of its own timeout before the worker gives up on it.
const PROBE_GRACE: Duration = Duration::from_millis(500);

type JobQueue = Arc<Mutex<mpsc::Receiver<ProbeJob>>>;

pub struct WorkerPool<P: Prober> {
    prober: Arc<P>,
    workers: NonZeroUsize,
    timeout: Duration,
    counter: ProgressCounter,
}

impl<P: Prober> WorkerPool<P> {
    pub fn new(
        prober: Arc<P>,
        workers: NonZeroUsize,
        timeout: Duration,
        counter: ProgressCounter,
    ) -> Self {
        Self {
            prober,
            workers,
            timeout,
            counter,
        }
    }

    /// Starts dispatching `jobs` and returns the stream of results.
    ///
    /// The stream yields one result per job in completion order and ends after
    /// the last worker has exited.
    pub fn spawn(self, jobs: JobGenerator) -> mpsc::Receiver<ProbeResult> {
        let workers: usize = self.workers.get();
        let depth: usize = workers.saturating_mul(QUEUE_DEPTH_PER_WORKER);
        let (job_tx, job_rx) = mpsc::channel::<ProbeJob>(depth);
        let (result_tx, result_rx) = mpsc::channel::<ProbeResult>(depth);

        tokio::spawn(dispatch(jobs, job_tx));

        let queue: JobQueue = Arc::new(Mutex::new(job_rx));
        let mut set: JoinSet<usize> = JoinSet::new();
        for id in 0..workers {
            set.spawn(work(
                id,
                queue.clone(),
                result_tx.clone(),
                self.prober.clone(),
                self.timeout,
                self.counter.clone(),
            ));
        }

        tokio::spawn(async move {
            let mut handled: usize = 0;
            while let Some(joined) = set.join_next().await {
                match joined {
                    Ok(count) => handled += count,
                    Err(e) => error!("worker terminated abnormally: {e}"),
                }
            }
            drop(result_tx);
            debug!("{workers} workers joined after {handled} jobs, result stream closed");
        });

        result_rx
    }
}

async fn dispatch(jobs: JobGenerator, tx: mpsc::Sender<ProbeJob>) {
    let total: usize = jobs.len();
    for job in jobs {
        if tx.send(job).await.is_err() {
            warn!("job queue closed before all {total} jobs were dispatched");
            return;
        }
    }
    trace!("dispatched {total} jobs");
}

async fn work<P: Prober>(
    id: usize,
    queue: JobQueue,
    results: mpsc::Sender<ProbeResult>,
    prober: Arc<P>,
    timeout: Duration,
    counter: ProgressCounter,
) -> usize {
    let mut handled: usize = 0;
    loop {
        let next: Option<ProbeJob> = queue.lock().await.recv().await;
        let Some(job) = next else {
            break;
        };

        let result: ProbeResult = execute(&prober, job, timeout).await;
        counter.increment_and_get();
        handled += 1;

        if results.send(result).await.is_err() {
            warn!("worker {id}: result stream closed, stopping");
            break;
        }
    }
    trace!("worker {id} exiting after {handled} jobs");
    handled
}

/// Runs one probe in its own task so a panicking or hanging prober still
/// yields a failed result.
async fn execute<P: Prober>(prober: &Arc<P>, job: ProbeJob, timeout: Duration) -> ProbeResult {
    let ProbeJob { server, domain } = job;
    let start: Instant = Instant::now();

    let task = {
        let prober: Arc<P> = prober.clone();
        let server = server.clone();
        let name: String = domain.domain.clone();
        tokio::spawn(async move { prober.probe(&server, &name, timeout).await })
    };
    let abort = task.abort_handle();

    let outcome: ProbeOutcome = match tokio::time::timeout(timeout + PROBE_GRACE, task).await {
        Ok(Ok(outcome)) => outcome,
        Ok(Err(join_err)) => {
            ProbeOutcome::failed(start.elapsed(), ProbeError::Aborted(join_err.to_string()))
        }
        Err(_elapsed) => {
            abort.abort();
            ProbeOutcome::failed(start.elapsed(), ProbeError::Timeout(timeout))
        }
    };

    ProbeResult::new(server, domain, outcome)
}
