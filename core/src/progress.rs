//! Periodic progress feedback.
//!
//! Workers bump a [`ProgressCounter`] after every finished job. The
//! [`ProgressMonitor`] samples it on a fixed interval, independent of job
//! completions, and hands a [`ProgressSnapshot`] to a [`ProgressRenderer`].

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::error;

pub const BAR_WIDTH: usize = 40;

const BAR_FILLED: &str = "█";
const BAR_EMPTY: &str = "░";
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Shared count of completed jobs, monotonically increasing.
#[derive(Debug, Clone, Default)]
pub struct ProgressCounter(Arc<AtomicUsize>);

impl ProgressCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_and_get(&self) -> usize {
        self.0.fetch_add(1, Ordering::AcqRel) + 1
    }

    pub fn load(&self) -> usize {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressSnapshot {
    pub completed: usize,
    pub total: usize,
    pub elapsed: Duration,
}

impl ProgressSnapshot {
    fn sample(counter: &ProgressCounter, total: usize, started: Instant) -> Self {
        Self {
            completed: counter.load(),
            total,
            elapsed: started.elapsed(),
        }
    }

    /// Completed share in `[0, 1]`. A run without jobs counts as finished.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.completed.min(self.total) as f64 / self.total as f64
    }

    pub fn percentage(&self) -> f64 {
        self.fraction() * 100.0
    }

    /// Average time per finished job times the jobs left.
    ///
    /// Unknown until the first job completes.
    pub fn eta(&self) -> Option<Duration> {
        if self.completed == 0 {
            return None;
        }
        let remaining: usize = self.total.saturating_sub(self.completed);
        let per_completed: f64 = remaining as f64 / self.completed as f64;
        Some(self.elapsed.mul_f64(per_completed))
    }

    pub fn bar(&self, width: usize) -> String {
        let filled: usize = ((self.fraction() * width as f64) as usize).min(width);
        format!(
            "{}{}",
            BAR_FILLED.repeat(filled),
            BAR_EMPTY.repeat(width - filled)
        )
    }

    /// `[████░░░░] 3/8 (37.5%) | Elapsed: 1.2s | ETA: 2.0s`
    pub fn render(&self) -> String {
        let eta: String = self
            .eta()
            .map(format_duration)
            .unwrap_or_else(|| String::from("--"));
        format!(
            "[{}] {}/{} ({:.1}%) | Elapsed: {} | ETA: {}",
            self.bar(BAR_WIDTH),
            self.completed,
            self.total,
            self.percentage(),
            format_duration(self.elapsed),
            eta
        )
    }
}

/// Seconds below a minute, minutes and seconds above.
pub fn format_duration(d: Duration) -> String {
    if d < Duration::from_secs(60) {
        return format!("{:.1}s", d.as_secs_f64());
    }
    let secs: u64 = d.as_secs();
    format!("{}m{}s", secs / 60, secs % 60)
}

pub trait ProgressRenderer: Send + 'static {
    fn render(&mut self, snapshot: &ProgressSnapshot);

    /// Called exactly once after the monitor was told to stop.
    fn finish(&mut self, snapshot: &ProgressSnapshot) {
        self.render(snapshot);
    }
}

/// Renders nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressRenderer for NoProgress {
    fn render(&mut self, _snapshot: &ProgressSnapshot) {}
}

/// Handle to the background sampling task.
///
/// Dropping the handle also ends the task, [`ProgressMonitor::stop`] additionally
/// waits for the final render.
pub struct ProgressMonitor {
    stop_tx: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl ProgressMonitor {
    pub fn start<R: ProgressRenderer>(
        counter: ProgressCounter,
        total: usize,
        interval: Duration,
        mut renderer: R,
    ) -> Self {
        let started: Instant = Instant::now();
        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval.max(MIN_INTERVAL));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    biased;
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        renderer.render(&ProgressSnapshot::sample(&counter, total, started));
                    }
                }
            }

            renderer.finish(&ProgressSnapshot::sample(&counter, total, started));
        });

        Self { stop_tx, handle }
    }

    pub async fn stop(self) {
        let _ = self.stop_tx.send(());
        if let Err(e) = self.handle.await {
            error!("progress monitor terminated abnormally: {e}");
        }
    }
}
