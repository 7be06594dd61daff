use std::num::NonZeroUsize;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);
pub const DEFAULT_WORKERS: NonZeroUsize = NonZeroUsize::new(50).unwrap();
pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct Config {
    /// Number of probes allowed in flight at the same time.
    pub workers: NonZeroUsize,
    /// Upper bound for a single probe.
    ///
    /// Must be greater than zero, callers validate this before building a run.
    pub timeout: Duration,
    /// How often the progress monitor samples the completion counter.
    pub progress_interval: Duration,
    /// 0 prints everything, 1 hides decorations, 2 also hides the progress bar.
    pub quiet: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            timeout: DEFAULT_TIMEOUT,
            progress_interval: PROGRESS_INTERVAL,
            quiet: 0,
        }
    }
}
