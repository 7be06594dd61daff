use std::time::Duration;

use thiserror::Error;

/// Why a single probe failed.
///
/// None of these are fatal to a run, each one ends up as the reason of a
/// failed [`ProbeResult`](crate::models::ProbeResult).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("query timed out after {0:?}")]
    Timeout(Duration),
    #[error("{0}")]
    Transport(String),
    #[error("no answer received")]
    EmptyAnswer,
    #[error("no A record found in response")]
    NoARecord,
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("invalid server address '{0}'")]
    InvalidServer(String),
    #[error("cannot build query: {0}")]
    InvalidQuery(String),
    #[error("probe aborted: {0}")]
    Aborted(String),
}

impl From<std::io::Error> for ProbeError {
    fn from(err: std::io::Error) -> Self {
        ProbeError::Transport(err.to_string())
    }
}
