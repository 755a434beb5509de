//! Fetch error taxonomy

use thiserror::Error;
use types::errors::PayloadError;

/// Why a source could not be retrieved.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Timeout exceeded")]
    Timeout,

    #[error("Incomplete read ({received} bytes read, {} more expected)", .expected - .received)]
    IncompleteRead { received: u64, expected: u64 },

    #[error("Request unsuccessful: status code = {code}")]
    Status { code: u16 },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error(transparent)]
    Malformed(#[from] PayloadError),
}

/// Coarse classification of a `FetchError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network, timeout or truncated transfer
    Transport,
    /// Server answered with a non-success status
    Status,
    /// Body received but not a valid payload
    Malformed,
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Timeout | FetchError::IncompleteRead { .. } | FetchError::Transport(_) => {
                FailureKind::Transport
            }
            FetchError::Status { .. } => FailureKind::Status,
            FetchError::Malformed(_) => FailureKind::Malformed,
        }
    }

    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}
