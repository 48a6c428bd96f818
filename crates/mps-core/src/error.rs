//! Error type returned by power-action operations.

use thiserror::Error;

use crate::transport::TransportError;

/// Failure of a single power-action call.
#[derive(Debug, Error)]
pub enum MpsError {
    /// No HTTP response was obtained (connect, TLS, timeout, malformed URL).
    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The proxy answered with a non-2xx status.
    #[error("mps rejected request: HTTP {status}: {body}")]
    RemoteRejected { status: u32, body: String },

    /// Request payload could not be encoded.
    #[error("encode request: {0}")]
    Encode(#[from] serde_json::Error),

    /// Blocking transport task panicked or was cancelled.
    #[error("transport worker: {0}")]
    Worker(String),
}

impl MpsError {
    /// True for errors where no response was received from the proxy.
    pub fn is_transport(&self) -> bool {
        matches!(self, MpsError::Transport(_))
    }
}

pub type Result<T> = std::result::Result<T, MpsError>;
