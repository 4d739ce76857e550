//! Error types surfaced by the synchronization flows.
//!
//! All backend failures are treated alike: they are logged and the previous
//! render stays in place. The variants only exist to make the log useful.

use thiserror::Error;

/// Failure of a single REST call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, abort).
    #[error("request to {path} failed: {message}")]
    Transport {
        /// Request path.
        path: String,
        /// Transport error text.
        message: String,
    },
    /// The backend answered with a non-success status.
    #[error("request to {path} returned HTTP {status}")]
    Status {
        /// Request path.
        path: String,
        /// HTTP status code.
        status: u16,
    },
    /// The response body did not match the expected shape.
    #[error("response from {path} could not be decoded: {message}")]
    Decode {
        /// Request path.
        path: String,
        /// Decoder error text.
        message: String,
    },
    /// The request body could not be encoded.
    #[error("request body for {path} could not be encoded: {message}")]
    Encode {
        /// Request path.
        path: String,
        /// Encoder error text.
        message: String,
    },
}

impl ApiError {
    /// Path of the failed request.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Transport { path, .. }
            | Self::Status { path, .. }
            | Self::Decode { path, .. }
            | Self::Encode { path, .. } => path,
        }
    }
}

/// Result alias for backend calls.
pub type ApiResult<T> = Result<T, ApiError>;
