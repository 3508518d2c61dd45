//! Error types for LAUTTA

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for LAUTTA operations
pub type Result<T> = std::result::Result<T, LauttaError>;

/// Construction-time error for the dispatcher
///
/// Once a [`crate::BulkDispatcher`] is built, `submit` and `await_close`
/// never fail; upload failures are absorbed by the workers and reflected
/// in logs and stats.
#[derive(Error, Debug)]
pub enum LauttaError {
    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}

/// Error raised by a single upload attempt
///
/// Never crosses the public surface; the worker loop decides between
/// aborting the batch (encode/build failures) and rotating to the next
/// host (transport failures and retryable statuses).
#[derive(Error, Debug)]
pub enum UploadError {
    /// Compressing the request body failed
    #[error("encoding request body failed: {0}")]
    Encode(#[from] std::io::Error),

    /// The request could not be constructed (e.g. invalid host URL)
    #[error("building request failed: {0}")]
    BuildRequest(String),

    /// The request never produced a response
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response status is configured as whole-batch retryable
    #[error("retryable status: {0}")]
    RetryableStatus(StatusCode),
}
