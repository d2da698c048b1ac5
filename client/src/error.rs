//! Error types for the sync layer

use thiserror::Error;

/// Errors that can occur when talking to the remote todo resource.
///
/// Sync operations never recover from these locally: no action is
/// dispatched, the state is left as-is, and the error propagates to the
/// caller. Only the generic fetch primitive captures errors into its own
/// state for presentation.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The HTTP round-trip could not complete (connectivity, DNS, TLS)
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The remote answered with a non-success status
    #[error("server returned status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as far as it could be read
        message: String,
    },

    /// The call succeeded but the payload shape did not match expectations
    #[error("response parsing failed: {0}")]
    ParseFailed(String),
}

impl SyncError {
    /// Whether this error came from a non-success HTTP status
    #[must_use]
    pub const fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}
