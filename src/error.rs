//! Error types for Trial Scout.

/// Errors from the recommendation service boundary.
///
/// The conversation engine treats every variant as one request failure: it
/// emits the scripted apology and returns the conversation to the greeting
/// stage. The split exists for diagnostics, not for control flow.
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("Request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("Service returned status {status}")]
    BadStatus { status: u16 },

    #[error("Invalid response body: {reason}")]
    InvalidResponse { reason: String },
}

/// Result type alias for the recommendation boundary.
pub type Result<T> = std::result::Result<T, RecommendError>;
