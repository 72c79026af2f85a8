//! Configuration types.

use std::time::Duration;

/// Configuration for the HTTP recommendation client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the recommendation service.
    pub base_url: String,
    /// Per-request timeout. A timed-out call is reported as a request
    /// failure; the engine never retries on its own.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}
