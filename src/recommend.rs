//! Recommendation service boundary.
//!
//! The engine only sees the [`RecommendationClient`] trait; the HTTP
//! implementation below talks to the matching service's `/chat` endpoint.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::conversation::Study;
use crate::error::RecommendError;

/// Client for the study recommendation service.
#[async_trait]
pub trait RecommendationClient: Send + Sync {
    /// Submit a patient narrative and return the matched studies.
    ///
    /// Exactly one outbound request per call. Any transport error,
    /// non-success status, or malformed body is reported as a single
    /// [`RecommendError`]; no partial results are returned.
    async fn recommend(&self, narrative: &str) -> Result<Vec<Study>, RecommendError>;
}

/// Response envelope from the service: one study per call.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    study: Study,
}

/// HTTP client for the recommendation service.
///
/// Sends the narrative as the `message` query parameter of a POST to
/// `{base_url}/chat` and wraps the returned study into a one-element list.
pub struct HttpRecommendationClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl HttpRecommendationClient {
    pub fn new(config: ClientConfig) -> Result<Self, RecommendError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| RecommendError::RequestFailed {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { config, client })
    }

    fn chat_url(&self) -> String {
        format!("{}/chat", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl RecommendationClient for HttpRecommendationClient {
    async fn recommend(&self, narrative: &str) -> Result<Vec<Study>, RecommendError> {
        let response = self
            .client
            .post(self.chat_url())
            .query(&[("message", narrative)])
            .send()
            .await
            .map_err(|e| RecommendError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecommendError::BadStatus {
                status: status.as_u16(),
            });
        }

        let body: ChatResponse =
            response
                .json()
                .await
                .map_err(|e| RecommendError::InvalidResponse {
                    reason: e.to_string(),
                })?;

        Ok(vec![body.study])
    }
}
