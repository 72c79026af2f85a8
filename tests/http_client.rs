//! Integration tests for HttpRecommendationClient.
//!
//! Each test spins up an Axum stub of the recommendation service on a
//! random port and exercises the real reqwest path.

use std::collections::HashMap;
use std::time::Duration;

use axum::Json;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use tokio::net::TcpListener;

use trial_scout::config::ClientConfig;
use trial_scout::error::RecommendError;
use trial_scout::recommend::{HttpRecommendationClient, RecommendationClient};

/// Start the stub service on a random port and return its base URL.
async fn start_service(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    format!("http://127.0.0.1:{port}")
}

fn client_for(base_url: String) -> HttpRecommendationClient {
    HttpRecommendationClient::new(ClientConfig {
        base_url,
        timeout: Duration::from_secs(2),
    })
    .unwrap()
}

/// Stub handler that echoes the received `message` back as the study id,
/// so tests can assert the query parameter survived transport intact.
async fn echo_chat(Query(params): Query<HashMap<String, String>>) -> Json<serde_json::Value> {
    let message = params.get("message").cloned().unwrap_or_default();
    Json(serde_json::json!({
        "study": {
            "id": message,
            "inclusionCriteria": ["adult"],
            "exclusionCriteria": ["pregnant"],
        }
    }))
}

#[tokio::test]
async fn wraps_single_study_into_one_element_list() {
    let base_url = start_service(Router::new().route("/chat", post(echo_chat))).await;
    let client = client_for(base_url);

    let studies = client.recommend("diagnosed 2023").await.unwrap();

    assert_eq!(studies.len(), 1);
    assert_eq!(studies[0].inclusion_criteria, vec!["adult"]);
    assert_eq!(studies[0].exclusion_criteria, vec!["pregnant"]);
}

#[tokio::test]
async fn narrative_is_carried_as_the_message_query_parameter() {
    let base_url = start_service(Router::new().route("/chat", post(echo_chat))).await;
    let client = client_for(base_url);

    // Spaces and punctuation must survive URL encoding round-trip.
    let narrative = "stage 2 lung cancer, diagnosed 2023 & untreated";
    let studies = client.recommend(narrative).await.unwrap();

    assert_eq!(studies[0].id, narrative);
}

async fn failing_chat() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn malformed_chat() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "unexpected": true }))
}

#[tokio::test]
async fn non_success_status_is_a_bad_status_error() {
    let base_url = start_service(Router::new().route("/chat", post(failing_chat))).await;
    let client = client_for(base_url);

    let err = client.recommend("anything").await.unwrap_err();
    assert!(matches!(err, RecommendError::BadStatus { status: 500 }));
}

#[tokio::test]
async fn malformed_body_is_an_invalid_response_error() {
    let base_url = start_service(Router::new().route("/chat", post(malformed_chat))).await;
    let client = client_for(base_url);

    let err = client.recommend("anything").await.unwrap_err();
    assert!(matches!(err, RecommendError::InvalidResponse { .. }));
}

#[tokio::test]
async fn unreachable_service_is_a_request_failure() {
    // Nothing is listening on this port.
    let client = client_for("http://127.0.0.1:1".to_string());

    let err = client.recommend("anything").await.unwrap_err();
    assert!(matches!(err, RecommendError::RequestFailed { .. }));
}
