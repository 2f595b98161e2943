//! Error envelope integration tests
//!
//! GET /questions reaches persistence, and with the fixture's unreachable
//! pool that surfaces a storage failure, exercising the 500 path of the
//! centralized formatter in both deployment modes.

use axum::http::StatusCode;
use tower::ServiceExt;

use crate::common::{get_request, response_json, test_app};
use askforge_common::Environment;

#[tokio::test]
async fn test_development_mode_exposes_detail() {
    let app = test_app(Environment::Development);

    let response = app.oneshot(get_request("/questions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["statusCode"], 500);
    // The literal failure message and a diagnostic trace are included
    assert_ne!(body["message"], "Internal server error");
    assert!(body.get("stack").is_some());
    assert!(body["requestId"].as_str().is_some_and(|id| !id.is_empty()));
}

#[tokio::test]
async fn test_production_mode_sanitizes_server_errors() {
    let app = test_app(Environment::Production);

    let response = app.oneshot(get_request("/questions")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = response_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["message"], "Internal server error");
    assert!(body.get("stack").is_none());
}

#[tokio::test]
async fn test_production_mode_keeps_client_error_messages() {
    let app = test_app(Environment::Production);

    let response = app
        .oneshot(crate::common::json_request(
            axum::http::Method::POST,
            "/register",
            serde_json::json!({}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Only 500-class messages are sanitized
    let body = response_json(response).await;
    assert_eq!(body["message"], "All fields are required");
    assert!(body.get("stack").is_none());
}

#[tokio::test]
async fn test_request_id_header_is_echoed() {
    let app = test_app(Environment::Development);

    let mut request = get_request("/questions");
    request
        .headers_mut()
        .insert("x-request-id", "test-req-123".parse().unwrap());
    let response = app.oneshot(request).await.unwrap();

    let body = response_json(response).await;
    assert_eq!(body["requestId"], "test-req-123");
}

#[tokio::test]
async fn test_successful_responses_pass_through() {
    let app = test_app(Environment::Production);

    let response = app.oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"OK");
}
