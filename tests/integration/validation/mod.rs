//! Request validation integration tests
//!
//! Every case fails validation before any query is issued, so no row can
//! have been inserted.

use axum::http::{Method, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use crate::common::{bearer_token, json_request, response_json, test_app};
use askforge_common::Environment;

#[tokio::test]
async fn test_register_missing_fields() {
    let app = test_app(Environment::Development);

    let request = json_request(Method::POST, "/register", json!({}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["statusCode"], 400);
    assert_eq!(body["message"], "All fields are required");
}

#[tokio::test]
async fn test_register_rejects_each_rule_in_order() {
    let cases = [
        (
            json!({
                "firstName": "John", "lastName": "Doe", "email": "john@example.com",
                "password": "Password123"
            }),
            "All fields are required",
        ),
        (
            json!({
                "firstName": "John2", "lastName": "Doe", "email": "john@example.com",
                "password": "Password123", "confirmPassword": "Password123"
            }),
            "First and last name must contain only letters",
        ),
        (
            json!({
                "firstName": "John", "lastName": "Doe", "email": "not-an-email",
                "password": "Password123", "confirmPassword": "Password123"
            }),
            "Invalid email format",
        ),
        (
            json!({
                "firstName": "John", "lastName": "Doe", "email": "john@example.com",
                "password": "Password123", "confirmPassword": "Password124"
            }),
            "Passwords do not match",
        ),
        (
            json!({
                "firstName": "John", "lastName": "Doe", "email": "john@example.com",
                "password": "abcdef", "confirmPassword": "abcdef"
            }),
            "Password must be at least 6 characters and contain at least one letter and one number",
        ),
    ];

    for (payload, expected) in cases {
        let app = test_app(Environment::Development);
        let response = app
            .oneshot(json_request(Method::POST, "/register", payload.clone()))
            .await
            .unwrap();

        assert_eq!(
            response.status(),
            StatusCode::BAD_REQUEST,
            "payload {} should be rejected",
            payload
        );
        let body = response_json(response).await;
        assert_eq!(body["message"], expected);
    }
}

#[tokio::test]
async fn test_register_malformed_json_body() {
    let app = test_app(Environment::Development);

    let request = axum::http::Request::builder()
        .method(Method::POST)
        .uri("/register")
        .header("content-type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Malformed bodies still come back in the uniform envelope
    let body = response_json(response).await;
    assert_eq!(body["status"], "error");
    assert_eq!(body["statusCode"], 400);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = test_app(Environment::Development);

    let request = json_request(Method::POST, "/login", json!({"email": "a@b.co"}));
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Email and password are required");
}

#[tokio::test]
async fn test_login_invalid_email_format() {
    let app = test_app(Environment::Development);

    let request = json_request(
        Method::POST,
        "/login",
        json!({"email": "not-an-email", "password": "Password123"}),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Invalid email format");
}

#[tokio::test]
async fn test_create_question_missing_title() {
    let app = test_app(Environment::Development);

    let token = bearer_token(1, "john.doe@example.com");
    let mut request = json_request(
        Method::POST,
        "/questions",
        json!({"description": "no title"}),
    );
    request.headers_mut().insert(
        "authorization",
        format!("Bearer {}", token).parse().unwrap(),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Title is required");
}

#[tokio::test]
async fn test_create_question_missing_description() {
    let app = test_app(Environment::Development);

    let token = bearer_token(1, "john.doe@example.com");
    let mut request = json_request(Method::POST, "/questions", json!({"title": "only a title"}));
    request.headers_mut().insert(
        "authorization",
        format!("Bearer {}", token).parse().unwrap(),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Description is required");
}

#[tokio::test]
async fn test_answer_question_empty_description() {
    let app = test_app(Environment::Development);

    let token = bearer_token(1, "john.doe@example.com");
    let mut request = json_request(
        Method::POST,
        "/questions/7/answers",
        json!({"description": ""}),
    );
    request.headers_mut().insert(
        "authorization",
        format!("Bearer {}", token).parse().unwrap(),
    );
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["message"], "Description is required");
}
