//! Bearer-token gate for mutating routes

use askforge_common::RequestUser;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::config::AuthConfig;
use crate::context::AuthContext;
use crate::error::AuthError;
use crate::jwt::{extract_bearer_token, validate_token};

/// Bearer-token authentication gate.
///
/// Applied with `middleware::from_fn_with_state` as a `route_layer` on
/// routes that require authentication. On success the decoded identity is
/// attached to the request extensions for the handler, and the user id is
/// echoed into the response extensions so the error formatter can
/// attribute downstream failures. Performs no persistence I/O.
pub async fn require_auth(
    State(config): State<AuthConfig>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?;

    let token = extract_bearer_token(header)?;
    let claims = validate_token(&token, &config)?;
    let context = AuthContext::try_from(claims)?;

    request.extensions_mut().insert(context.clone());

    let mut response = next.run(request).await;
    response
        .extensions_mut()
        .insert(RequestUser(context.user_id));
    Ok(response)
}
