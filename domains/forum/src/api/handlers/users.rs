//! Registration and login handlers
//!
//! Implements:
//! - POST /register — Create an account and issue an access token
//! - POST /login — Verify credentials and issue an access token

use askforge_auth::sign_token;
use askforge_common::{hash_password, verify_password, Error, JsonBody, Result};
use axum::{extract::State, http::StatusCode, Json};

use crate::api::middleware::ForumState;
use crate::api::responses::AuthSuccess;
use crate::domain::validation::{validate_login, validate_register, LoginPayload, RegisterPayload};

/// Identical wording for unknown email and wrong password; the response
/// must not reveal which credential failed.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// POST /register — Create an account and issue an access token
pub async fn register(
    State(state): State<ForumState>,
    JsonBody(payload): JsonBody<RegisterPayload>,
) -> Result<(StatusCode, Json<AuthSuccess>)> {
    let data = validate_register(&payload)?;

    // Fast path only; the unique constraint on email is the authority
    // under concurrent registrations.
    if state.repos.users.find_by_email(&data.email).await?.is_some() {
        return Err(Error::Conflict("User already exists".to_string()));
    }

    let password_hash = hash_password(&data.password)?;
    let user = state
        .repos
        .users
        .create(&data.first_name, &data.last_name, &data.email, &password_hash)
        .await?;

    tracing::info!(user_id = user.id, email = %user.email, "User registered");

    let token = sign_token(user.id, &user.email, &state.auth)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthSuccess {
            message: "User registered successfully",
            token,
            user,
        }),
    ))
}

/// POST /login — Verify credentials and issue an access token
pub async fn login(
    State(state): State<ForumState>,
    JsonBody(payload): JsonBody<LoginPayload>,
) -> Result<(StatusCode, Json<AuthSuccess>)> {
    let data = validate_login(&payload)?;

    let user = state
        .repos
        .users
        .find_by_email(&data.email)
        .await?
        .ok_or_else(|| Error::Authentication(INVALID_CREDENTIALS.to_string()))?;

    if !verify_password(&data.password, &user.password_hash) {
        return Err(Error::Authentication(INVALID_CREDENTIALS.to_string()));
    }

    let token = sign_token(user.id, &user.email, &state.auth)?;

    Ok((
        StatusCode::OK,
        Json(AuthSuccess {
            message: "Login successful",
            token,
            user: user.into(),
        }),
    ))
}
