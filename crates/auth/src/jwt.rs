//! Access token signing and validation

use axum::http::HeaderValue;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::AccessClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;

/// Fixed token lifetime: one hour
pub const TOKEN_TTL_SECS: u64 = 3600;

/// Sign an access token for a user
pub fn sign_token(user_id: i64, email: &str, config: &AuthConfig) -> Result<String, AuthError> {
    let iat = Utc::now().timestamp() as u64;
    let claims = AccessClaims {
        sub: user_id.to_string(),
        email: email.to_owned(),
        iat,
        exp: iat + TOKEN_TTL_SECS,
    };

    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_ref());
    encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        tracing::error!(error = %e, "Failed to sign access token");
        AuthError::TokenCreation
    })
}

/// Validate an access token and return its claims.
///
/// Any failure (bad signature, malformed payload, expiry) collapses to
/// `InvalidToken`; the client response does not distinguish them.
pub fn validate_token(token: &str, config: &AuthConfig) -> Result<AccessClaims, AuthError> {
    let validation = Validation::new(Algorithm::HS256);
    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_ref());

    let token_data = decode::<AccessClaims>(token, &decoding_key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "Access token validation failed");
        AuthError::InvalidToken
    })?;

    Ok(token_data.claims)
}

/// Extract the bearer token from an Authorization header value.
///
/// A missing `Bearer ` scheme or an empty token fails the same way a
/// missing header does.
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<String, AuthError> {
    let header_str = header.to_str().map_err(|_| AuthError::MissingToken)?;

    match header_str.strip_prefix("Bearer ") {
        Some(token) if !token.is_empty() => Ok(token.to_string()),
        _ => Err(AuthError::MissingToken),
    }
}
