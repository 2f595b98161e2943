//! Authentication errors

use askforge_common::Error;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Authentication error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Authorization header missing, wrong scheme, or empty token
    MissingToken,
    /// Signature invalid, payload malformed, or token expired
    InvalidToken,
    /// Token could not be signed
    TokenCreation,
}

impl AuthError {
    pub fn status_code(self) -> StatusCode {
        match self {
            AuthError::MissingToken | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::TokenCreation => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingToken => Error::Authentication("Access token required".to_string()),
            AuthError::InvalidToken => {
                Error::Authentication("Invalid or expired token".to_string())
            }
            AuthError::TokenCreation => Error::Internal("Failed to sign access token".to_string()),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        Error::from(self).into_response()
    }
}
