//! Request-scoped authenticated identity

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::claims::AccessClaims;
use crate::error::AuthError;

/// Identity attached to a request by the auth gate.
///
/// Derived from the verified token claims, not a live reference to the
/// user row. Each request's context is independent and dropped with the
/// response.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: i64,
    pub email: String,
}

impl TryFrom<AccessClaims> for AuthContext {
    type Error = AuthError;

    fn try_from(claims: AccessClaims) -> Result<Self, Self::Error> {
        // A non-numeric subject is a malformed payload
        let user_id = claims.sub.parse().map_err(|_| AuthError::InvalidToken)?;

        Ok(AuthContext {
            user_id,
            email: claims.email,
        })
    }
}

/// Extractor reading the identity the gate attached to the request.
///
/// Rejects with 401 when no gate ran for this route, so a handler taking
/// `AuthContext` can never observe an unauthenticated request.
impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or(AuthError::MissingToken)
    }
}
