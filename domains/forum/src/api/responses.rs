//! Success envelopes shared by the forum handlers
//!
//! Every list/get endpoint responds with the wrapped `{message, data}`
//! shape; creates respond with `{message, data: {id}}`.

use serde::Serialize;

use crate::domain::entities::PublicUser;

/// Wrapped read response: `{message, data}`
#[derive(Debug, Serialize)]
pub struct Fetched<T> {
    pub message: &'static str,
    pub data: T,
}

/// Create response: `{message, data: {id}}`
#[derive(Debug, Serialize)]
pub struct Created {
    pub message: &'static str,
    pub data: CreatedId,
}

#[derive(Debug, Serialize)]
pub struct CreatedId {
    pub id: i64,
}

/// Registration/login response: `{message, token, user}`
#[derive(Debug, Serialize)]
pub struct AuthSuccess {
    pub message: &'static str,
    pub token: String,
    pub user: PublicUser,
}
