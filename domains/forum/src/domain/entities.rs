//! Domain entities for the forum domain

use chrono::{DateTime, Utc};
use serde::Serialize;

/// User entity as stored.
///
/// Carries the password hash and therefore never implements `Serialize`;
/// the HTTP boundary only ever sees [`PublicUser`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Non-sensitive projection of a user row
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct PublicUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
        }
    }
}

/// Question entity
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Question {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Answer entity
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Answer {
    pub id: i64,
    pub description: String,
    pub user_id: i64,
    pub question_id: i64,
    pub created_at: DateTime<Utc>,
}
