//! User repository

use askforge_common::{Error, Result};
use sqlx::PgPool;

use crate::domain::entities::{PublicUser, User};

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by email, including the stored password hash
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Insert a new user, returning the non-sensitive projection.
    ///
    /// The unique constraint on email is the authority under concurrent
    /// registrations; a violation surfaces as `Conflict` regardless of what
    /// the caller's pre-check saw.
    pub async fn create(
        &self,
        first_name: &str,
        last_name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<PublicUser> {
        let user = sqlx::query_as::<_, PublicUser>(
            r#"
            INSERT INTO users (first_name, last_name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, email
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Error::Conflict("User already exists".to_string())
            }
            _ => Error::Database(e),
        })?;

        Ok(user)
    }
}
