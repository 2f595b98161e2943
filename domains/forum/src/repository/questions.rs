//! Question repository

use askforge_common::Result;
use sqlx::PgPool;

use crate::domain::entities::Question;

#[derive(Clone)]
pub struct QuestionRepository {
    pool: PgPool,
}

impl QuestionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all questions in insertion order
    pub async fn list(&self) -> Result<Vec<Question>> {
        let questions = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, title, description, user_id, created_at
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(questions)
    }

    /// Find a question by id
    pub async fn find(&self, id: i64) -> Result<Option<Question>> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, title, description, user_id, created_at
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    /// Insert a question, returning the generated id
    pub async fn create(&self, title: &str, description: &str, user_id: i64) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO questions (title, description, user_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}
