//! Answer repository

use askforge_common::Result;
use sqlx::PgPool;

use crate::domain::entities::Answer;

#[derive(Clone)]
pub struct AnswerRepository {
    pool: PgPool,
}

impl AnswerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all answers in insertion order
    pub async fn list(&self) -> Result<Vec<Answer>> {
        let answers = sqlx::query_as::<_, Answer>(
            r#"
            SELECT id, description, user_id, question_id, created_at
            FROM answers
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(answers)
    }

    /// Find an answer by id
    pub async fn find(&self, id: i64) -> Result<Option<Answer>> {
        let answer = sqlx::query_as::<_, Answer>(
            r#"
            SELECT id, description, user_id, question_id, created_at
            FROM answers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(answer)
    }

    /// List answers posted against a question.
    ///
    /// A question with no answers, including one that does not exist,
    /// yields an empty list.
    pub async fn list_by_question(&self, question_id: i64) -> Result<Vec<Answer>> {
        let answers = sqlx::query_as::<_, Answer>(
            r#"
            SELECT id, description, user_id, question_id, created_at
            FROM answers
            WHERE question_id = $1
            ORDER BY id
            "#,
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(answers)
    }

    /// Insert an answer, returning the generated id
    pub async fn create(
        &self,
        description: &str,
        user_id: i64,
        question_id: i64,
    ) -> Result<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO answers (description, user_id, question_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(description)
        .bind(user_id)
        .bind(question_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(id)
    }
}
