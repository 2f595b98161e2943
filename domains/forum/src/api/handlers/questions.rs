//! Question handlers
//!
//! Implements:
//! - GET /questions — List all questions (public)
//! - GET /questions/{question_id} — Fetch one question (public)
//! - POST /questions — Create a question (bearer)

use askforge_auth::AuthContext;
use askforge_common::{Error, JsonBody, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::middleware::ForumState;
use crate::api::responses::{Created, CreatedId, Fetched};
use crate::domain::entities::Question;
use crate::domain::validation::{validate_question, QuestionPayload};

/// GET /questions — List all questions
pub async fn list_questions(
    State(state): State<ForumState>,
) -> Result<Json<Fetched<Vec<Question>>>> {
    let questions = state.repos.questions.list().await?;

    Ok(Json(Fetched {
        message: "Questions fetched successfully",
        data: questions,
    }))
}

/// GET /questions/{question_id} — Fetch one question
pub async fn get_question(
    State(state): State<ForumState>,
    Path(question_id): Path<i64>,
) -> Result<Json<Fetched<Question>>> {
    let question = state
        .repos
        .questions
        .find(question_id)
        .await?
        .ok_or_else(|| Error::NotFound("Question not found".to_string()))?;

    Ok(Json(Fetched {
        message: "Question fetched successfully",
        data: question,
    }))
}

/// POST /questions — Create a question owned by the authenticated user
pub async fn create_question(
    context: AuthContext,
    State(state): State<ForumState>,
    JsonBody(payload): JsonBody<QuestionPayload>,
) -> Result<(StatusCode, Json<Created>)> {
    let data = validate_question(&payload)?;

    let id = state
        .repos
        .questions
        .create(&data.title, &data.description, context.user_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: "Question created successfully",
            data: CreatedId { id },
        }),
    ))
}
