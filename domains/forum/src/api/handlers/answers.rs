//! Answer handlers
//!
//! Implements:
//! - GET /answers — List all answers (public)
//! - GET /answers/{id} — Fetch one answer (public)
//! - GET /questions/{question_id}/answers — List a question's answers (public)
//! - POST /questions/{question_id}/answers — Answer a question (bearer)

use askforge_auth::AuthContext;
use askforge_common::{Error, JsonBody, Result};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::middleware::ForumState;
use crate::api::responses::{Created, CreatedId, Fetched};
use crate::domain::entities::Answer;
use crate::domain::validation::{validate_answer, AnswerPayload};

/// GET /answers — List all answers
pub async fn list_answers(State(state): State<ForumState>) -> Result<Json<Fetched<Vec<Answer>>>> {
    let answers = state.repos.answers.list().await?;

    Ok(Json(Fetched {
        message: "Answers fetched successfully",
        data: answers,
    }))
}

/// GET /answers/{id} — Fetch one answer
pub async fn get_answer(
    State(state): State<ForumState>,
    Path(id): Path<i64>,
) -> Result<Json<Fetched<Answer>>> {
    let answer = state
        .repos
        .answers
        .find(id)
        .await?
        .ok_or_else(|| Error::NotFound("Answer not found".to_string()))?;

    Ok(Json(Fetched {
        message: "Answer fetched successfully",
        data: answer,
    }))
}

/// GET /questions/{question_id}/answers — List answers for a question
pub async fn list_question_answers(
    State(state): State<ForumState>,
    Path(question_id): Path<i64>,
) -> Result<Json<Fetched<Vec<Answer>>>> {
    let answers = state.repos.answers.list_by_question(question_id).await?;

    Ok(Json(Fetched {
        message: "Answers fetched successfully",
        data: answers,
    }))
}

/// POST /questions/{question_id}/answers — Answer a question as the
/// authenticated user
pub async fn answer_question(
    context: AuthContext,
    State(state): State<ForumState>,
    Path(question_id): Path<i64>,
    JsonBody(payload): JsonBody<AnswerPayload>,
) -> Result<(StatusCode, Json<Created>)> {
    let data = validate_answer(&payload)?;

    let id = state
        .repos
        .answers
        .create(&data.description, context.user_id, question_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(Created {
            message: "Answer created successfully",
            data: CreatedId { id },
        }),
    ))
}
