//! Route definitions for the forum domain API

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use askforge_auth::require_auth;

use super::handlers::{answers, questions, users};
use super::middleware::ForumState;

/// Create all forum domain routes.
///
/// The bearer gate is applied per-method with `route_layer`: reads on a
/// path stay public while the mutating method on the same path requires
/// authentication.
pub fn routes(state: ForumState) -> Router {
    Router::new()
        .route("/register", post(users::register))
        .route("/login", post(users::login))
        .route(
            "/questions",
            post(questions::create_question)
                .route_layer(from_fn_with_state(state.clone(), require_auth))
                .get(questions::list_questions),
        )
        .route("/questions/{question_id}", get(questions::get_question))
        .route(
            "/questions/{question_id}/answers",
            post(answers::answer_question)
                .route_layer(from_fn_with_state(state.clone(), require_auth))
                .get(answers::list_question_answers),
        )
        .route("/answers", get(answers::list_answers))
        .route("/answers/{id}", get(answers::get_answer))
        .with_state(state)
}
