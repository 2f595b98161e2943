//! Askforge application composition root
//!
//! Composes the forum router, shared infrastructure routes, and the
//! centralized error formatter into a single application.

use askforge_auth::AuthConfig;
use askforge_common::{format_errors, Config};
use askforge_forum::{ForumRepositories, ForumState};
use axum::{middleware, Router};
use sqlx::PgPool;

/// Create the main application router with all routes and middleware
pub fn create_app(config: &Config, pool: PgPool) -> Router {
    let state = ForumState {
        repos: ForumRepositories::new(pool),
        auth: AuthConfig {
            jwt_secret: config.jwt_secret.clone(),
        },
    };

    // The formatter is the outermost layer so every failure terminates
    // in one place.
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .merge(askforge_forum::routes(state))
        .layer(middleware::from_fn_with_state(
            config.environment,
            format_errors,
        ))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
