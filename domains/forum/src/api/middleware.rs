//! Forum domain state and auth gate integration

use askforge_auth::AuthConfig;
use axum::extract::FromRef;

use crate::repository::ForumRepositories;

/// Application state for the forum domain
#[derive(Clone)]
pub struct ForumState {
    pub repos: ForumRepositories,
    pub auth: AuthConfig,
}

impl FromRef<ForumState> for AuthConfig {
    fn from_ref(state: &ForumState) -> Self {
        state.auth.clone()
    }
}
