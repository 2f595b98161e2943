//! Forum domain: users, questions, answers

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Answer, PublicUser, Question, User};
pub use domain::validation::{
    validate_answer, validate_login, validate_question, validate_register, AnswerPayload,
    LoginPayload, QuestionPayload, RegisterPayload,
};

// Re-export repository types
pub use repository::{AnswerRepository, ForumRepositories, QuestionRepository, UserRepository};

// Re-export API types
pub use api::routes;
pub use api::ForumState;

// Re-export auth types from askforge-auth for convenience
pub use askforge_auth::{AuthConfig, AuthContext};
