//! Repository implementations for the forum domain
//!
//! Handlers never touch the store directly; every query below is a
//! parameterized statement issued through the shared pool.

pub mod answers;
pub mod questions;
pub mod users;

use sqlx::PgPool;

pub use answers::AnswerRepository;
pub use questions::QuestionRepository;
pub use users::UserRepository;

/// Combined repository access for the forum domain
#[derive(Clone)]
pub struct ForumRepositories {
    pub users: UserRepository,
    pub questions: QuestionRepository,
    pub answers: AnswerRepository,
}

impl ForumRepositories {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            questions: QuestionRepository::new(pool.clone()),
            answers: AnswerRepository::new(pool),
        }
    }
}
