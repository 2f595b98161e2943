//! HTTP API for the forum domain

pub mod handlers;
pub mod middleware;
pub mod responses;
pub mod routes;

pub use middleware::ForumState;
pub use routes::routes;
