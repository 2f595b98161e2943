//! API handlers for the forum domain

pub mod answers;
pub mod questions;
pub mod users;
