//! Shared utilities, configuration, and error handling for Askforge
//!
//! This crate provides common functionality used across the Askforge application:
//! - Configuration management following 12-factor principles
//! - Error types and the centralized error response formatter
//! - Password hashing utilities
//! - Custom extractors

pub mod config;
pub mod crypto;
pub mod error;
pub mod extractors;

pub use config::{Config, Environment};
pub use crypto::{hash_password, verify_password};
pub use error::{format_errors, Error, ErrorParts, FieldViolation, RequestUser, Result};
pub use extractors::JsonBody;
