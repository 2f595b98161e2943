//! Validation rules for incoming request payloads
//!
//! Pure functions: no I/O, deterministic, first failing rule wins. Payload
//! fields deserialize as `Option<String>` so missing fields are reported by
//! these rules rather than by serde. Each validator returns the parsed,
//! owned fields so handlers work with checked values only.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use askforge_common::Error;

lazy_static! {
    /// First/last name: alphabetic characters only
    static ref NAME_REGEX: Regex = Regex::new(r"^[A-Za-z]+$").unwrap();

    /// `local@domain.tld`, no whitespace on either side of the `@`
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Minimum password length
const MIN_PASSWORD_LEN: usize = 6;

const PASSWORD_RULE: &str =
    "Password must be at least 6 characters and contain at least one letter and one number";

/// Registration payload as received on the wire
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPayload {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub confirm_password: Option<String>,
}

/// Checked registration data
#[derive(Debug)]
pub struct RegisterData {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// Login payload as received on the wire
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Checked login data
#[derive(Debug)]
pub struct LoginData {
    pub email: String,
    pub password: String,
}

/// Question payload as received on the wire
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Checked question data
#[derive(Debug)]
pub struct QuestionData {
    pub title: String,
    pub description: String,
}

/// Answer payload as received on the wire
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerPayload {
    pub description: Option<String>,
}

/// Checked answer data
#[derive(Debug)]
pub struct AnswerData {
    pub description: String,
}

/// An empty string counts as a missing field
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// At least six characters, with at least one letter and one digit.
/// The `regex` crate has no lookahead, so the rule is three scans.
fn strong_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LEN
        && password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

fn invalid(message: &str) -> Error {
    Error::Validation(message.to_string())
}

pub fn validate_register(payload: &RegisterPayload) -> Result<RegisterData, Error> {
    let (Some(first_name), Some(last_name), Some(email), Some(password), Some(confirm_password)) = (
        present(&payload.first_name),
        present(&payload.last_name),
        present(&payload.email),
        present(&payload.password),
        present(&payload.confirm_password),
    ) else {
        return Err(invalid("All fields are required"));
    };

    if !NAME_REGEX.is_match(first_name) || !NAME_REGEX.is_match(last_name) {
        return Err(invalid("First and last name must contain only letters"));
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(invalid("Invalid email format"));
    }
    if password != confirm_password {
        return Err(invalid("Passwords do not match"));
    }
    if !strong_password(password) {
        return Err(invalid(PASSWORD_RULE));
    }

    Ok(RegisterData {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

pub fn validate_login(payload: &LoginPayload) -> Result<LoginData, Error> {
    let (Some(email), Some(password)) = (present(&payload.email), present(&payload.password))
    else {
        return Err(invalid("Email and password are required"));
    };

    if !EMAIL_REGEX.is_match(email) {
        return Err(invalid("Invalid email format"));
    }
    if !strong_password(password) {
        return Err(invalid(PASSWORD_RULE));
    }

    Ok(LoginData {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

pub fn validate_question(payload: &QuestionPayload) -> Result<QuestionData, Error> {
    let Some(title) = present(&payload.title) else {
        return Err(invalid("Title is required"));
    };
    let Some(description) = present(&payload.description) else {
        return Err(invalid("Description is required"));
    };

    Ok(QuestionData {
        title: title.to_owned(),
        description: description.to_owned(),
    })
}

pub fn validate_answer(payload: &AnswerPayload) -> Result<AnswerData, Error> {
    let Some(description) = present(&payload.description) else {
        return Err(invalid("Description is required"));
    };

    Ok(AnswerData {
        description: description.to_owned(),
    })
}
