//! Error types and the centralized error response formatter
//!
//! Every stage of the request pipeline signals failure with [`Error`].
//! One terminal middleware ([`format_errors`]) turns any
//! failed response into the uniform JSON envelope and logs it with request
//! context. Handlers never write error responses from their own call sites.

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::config::Environment;

/// Common result type
pub type Result<T> = std::result::Result<T, Error>;

/// Message substituted for 500-class errors in production mode
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Common error type for the Askforge application
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unexpected error: {0}")]
    Unexpected(#[from] anyhow::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Malformed, missing, or invalid request fields
    #[error("{0}")]
    Validation(String),

    /// Missing/invalid/expired token, or bad credentials
    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Internal(String),
}

impl Error {
    /// Get the appropriate HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::Authentication(_) => StatusCode::UNAUTHORIZED,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::Unexpected(_) | Error::Database(_) | Error::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn into_parts(self) -> ErrorParts {
        ErrorParts {
            status: self.status_code(),
            detail: format!("{:?}", self),
            message: self.to_string(),
            fields: Vec::new(),
        }
    }
}

/// A field-level failure carried in the `errors` list of the envelope
#[derive(Debug, Clone, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

/// The parts of a failed response, stashed in the response extensions for
/// [`format_errors`] to consume.
#[derive(Debug, Clone)]
pub struct ErrorParts {
    pub status: StatusCode,
    pub message: String,
    /// Diagnostic detail: debug representation including error sources
    pub detail: String,
    pub fields: Vec<FieldViolation>,
}

/// Authenticated user id, inserted into the response extensions by the
/// auth gate so the formatter can attribute failures to a user.
#[derive(Debug, Clone, Copy)]
pub struct RequestUser(pub i64);

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let parts = self.into_parts();

        // Minimal fallback body; when the formatter layer is installed it
        // rewrites this with the request-scoped fields.
        let body = Json(json!({
            "status": "error",
            "statusCode": parts.status.as_u16(),
            "message": parts.message,
            "requestId": "unknown",
        }));

        let mut response = (parts.status, body).into_response();
        response.extensions_mut().insert(parts);
        response
    }
}

fn envelope(parts: &ErrorParts, request_id: &str, environment: Environment) -> serde_json::Value {
    let sanitize = environment.is_production() && parts.status.is_server_error();
    let message = if sanitize {
        INTERNAL_ERROR_MESSAGE
    } else {
        parts.message.as_str()
    };

    let mut body = json!({
        "status": "error",
        "statusCode": parts.status.as_u16(),
        "message": message,
        "requestId": request_id,
    });

    if !parts.fields.is_empty() {
        body["errors"] = json!(parts.fields);
    }
    if !environment.is_production() {
        body["stack"] = json!(parts.detail);
    }

    body
}

/// Centralized error formatter.
///
/// Installed once as the outermost layer in the composition root. Any
/// response carrying [`ErrorParts`] is rewritten into the uniform envelope
/// `{status, statusCode, message, requestId, [errors], [stack]}` and logged
/// with full request context, in every deployment mode. Successful
/// responses pass through untouched.
pub async fn format_errors(
    State(environment): State<Environment>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let mut response = next.run(request).await;

    let Some(parts) = response.extensions_mut().remove::<ErrorParts>() else {
        return response;
    };
    let user_id = response.extensions().get::<RequestUser>().map(|user| user.0);

    tracing::error!(
        %method,
        %path,
        status = parts.status.as_u16(),
        message = %parts.message,
        detail = %parts.detail,
        request_id = %request_id,
        user_id,
        "Request failed"
    );

    let body = envelope(&parts, &request_id, environment);
    (parts.status, Json(body)).into_response()
}
