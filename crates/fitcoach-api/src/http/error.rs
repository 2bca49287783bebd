//! Application error type mapping to HTTP status codes.
//!
//! Failure bodies always have the shape
//! `{ "success": false, "error": "...", "message": "..." }`: `error` is
//! machine-readable, `message` is safe to show a user. Provider error text
//! is logged server-side and never returned.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use fitcoach_types::error::{ChatError, IndexError};

/// Shown to users when the model call fails.
pub const COMPLETION_FAILED_MESSAGE: &str =
    "I'm having some technical difficulties right now. Please try again in a moment.";

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    Chat(ChatError),
    Index(IndexError),
    /// Malformed body or an out-of-range field value.
    Validation(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl From<IndexError> for AppError {
    fn from(e: IndexError) -> Self {
        AppError::Index(e)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::Chat(e @ ChatError::MissingField(_)) => (
                StatusCode::BAD_REQUEST,
                e.to_string(),
                "Please include both a message and a userId.".to_string(),
            ),
            AppError::Chat(ChatError::Completion(e)) => {
                tracing::error!(error = %e, "Chat completion failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate response".to_string(),
                    COMPLETION_FAILED_MESSAGE.to_string(),
                )
            }
            AppError::Index(e @ IndexError::MissingField(_)) => (
                StatusCode::BAD_REQUEST,
                e.to_string(),
                "Some required fields are missing.".to_string(),
            ),
            AppError::Index(e) => {
                tracing::error!(error = %e, "Indexing failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to save entry".to_string(),
                    "We couldn't save that entry right now. Please try again later.".to_string(),
                )
            }
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                msg.clone(),
                "The request could not be understood.".to_string(),
            ),
        };

        let body = json!({
            "success": false,
            "error": error,
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}
