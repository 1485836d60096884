//! Application error type mapping to HTTP status codes and the flat
//! `{"error": ...}` wire shape.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use stanbot_types::error::{ChatError, RepositoryError};

/// Application-level error that maps to HTTP responses.
///
/// The empty-message client error carries its wire string; storage and
/// internal failures are logged in full and answered with a generic
/// message so no internal detail reaches the caller.
#[derive(Debug)]
pub enum AppError {
    Chat(ChatError),
    Repository(RepositoryError),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl From<RepositoryError> for AppError {
    fn from(e: RepositoryError) -> Self {
        AppError::Repository(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Chat(ChatError::EmptyMessage) => {
                (StatusCode::BAD_REQUEST, "Empty message")
            }
            AppError::Chat(ChatError::Storage(e)) => {
                tracing::error!(error = %e, "chat pipeline storage failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            AppError::Repository(e) => {
                tracing::error!(error = %e, "session store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
