//! Error types for the admin chat interface.

use assistant_core::AssistantError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur in the admin chat interface.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The request carried no message text.
    #[error("Message is required")]
    MissingMessage,

    /// Assistant failure.
    #[error("Assistant error: {0}")]
    Assistant(#[from] AssistantError),
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ChatError::MissingMessage => (StatusCode::BAD_REQUEST, self.to_string()),
            ChatError::Assistant(err) => {
                tracing::error!("Assistant error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for chat operations.
pub type Result<T> = std::result::Result<T, ChatError>;
