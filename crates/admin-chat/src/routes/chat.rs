//! Chat endpoint.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ChatError, Result};
use crate::state::AppState;

/// An operator message.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Message text. A missing field is treated like an empty one.
    #[serde(default)]
    pub message: String,
}

/// The assistant's reply.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// Reply text with tool results spliced in.
    pub message: String,
    /// When the reply was composed (RFC 3339).
    pub timestamp: String,
}

/// Handle an operator chat message.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>> {
    if req.message.is_empty() {
        return Err(ChatError::MissingMessage);
    }

    info!(chars = req.message.len(), "Handling chat message");

    let reply = state.assistant.handle_message(&req.message).await?;

    Ok(Json(ChatResponse {
        message: reply,
        timestamp: Utc::now().to_rfc3339(),
    }))
}
