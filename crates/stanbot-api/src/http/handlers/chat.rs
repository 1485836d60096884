//! Chat endpoint.
//!
//! POST /chat - run one message through the conversation pipeline and
//! return the reply with its session id, sentiment, and context summary.

use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use stanbot_types::chat::Sentiment;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user message. A missing field reads as empty and is rejected
    /// the same way an empty string is.
    #[serde(default)]
    pub message: String,
    /// Existing session id to continue; absent or empty starts a new one.
    pub session_id: Option<String>,
}

/// Response body for the chat endpoint.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub session_id: String,
    pub sentiment: Sentiment,
    pub context: String,
}

/// POST /chat - handle one chat message.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let outcome = state
        .conversation
        .handle(&body.message, body.session_id.as_deref())
        .await?;

    Ok(Json(ChatResponse {
        response: outcome.reply,
        session_id: outcome.session_id,
        sentiment: outcome.sentiment,
        context: outcome.context,
    }))
}
