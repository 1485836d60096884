//! Diagnostic dump endpoint.
//!
//! GET /data - full conversation contents. The route is mounted only when
//! data exposure is enabled (debug builds, or `--expose-data`): the dump
//! carries every stored message with no access control.

use axum::Json;
use axum::extract::State;
use serde_json::json;

use stanbot_core::chat::repository::SessionRepository;

use crate::http::error::AppError;
use crate::state::AppState;

/// GET /data - dump all stored conversation data.
pub async fn view_data(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let sessions = state.conversation.sessions();
    let all = sessions.all_sessions().await?;

    Ok(Json(json!({
        "storage_type": sessions.storage_type(),
        "total_sessions": all.len(),
        "sessions": all,
        "data_structure": {
            "session_id": "Contains array of conversation exchanges",
            "each_exchange": {
                "user": "User message",
                "bot": "Bot response",
                "timestamp": "When message was sent",
                "sentiment": "Detected sentiment"
            }
        }
    })))
}
