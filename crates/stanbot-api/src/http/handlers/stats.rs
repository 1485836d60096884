//! Session statistics endpoint.
//!
//! GET /stats - aggregate storage counters.

use axum::Json;
use axum::extract::State;
use serde_json::json;

use stanbot_core::chat::repository::SessionRepository;

use crate::http::error::AppError;
use crate::http::handlers::active_since;
use crate::state::AppState;

/// GET /stats - session statistics.
pub async fn stats(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let sessions = state.conversation.sessions();

    Ok(Json(json!({
        "total_sessions": sessions.count_sessions().await?,
        "active_sessions": sessions.count_active_sessions(active_since()).await?,
        "total_messages": sessions.count_messages().await?,
        "storage_type": sessions.storage_type(),
    })))
}
