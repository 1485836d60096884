//! Health check endpoint.
//!
//! GET /health - liveness plus storage counters.

use axum::Json;
use axum::extract::State;
use chrono::Utc;
use serde_json::json;

use stanbot_core::chat::repository::SessionRepository;

use crate::http::error::AppError;
use crate::http::handlers::active_since;
use crate::state::AppState;

/// GET /health - health check.
///
/// `model_loaded` is always true: there is no model to load, the reply
/// tables are compiled in.
pub async fn health(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let sessions = state.conversation.sessions();

    Ok(Json(json!({
        "status": "healthy",
        "model_loaded": true,
        "storage_type": sessions.storage_type(),
        "active_sessions": sessions.count_active_sessions(active_since()).await?,
        "total_sessions": sessions.count_sessions().await?,
        "timestamp": Utc::now(),
    })))
}
