//! Axum router configuration with middleware.
//!
//! Flat top-level routes matching the original deployment's paths.
//! Middleware: CORS (permissive unless an origin allow-list is given) and
//! per-request tracing. The /data diagnostic dump is mounted only when
//! data exposure is enabled.

use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
///
/// An empty `cors_origins` list allows any origin; otherwise only the
/// listed origins are allowed. Fails if an origin is not a valid header
/// value.
pub fn build_router(state: AppState, cors_origins: &[String]) -> anyhow::Result<Router> {
    let cors = if cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins = cors_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .map_err(|_| anyhow::anyhow!("invalid CORS origin: '{origin}'"))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let mut router = Router::new()
        .route("/", get(api_info))
        .route("/chat", post(handlers::chat::chat))
        .route("/health", get(handlers::health::health))
        .route("/stats", get(handlers::stats::stats));

    if state.expose_data {
        router = router.route("/data", get(handlers::data::view_data));
    }

    Ok(router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// GET / - API info endpoint.
async fn api_info() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "STAN Chatbot Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/chat": "POST - Send message to chatbot",
            "/health": "GET - Health check",
            "/stats": "GET - Get statistics",
            "/data": "GET - View stored data"
        }
    }))
}
