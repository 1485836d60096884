//! HTTP request handlers for the chat API.

pub mod chat;
pub mod data;
pub mod health;
pub mod stats;

use chrono::{DateTime, Duration, Utc};

/// Cutoff for the "active session" window reported by /health and /stats:
/// sessions created or appended to within the last hour.
pub(crate) fn active_since() -> DateTime<Utc> {
    Utc::now() - Duration::hours(1)
}
