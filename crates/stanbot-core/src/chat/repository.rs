//! SessionRepository trait definition.
//!
//! The port through which the conversation service reaches session
//! storage. Implementations live in stanbot-infra (e.g.,
//! `InMemorySessionStore`). Uses native async fn in traits (RPITIT,
//! Rust 2024 edition).
//!
//! Operations are total over their input domain: an unseen `session_id`
//! reads as an empty session, never an error. The `Result` returns exist
//! for backends that can actually fail (a persistent store slotting in
//! behind the same trait).

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use stanbot_types::chat::Exchange;
use stanbot_types::error::RepositoryError;

/// Repository trait for bounded per-session exchange histories.
pub trait SessionRepository: Send + Sync {
    /// Resolve a session id, creating an empty session if unseen.
    ///
    /// An absent or empty id yields a freshly generated unique id with an
    /// empty session registered under it; a non-empty id is returned
    /// unchanged.
    fn get_or_create(
        &self,
        session_id: Option<&str>,
    ) -> impl std::future::Future<Output = Result<String, RepositoryError>> + Send;

    /// Append an exchange to a session, evicting oldest entries beyond
    /// capacity. Returns the post-append length (capped at capacity).
    fn append(
        &self,
        session_id: &str,
        exchange: Exchange,
    ) -> impl std::future::Future<Output = Result<usize, RepositoryError>> + Send;

    /// Snapshot of a session's exchanges, oldest first (empty if unseen).
    ///
    /// The returned sequence never observes later mutations.
    fn history(
        &self,
        session_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Exchange>, RepositoryError>> + Send;

    /// Full dump of every session, for diagnostics. Sorted by session id
    /// so output is deterministic.
    fn all_sessions(
        &self,
    ) -> impl std::future::Future<Output = Result<BTreeMap<String, Vec<Exchange>>, RepositoryError>> + Send;

    /// Count all sessions.
    fn count_sessions(
        &self,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// Count stored exchanges across all sessions (post-eviction).
    fn count_messages(
        &self,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// Count sessions created or appended to at or after `since`.
    fn count_active_sessions(
        &self,
        since: DateTime<Utc>,
    ) -> impl std::future::Future<Output = Result<u64, RepositoryError>> + Send;

    /// Human-readable backend label reported by the health and stats
    /// endpoints (e.g., "In-Memory").
    fn storage_type(&self) -> &'static str;
}
