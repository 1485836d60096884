//! In-memory session store backed by `DashMap`.
//!
//! One entry per session id, holding the bounded exchange list and a
//! `last_active` timestamp. Appends mutate under the `DashMap` entry
//! guard, which serializes concurrent appends to the same session; all
//! reads clone out of the map, so no guard is ever held across an
//! `.await`.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tracing::debug;
use uuid::Uuid;

use stanbot_core::chat::repository::SessionRepository;
use stanbot_types::chat::{Exchange, SESSION_CAPACITY};
use stanbot_types::error::RepositoryError;

/// One session's stored state.
#[derive(Debug, Clone)]
struct SessionEntry {
    exchanges: Vec<Exchange>,
    /// Creation or most recent append; reads do not refresh it.
    last_active: DateTime<Utc>,
}

impl SessionEntry {
    fn new() -> Self {
        Self {
            exchanges: Vec::new(),
            last_active: Utc::now(),
        }
    }
}

/// Process-lifetime implementation of `SessionRepository`.
///
/// Cloning produces a shared view of the same underlying data (backed by
/// `Arc`). Sessions are created lazily on first reference and never
/// destroyed; everything is lost on restart.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<DashMap<String, SessionEntry>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionRepository for InMemorySessionStore {
    async fn get_or_create(&self, session_id: Option<&str>) -> Result<String, RepositoryError> {
        let id = match session_id {
            Some(id) if !id.trim().is_empty() => id.to_string(),
            _ => Uuid::now_v7().to_string(),
        };
        self.sessions
            .entry(id.clone())
            .or_insert_with(SessionEntry::new);
        Ok(id)
    }

    async fn append(
        &self,
        session_id: &str,
        exchange: Exchange,
    ) -> Result<usize, RepositoryError> {
        let mut entry = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(SessionEntry::new);
        entry.exchanges.push(exchange);
        if entry.exchanges.len() > SESSION_CAPACITY {
            let excess = entry.exchanges.len() - SESSION_CAPACITY;
            entry.exchanges.drain(..excess);
            debug!(session_id, evicted = excess, "session history trimmed");
        }
        entry.last_active = Utc::now();
        Ok(entry.exchanges.len())
    }

    async fn history(&self, session_id: &str) -> Result<Vec<Exchange>, RepositoryError> {
        Ok(self
            .sessions
            .get(session_id)
            .map(|entry| entry.exchanges.clone())
            .unwrap_or_default())
    }

    async fn all_sessions(
        &self,
    ) -> Result<BTreeMap<String, Vec<Exchange>>, RepositoryError> {
        Ok(self
            .sessions
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().exchanges.clone()))
            .collect())
    }

    async fn count_sessions(&self) -> Result<u64, RepositoryError> {
        Ok(self.sessions.len() as u64)
    }

    async fn count_messages(&self) -> Result<u64, RepositoryError> {
        Ok(self
            .sessions
            .iter()
            .map(|entry| entry.exchanges.len() as u64)
            .sum())
    }

    async fn count_active_sessions(
        &self,
        since: DateTime<Utc>,
    ) -> Result<u64, RepositoryError> {
        Ok(self
            .sessions
            .iter()
            .filter(|entry| entry.last_active >= since)
            .count() as u64)
    }

    fn storage_type(&self) -> &'static str {
        "In-Memory"
    }
}
