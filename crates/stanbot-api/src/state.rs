//! Application state wiring the conversation service together.
//!
//! The service is generic over the session repository and reply selector
//! traits; AppState pins them to the concrete in-memory store and the
//! production random selector.

use std::sync::Arc;

use stanbot_core::chat::intent::{IntentMatcher, RandomReplySelector};
use stanbot_core::chat::service::ConversationService;
use stanbot_infra::store::InMemorySessionStore;

/// Concrete type alias for the service generics pinned to the infra
/// implementations.
pub type ConcreteConversationService =
    ConversationService<InMemorySessionStore, RandomReplySelector>;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub conversation: Arc<ConcreteConversationService>,
    /// Whether the /data diagnostic route is mounted.
    pub expose_data: bool,
}

impl AppState {
    /// Wire the store and classifiers into a fresh application state.
    ///
    /// The store lives as long as the state; nothing survives a restart.
    pub fn new(expose_data: bool) -> Self {
        let store = InMemorySessionStore::new();
        let conversation = ConversationService::new(store, IntentMatcher::default());
        Self {
            conversation: Arc::new(conversation),
            expose_data,
        }
    }
}
