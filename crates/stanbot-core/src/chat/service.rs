//! Conversation service orchestrating one chat turn.
//!
//! Validates the inbound message, resolves the session, runs the two
//! classifiers, appends the exchange, and composes the outcome. This is
//! the sole write path into the session store.

use chrono::Utc;
use stanbot_types::chat::{Exchange, Sentiment};
use stanbot_types::error::ChatError;
use tracing::debug;

use crate::chat::intent::{IntentMatcher, ReplySelector};
use crate::chat::repository::SessionRepository;
use crate::chat::sentiment::SentimentClassifier;

/// Result of one handled message.
#[derive(Debug, Clone)]
pub struct ChatOutcome {
    pub reply: String,
    pub session_id: String,
    pub sentiment: Sentiment,
    /// Human-readable summary of the session's exchange count.
    pub context: String,
}

/// Orchestrates sentiment classification, intent matching, and session
/// bookkeeping for one message.
///
/// Generic over `SessionRepository` and `ReplySelector` to maintain clean
/// architecture (stanbot-core never depends on stanbot-infra) and to keep
/// reply selection deterministic under test.
pub struct ConversationService<S: SessionRepository, R: ReplySelector> {
    sessions: S,
    classifier: SentimentClassifier,
    matcher: IntentMatcher<R>,
}

impl<S: SessionRepository, R: ReplySelector> ConversationService<S, R> {
    pub fn new(sessions: S, matcher: IntentMatcher<R>) -> Self {
        Self {
            sessions,
            classifier: SentimentClassifier::new(),
            matcher,
        }
    }

    /// Access the session repository (used by the stats endpoints).
    pub fn sessions(&self) -> &S {
        &self.sessions
    }

    /// Handle one inbound message.
    ///
    /// Empty or whitespace-only messages fail with
    /// [`ChatError::EmptyMessage`] before the store is touched. Otherwise
    /// the exchange is appended atomically and the outcome reports the
    /// post-append exchange count.
    pub async fn handle(
        &self,
        message: &str,
        session_id: Option<&str>,
    ) -> Result<ChatOutcome, ChatError> {
        let message = message.trim();
        if message.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        let session_id = self.sessions.get_or_create(session_id).await?;
        let sentiment = self.classifier.classify(message);
        let history = self.sessions.history(&session_id).await?;
        let reply = self.matcher.respond(message, &history);

        let exchange = Exchange {
            user_text: message.to_string(),
            bot_text: reply.clone(),
            created_at: Utc::now(),
            sentiment,
        };
        let length = self.sessions.append(&session_id, exchange).await?;

        debug!(
            session_id = %session_id,
            sentiment = %sentiment,
            exchanges = length,
            "message handled"
        );

        Ok(ChatOutcome {
            reply,
            session_id,
            sentiment,
            context: format!("Conversation has {length} exchanges"),
        })
    }
}
