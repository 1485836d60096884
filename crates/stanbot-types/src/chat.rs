//! Sentiment and exchange types for chat conversations.
//!
//! An `Exchange` is one user-message/bot-reply turn with its derived
//! sentiment and append timestamp. Sessions hold at most
//! [`SESSION_CAPACITY`] exchanges; older turns are evicted oldest-first.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Maximum number of exchanges retained per session.
///
/// Appends past this bound evict the oldest exchanges first, so a session
/// always holds the most recent `SESSION_CAPACITY` turns.
pub const SESSION_CAPACITY: usize = 10;

/// Sentiment estimated from a user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
            Sentiment::Neutral => write!(f, "neutral"),
        }
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            other => Err(format!("invalid sentiment: '{other}'")),
        }
    }
}

impl Default for Sentiment {
    fn default() -> Self {
        Sentiment::Neutral
    }
}

/// One user/bot turn within a session.
///
/// Immutable once created; never mutated after append. The serde renames
/// pin the wire keys (`user`, `bot`, `timestamp`, `sentiment`) used by the
/// `/data` diagnostic dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exchange {
    /// Raw (trimmed) inbound message; non-empty by construction.
    #[serde(rename = "user")]
    pub user_text: String,
    /// The generated reply.
    #[serde(rename = "bot")]
    pub bot_text: String,
    /// Assigned at append time.
    #[serde(rename = "timestamp")]
    pub created_at: DateTime<Utc>,
    /// Computed from `user_text`.
    pub sentiment: Sentiment,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_roundtrip() {
        for sentiment in [
            Sentiment::Positive,
            Sentiment::Negative,
            Sentiment::Neutral,
        ] {
            let s = sentiment.to_string();
            let parsed: Sentiment = s.parse().unwrap();
            assert_eq!(sentiment, parsed);
        }
    }

    #[test]
    fn test_sentiment_serde() {
        let sentiment = Sentiment::Positive;
        let json = serde_json::to_string(&sentiment).unwrap();
        assert_eq!(json, "\"positive\"");
        let parsed: Sentiment = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Sentiment::Positive);
    }

    #[test]
    fn test_sentiment_default() {
        assert_eq!(Sentiment::default(), Sentiment::Neutral);
    }

    #[test]
    fn test_sentiment_parse_rejects_unknown() {
        assert!("joyful".parse::<Sentiment>().is_err());
    }

    #[test]
    fn test_exchange_wire_keys() {
        let exchange = Exchange {
            user_text: "hello".to_string(),
            bot_text: "Hi there!".to_string(),
            created_at: Utc::now(),
            sentiment: Sentiment::Neutral,
        };
        let json = serde_json::to_value(&exchange).unwrap();
        assert_eq!(json["user"], "hello");
        assert_eq!(json["bot"], "Hi there!");
        assert!(json["timestamp"].is_string());
        assert_eq!(json["sentiment"], "neutral");
        // Rust field names must not leak onto the wire.
        assert!(json.get("user_text").is_none());
        assert!(json.get("created_at").is_none());
    }
}
