//! Ordered keyword intent matching and reply selection.
//!
//! Categories are tested in a fixed priority order; the first category whose
//! trigger set intersects the lower-cased input (substring containment)
//! wins, and a reply is drawn from that category's template list. Inputs
//! matching nothing fall back to the default templates. The priority order
//! is a wire-level contract: an input containing both "hello" and "joke"
//! must answer with a greeting.
//!
//! Reply selection is behind the [`ReplySelector`] trait so tests can
//! substitute a deterministic source for the production random draw.

use rand::prelude::IndexedRandom;
use tracing::debug;

use stanbot_types::chat::Exchange;

/// Greeting replies (triggers: hello, hi, hey, greetings).
pub const GREETING_REPLIES: &[&str] = &[
    "Hello! I'm STAN, your AI assistant. How can I help you today?",
    "Hi there! I'm here to assist you. What can I do for you?",
    "Welcome! I'm STAN. What would you like to know?",
];

/// Replies for "how are you".
pub const HOW_ARE_YOU_REPLIES: &[&str] = &[
    "I'm doing great, thank you for asking! How are you?",
    "I'm functioning well and ready to help! How can I assist you?",
];

/// Joke replies (triggers: joke, funny, make me laugh).
pub const JOKE_REPLIES: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything! 😄",
    "Why did the scarecrow win an award? Because he was outstanding in his field! 🌾",
    "What do you call a fake noodle? An impasta! 🍝",
    "Why don't eggs tell jokes? They'd crack each other up! 🥚",
    "What do you call a bear with no teeth? A gummy bear! 🐻",
    "Why did the math book look so sad? Because it had too many problems! 📚",
    "What's the best thing about Switzerland? I don't know, but the flag is a big plus! 🇨🇭",
];

/// Replies describing what the bot can do.
pub const CAPABILITY_REPLIES: &[&str] = &[
    "I can help you with conversations, answer questions, provide assistance with various topics, and even tell jokes!",
    "I'm here to chat, provide information, tell jokes, and help with any questions you might have!",
];

/// Replies for thanks/appreciation.
pub const THANKS_REPLIES: &[&str] = &[
    "You're very welcome! Happy to help!",
    "My pleasure! Is there anything else I can assist you with?",
];

/// Fallback replies when no category matches.
pub const DEFAULT_REPLIES: &[&str] = &[
    "That's interesting! Tell me more about that.",
    "I understand. What would you like to know more about?",
    "Thanks for sharing that with me. How can I help you further?",
    "I see. What else would you like to discuss?",
];

/// One response category: trigger keywords plus candidate replies.
struct Category {
    name: &'static str,
    triggers: &'static [&'static str],
    replies: &'static [&'static str],
}

/// Categories in priority order; first match wins.
const CATEGORIES: &[Category] = &[
    Category {
        name: "greeting",
        triggers: &["hello", "hi", "hey", "greetings"],
        replies: GREETING_REPLIES,
    },
    Category {
        name: "how_are_you",
        triggers: &["how are you"],
        replies: HOW_ARE_YOU_REPLIES,
    },
    Category {
        name: "jokes",
        triggers: &["joke", "funny", "make me laugh"],
        replies: JOKE_REPLIES,
    },
    Category {
        name: "capabilities",
        triggers: &["what can you do", "help me", "capabilities"],
        replies: CAPABILITY_REPLIES,
    },
    Category {
        name: "thanks",
        triggers: &["thank", "thanks", "appreciate"],
        replies: THANKS_REPLIES,
    },
];

/// Picks one reply out of a category's template list.
pub trait ReplySelector: Send + Sync {
    fn pick<'a>(&self, replies: &'a [&'a str]) -> &'a str;
}

/// Production selector: uniform random draw via the thread-local generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomReplySelector;

impl ReplySelector for RandomReplySelector {
    fn pick<'a>(&self, replies: &'a [&'a str]) -> &'a str {
        let mut rng = rand::rng();
        replies.choose(&mut rng).copied().unwrap_or("")
    }
}

/// Maps free text to a response category and selects a reply from it.
#[derive(Debug, Clone)]
pub struct IntentMatcher<R: ReplySelector> {
    selector: R,
}

impl<R: ReplySelector> IntentMatcher<R> {
    pub fn new(selector: R) -> Self {
        Self { selector }
    }

    /// Generate a reply for `text`.
    ///
    /// `history` is accepted for context-aware phrasing but the current
    /// templates do not use it; the exchange count is reported by the
    /// conversation service instead.
    pub fn respond(&self, text: &str, _history: &[Exchange]) -> String {
        let lower = text.to_lowercase();
        let (name, replies) = match CATEGORIES
            .iter()
            .find(|category| category.triggers.iter().any(|t| lower.contains(*t)))
        {
            Some(category) => (category.name, category.replies),
            None => ("default", DEFAULT_REPLIES),
        };
        debug!(category = name, "intent matched");
        self.selector.pick(replies).to_string()
    }
}

impl Default for IntentMatcher<RandomReplySelector> {
    fn default() -> Self {
        Self::new(RandomReplySelector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic selector: always the first template.
    struct FirstReply;

    impl ReplySelector for FirstReply {
        fn pick<'a>(&self, replies: &'a [&'a str]) -> &'a str {
            replies.first().copied().unwrap_or("")
        }
    }

    fn matcher() -> IntentMatcher<FirstReply> {
        IntentMatcher::new(FirstReply)
    }

    #[test]
    fn greeting_matches() {
        let reply = matcher().respond("hello", &[]);
        assert!(GREETING_REPLIES.contains(&reply.as_str()));
    }

    #[test]
    fn how_are_you_matches() {
        let reply = matcher().respond("how are you doing today?", &[]);
        assert!(HOW_ARE_YOU_REPLIES.contains(&reply.as_str()));
    }

    #[test]
    fn joke_matches() {
        let reply = matcher().respond("tell me a joke", &[]);
        assert!(JOKE_REPLIES.contains(&reply.as_str()));
    }

    #[test]
    fn capabilities_matches() {
        let reply = matcher().respond("what can you do?", &[]);
        assert!(CAPABILITY_REPLIES.contains(&reply.as_str()));
    }

    #[test]
    fn thanks_matches() {
        let reply = matcher().respond("I appreciate it", &[]);
        assert!(THANKS_REPLIES.contains(&reply.as_str()));
    }

    #[test]
    fn unmatched_falls_back_to_default() {
        let reply = matcher().respond("tomorrow's forecast", &[]);
        assert!(DEFAULT_REPLIES.contains(&reply.as_str()));
    }

    #[test]
    fn priority_order_greeting_beats_joke() {
        let reply = matcher().respond("hello, tell me a joke", &[]);
        assert!(GREETING_REPLIES.contains(&reply.as_str()));
    }

    #[test]
    fn priority_order_joke_beats_thanks() {
        let reply = matcher().respond("thanks, that joke was fun", &[]);
        assert!(JOKE_REPLIES.contains(&reply.as_str()));
    }

    #[test]
    fn triggers_match_inside_words() {
        // "everything" contains "hi"; substring containment is the
        // contract, so this greets rather than falling back to default.
        let reply = matcher().respond("everything is fine", &[]);
        assert!(GREETING_REPLIES.contains(&reply.as_str()));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let reply = matcher().respond("HELLO", &[]);
        assert!(GREETING_REPLIES.contains(&reply.as_str()));
    }

    #[test]
    fn deterministic_selector_gives_exact_reply() {
        assert_eq!(matcher().respond("hello", &[]), GREETING_REPLIES[0]);
        assert_eq!(matcher().respond("joke", &[]), JOKE_REPLIES[0]);
    }

    #[test]
    fn random_selector_draws_from_category() {
        let matcher = IntentMatcher::default();
        for _ in 0..20 {
            let reply = matcher.respond("tell me a joke", &[]);
            assert!(JOKE_REPLIES.contains(&reply.as_str()));
        }
    }

    #[test]
    fn random_selector_varies_across_draws() {
        let matcher = IntentMatcher::default();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(matcher.respond("joke", &[]));
        }
        assert!(seen.len() > 1, "200 draws over 7 jokes never varied");
    }
}
