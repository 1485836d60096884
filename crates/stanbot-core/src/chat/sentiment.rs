//! Keyword-counting sentiment heuristic.
//!
//! Counts occurrences of fixed positive and negative vocabularies in the
//! lower-cased input and compares the tallies. Matching is by substring
//! containment, not tokenization, so a vocabulary word inside a larger word
//! still counts ("badminton" reads as negative). Each vocabulary word
//! contributes at most 1 no matter how often it repeats.

use std::cmp::Ordering;

use stanbot_types::chat::Sentiment;

/// Words that pull a message toward `positive`.
pub const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "happy",
    "love",
    "wonderful",
    "amazing",
];

/// Words that pull a message toward `negative`.
pub const NEGATIVE_WORDS: &[&str] = &[
    "bad",
    "terrible",
    "sad",
    "hate",
    "awful",
    "horrible",
    "angry",
];

/// Maps free text to one of {positive, negative, neutral}.
///
/// Pure function of the case-folded input; total over any string,
/// including the empty string (neutral).
#[derive(Debug, Clone, Default)]
pub struct SentimentClassifier;

impl SentimentClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, text: &str) -> Sentiment {
        let lower = text.to_lowercase();

        let positive = POSITIVE_WORDS
            .iter()
            .filter(|word| lower.contains(*word))
            .count();
        let negative = NEGATIVE_WORDS
            .iter()
            .filter(|word| lower.contains(*word))
            .count();

        match positive.cmp(&negative) {
            Ordering::Greater => Sentiment::Positive,
            Ordering::Less => Sentiment::Negative,
            Ordering::Equal => Sentiment::Neutral,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_outweighs_negative() {
        let classifier = SentimentClassifier::new();
        assert_eq!(
            classifier.classify("I love this, it's wonderful"),
            Sentiment::Positive
        );
    }

    #[test]
    fn negative_outweighs_positive() {
        let classifier = SentimentClassifier::new();
        assert_eq!(
            classifier.classify("This is terrible and awful"),
            Sentiment::Negative
        );
    }

    #[test]
    fn no_keywords_is_neutral() {
        let classifier = SentimentClassifier::new();
        assert_eq!(classifier.classify("Hello there"), Sentiment::Neutral);
    }

    #[test]
    fn empty_input_is_neutral() {
        let classifier = SentimentClassifier::new();
        assert_eq!(classifier.classify(""), Sentiment::Neutral);
    }

    #[test]
    fn equal_counts_are_neutral() {
        let classifier = SentimentClassifier::new();
        assert_eq!(
            classifier.classify("good but also bad"),
            Sentiment::Neutral
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        let classifier = SentimentClassifier::new();
        assert_eq!(classifier.classify("GREAT stuff"), Sentiment::Positive);
    }

    #[test]
    fn substring_containment_counts() {
        // "bad" inside "badminton" still counts.
        let classifier = SentimentClassifier::new();
        assert_eq!(
            classifier.classify("badminton is a sport"),
            Sentiment::Negative
        );
    }

    #[test]
    fn repeated_word_counts_once() {
        // "love love love" is one positive word, not three; a single
        // negative word ties it back to neutral.
        let classifier = SentimentClassifier::new();
        assert_eq!(
            classifier.classify("love love love but sad"),
            Sentiment::Neutral
        );
    }
}
