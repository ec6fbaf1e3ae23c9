// ============================================================
// Layer 3 — SentimentExample Domain Type
// ============================================================
// One labelled record: a sentiment label and the text it
// describes. By the time a SentimentExample exists both
// fields are normalised and lowercase, so the label check
// below is a plain string comparison.
//
// Example:
//   sentiment: "positive"
//   text:      "i absolutely loved this!"
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

/// The label value that maps to the positive class.
/// Every other label belongs to the negative class.
pub const POSITIVE_LABEL: &str = "positive";

/// A normalised (sentiment, text) pair used for training or evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SentimentExample {
    /// Lowercase, trimmed label (e.g. "positive", "negative")
    pub sentiment: String,

    /// Lowercase text with escapes resolved and whitespace collapsed
    pub text: String,
}

impl SentimentExample {
    /// Create a new SentimentExample.
    /// Callers are expected to pass already-normalised values;
    /// the loader is the usual producer.
    pub fn new(sentiment: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            sentiment: sentiment.into(),
            text:      text.into(),
        }
    }

    /// True iff this example belongs to the positive class.
    pub fn is_positive(&self) -> bool {
        self.sentiment == POSITIVE_LABEL
    }

    /// True if either field is empty or whitespace only.
    pub fn has_blank_field(&self) -> bool {
        self.sentiment.trim().is_empty() || self.text.trim().is_empty()
    }
}
