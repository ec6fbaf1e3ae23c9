// ============================================================
// Layer 4 — Example Validator
// ============================================================
// Re-checks the "both fields non-empty" invariant right before
// training. Examples can be built by hand and never pass through
// the loader, so the trainer cannot rely on it alone.
//
// The check stops at the first bad example and has no side
// effects, so calling it twice gives the same answer.

use crate::domain::example::SentimentExample;
use crate::error::{Result, SentimentError};

pub struct ExampleValidator;

impl ExampleValidator {
    /// Fail with `SentimentError::Format` on the first example whose
    /// sentiment or text is blank. `collection` names the dataset in
    /// the error message (e.g. "train_examples").
    pub fn validate(examples: &[SentimentExample], collection: &str) -> Result<()> {
        if let Some(position) = examples.iter().position(SentimentExample::has_blank_field) {
            tracing::debug!("{collection}: example {position} has a blank field");
            return Err(SentimentError::Format(format!(
                "Invalid input in {collection}: Missing Sentiment or Text."
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_complete_examples() {
        let examples = vec![
            SentimentExample::new("positive", "great"),
            SentimentExample::new("negative", "awful"),
        ];
        assert!(ExampleValidator::validate(&examples, "train_examples").is_ok());
    }

    #[test]
    fn test_accepts_empty_slice() {
        assert!(ExampleValidator::validate(&[], "test_examples").is_ok());
    }

    #[test]
    fn test_rejects_blank_text_and_names_collection() {
        let examples = vec![
            SentimentExample::new("positive", "fine"),
            SentimentExample::new("negative", "   "),
        ];
        let err = ExampleValidator::validate(&examples, "test_examples").unwrap_err();
        assert!(matches!(err, SentimentError::Format(ref m) if m.contains("test_examples")));
    }

    #[test]
    fn test_rejects_blank_sentiment() {
        let examples = vec![SentimentExample::new("", "text")];
        assert!(ExampleValidator::validate(&examples, "train_examples").is_err());
    }
}
