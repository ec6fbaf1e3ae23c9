// ============================================================
// Layer 5 — Trainer Configuration
// ============================================================
// Every setting a training run reads: the seed, the feature
// vector length, the optimiser settings and the decision
// threshold. JSON files may leave fields out; missing fields
// take the defaults below.
//
// `validate` runs before any fitting. A NaN or infinite step
// size would otherwise flow into the weights and every score.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SentimentError};

/// Read-only settings shared by the featurizer, the learner and the
/// evaluator. Passed in at construction; never mutated by a training call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Seed for every random choice made during training
    pub seed:          u64,
    /// Length of the hashed feature vector
    pub feature_dim:   usize,
    /// Full passes over the training set
    pub epochs:        usize,
    /// Examples per optimiser step
    pub batch_size:    usize,
    /// Adam step size
    pub learning_rate: f64,
    /// Strength of the L2 penalty on the weights
    pub l2_penalty:    f64,
    /// Probability at or above which a prediction counts as positive
    pub threshold:     f64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            seed:          42,
            feature_dim:   4096,
            epochs:        40,
            batch_size:    16,
            learning_rate: 0.1,
            l2_penalty:    1e-4,
            threshold:     0.5,
        }
    }
}

impl TrainerConfig {
    /// Reject settings no training run can use.
    /// Fails with `SentimentError::InvalidState` naming the field.
    pub fn validate(&self) -> Result<()> {
        if self.feature_dim == 0 {
            return invalid("feature_dim", "at least 1", self.feature_dim);
        }
        if self.epochs == 0 {
            return invalid("epochs", "at least 1", self.epochs);
        }
        if self.batch_size == 0 {
            return invalid("batch_size", "at least 1", self.batch_size);
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return invalid("learning_rate", "finite and positive", self.learning_rate);
        }
        if !(self.l2_penalty.is_finite() && self.l2_penalty >= 0.0) {
            return invalid("l2_penalty", "finite and non-negative", self.l2_penalty);
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return invalid("threshold", "between 0 and 1", self.threshold);
        }
        Ok(())
    }
}

fn invalid(field: &str, rule: &str, value: impl std::fmt::Display) -> Result<()> {
    Err(SentimentError::InvalidState(format!(
        "Trainer setting {field} must be {rule}, got {value}."
    )))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(TrainerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_unusable_settings() {
        let base = TrainerConfig::default();
        let bad = [
            TrainerConfig { learning_rate: f64::NAN, ..base.clone() },
            TrainerConfig { learning_rate: f64::INFINITY, ..base.clone() },
            TrainerConfig { learning_rate: 0.0, ..base.clone() },
            TrainerConfig { l2_penalty: -1e-3, ..base.clone() },
            TrainerConfig { l2_penalty: f64::NAN, ..base.clone() },
            TrainerConfig { threshold: 1.5, ..base.clone() },
            TrainerConfig { threshold: f64::NAN, ..base.clone() },
            TrainerConfig { epochs: 0, ..base.clone() },
            TrainerConfig { batch_size: 0, ..base.clone() },
            TrainerConfig { feature_dim: 0, ..base },
        ];

        for cfg in bad {
            match cfg.validate() {
                Err(SentimentError::InvalidState(msg)) => assert!(msg.contains("Trainer setting")),
                other => panic!("expected InvalidState for {cfg:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_message_names_the_field() {
        let cfg = TrainerConfig { batch_size: 0, ..TrainerConfig::default() };
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("batch_size"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let cfg: TrainerConfig = serde_json::from_str(r#"{ "seed": 7, "epochs": 5 }"#).unwrap();
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.epochs, 5);
        assert_eq!(cfg.feature_dim, TrainerConfig::default().feature_dim);
    }
}
