// ============================================================
// Layer 3 — TrainingResult Domain Type
// ============================================================
// The three evaluation metrics produced by one
// train-and-evaluate run. All values live in [0, 1].
//
//   accuracy  — fraction of test examples classified correctly
//   auc       — area under the ROC curve of the predicted
//               positive-class probabilities
//   f1_score  — harmonic mean of precision and recall at the
//               classifier's decision threshold
//
// Reference: Fawcett (2006) An introduction to ROC analysis

use serde::{Deserialize, Serialize};

/// Evaluation metrics for a trained binary classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    pub accuracy: f64,
    pub auc:      f64,
    pub f1_score: f64,
}

impl TrainingResult {
    pub fn new(accuracy: f64, auc: f64, f1_score: f64) -> Self {
        Self { accuracy, auc, f1_score }
    }
}

impl std::fmt::Display for TrainingResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "accuracy={:.4} auc={:.4} f1={:.4}",
            self.accuracy, self.auc, self.f1_score
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let r = TrainingResult::new(0.75, 1.0, 0.5);
        assert_eq!(r.to_string(), "accuracy=0.7500 auc=1.0000 f1=0.5000");
    }
}
