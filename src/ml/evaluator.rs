// ============================================================
// Layer 5 — Evaluator
// ============================================================
// Scores predicted positive-class probabilities against true
// labels: accuracy, precision, recall and F1 at a fixed
// threshold, plus the threshold-free ROC AUC.
//
// Degenerate cases:
//   - a zero denominator makes precision, recall or F1 zero
//   - AUC is 0.5 when only one class is present
//   - scores are ordered with f32::total_cmp, so NaN sorts
//     above every finite score and ties only with itself
//
// Reference: Fawcett (2006) An Introduction to ROC Analysis

/// Confusion matrix for binary classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfusionMatrix {
    /// True positives
    pub tp: usize,
    /// True negatives
    pub tn: usize,
    /// False positives
    pub fp: usize,
    /// False negatives
    pub fn_: usize,
}

impl ConfusionMatrix {
    /// A prediction is positive iff `p >= threshold`
    pub fn from_probabilities(labels: &[bool], probabilities: &[f32], threshold: f64) -> Self {
        let mut cm = Self::default();

        for (&t, &p) in labels.iter().zip(probabilities) {
            match (t, f64::from(p) >= threshold) {
                (true, true) => cm.tp += 1,
                (false, false) => cm.tn += 1,
                (false, true) => cm.fp += 1,
                (true, false) => cm.fn_ += 1,
            }
        }

        cm
    }

    /// Total samples
    pub fn total(&self) -> usize {
        self.tp + self.tn + self.fp + self.fn_
    }

    /// Accuracy: (TP + TN) / Total
    pub fn accuracy(&self) -> f64 {
        ratio(self.tp + self.tn, self.total())
    }

    /// Precision: TP / (TP + FP)
    pub fn precision(&self) -> f64 {
        ratio(self.tp, self.tp + self.fp)
    }

    /// Recall: TP / (TP + FN)
    pub fn recall(&self) -> f64 {
        ratio(self.tp, self.tp + self.fn_)
    }

    /// F1 Score: 2 * (Precision * Recall) / (Precision + Recall)
    pub fn f1(&self) -> f64 {
        let precision = self.precision();
        let recall = self.recall();
        let denom = precision + recall;
        if denom <= 0.0 {
            return 0.0;
        }
        2.0 * precision * recall / denom
    }
}

/// Zero when the denominator is zero
fn ratio(num: usize, denom: usize) -> f64 {
    if denom == 0 {
        0.0
    } else {
        num as f64 / denom as f64
    }
}

/// All metrics for one evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BinaryMetrics {
    pub confusion_matrix: ConfusionMatrix,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub auc: f64,
}

impl BinaryMetrics {
    pub fn evaluate(labels: &[bool], probabilities: &[f32], threshold: f64) -> Self {
        let cm = ConfusionMatrix::from_probabilities(labels, probabilities, threshold);

        Self {
            confusion_matrix: cm,
            accuracy: cm.accuracy(),
            precision: cm.precision(),
            recall: cm.recall(),
            f1: cm.f1(),
            auc: auc_roc(labels, probabilities),
        }
    }
}

/// AUC-ROC (Area Under ROC Curve)
///
/// Walks the scores from highest to lowest, treating tied scores as one
/// step, and sums trapezoids. Returns 0.5 when only one class is present.
pub fn auc_roc(labels: &[bool], probabilities: &[f32]) -> f64 {
    let mut pairs: Vec<(f32, bool)> = probabilities
        .iter()
        .copied()
        .zip(labels.iter().copied())
        .collect();

    // Sort by prediction descending
    pairs.sort_by(|a, b| b.0.total_cmp(&a.0));

    let n_pos = pairs.iter().filter(|(_, t)| *t).count() as f64;
    let n_neg = pairs.len() as f64 - n_pos;

    if n_pos == 0.0 || n_neg == 0.0 {
        return 0.5;
    }

    let mut tpr_prev = 0.0;
    let mut fpr_prev = 0.0;
    let mut auc = 0.0;
    let mut tp = 0.0;
    let mut fp = 0.0;

    let mut i = 0;
    while i < pairs.len() {
        // Consume every point that shares this score
        let score = pairs[i].0;
        while i < pairs.len() && pairs[i].0.total_cmp(&score).is_eq() {
            if pairs[i].1 {
                tp += 1.0;
            } else {
                fp += 1.0;
            }
            i += 1;
        }

        let tpr = tp / n_pos;
        let fpr = fp / n_neg;

        // Trapezoid area
        auc += (fpr - fpr_prev) * (tpr + tpr_prev) / 2.0;

        tpr_prev = tpr;
        fpr_prev = fpr;
    }

    auc
}
