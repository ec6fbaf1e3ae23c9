// ============================================================
// Layer 4 — Feature Dataset
// ============================================================
// Featurised rows paired with their labels, exposed through
// Burn's Dataset trait so the training loop can fetch rows by
// index in shuffled order.
//
// Reference: Burn Book §4 (Datasets)

use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};

/// One featurised training example.
/// `label` is 1.0 for the positive class and 0.0 otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureRow {
    pub features: Vec<f32>,
    pub label:    f32,
}

impl FeatureRow {
    pub fn new(features: Vec<f32>, positive: bool) -> Self {
        Self { features, label: if positive { 1.0 } else { 0.0 } }
    }

    pub fn is_positive(&self) -> bool {
        self.label >= 0.5
    }
}

pub struct FeatureDataset {
    rows: Vec<FeatureRow>,
}

impl FeatureDataset {
    /// Zip feature rows with labels; extra entries on either side are dropped.
    pub fn from_parts(features: &[Vec<f32>], labels: &[bool]) -> Self {
        let rows = features
            .iter()
            .zip(labels)
            .map(|(f, &positive)| FeatureRow::new(f.clone(), positive))
            .collect();
        Self { rows }
    }

    pub fn positive_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_positive()).count()
    }
}

impl Dataset<FeatureRow> for FeatureDataset {
    fn get(&self, index: usize) -> Option<FeatureRow> {
        self.rows.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.rows.len()
    }
}
