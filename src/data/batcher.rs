// ============================================================
// Layer 4 — Feature Batcher
// ============================================================
// Stacks a mini-batch of FeatureRows into tensors for the
// logistic model.
//
// How batching works here:
//   Input:  Vec of N FeatureRows, each with D features
//   Output: FeatureBatch with features [N, D] and labels [N]
//
//   We flatten all feature vectors into one long Vec, then reshape:
//   [r1_f1, r1_f2, ..., r1_fD, r2_f1, ..., rN_fD] → [N, D]
//
// Every row has the same length because the featurizer emits
// fixed-dimension vectors.
//
// Reference: Burn Book §4 (Batcher)

use burn::prelude::*;

use crate::data::dataset::FeatureRow;

/// A batch of featurised examples ready for the forward pass.
#[derive(Debug, Clone)]
pub struct FeatureBatch<B: Backend> {
    /// Feature matrix — shape: [batch_size, n_features]
    pub features: Tensor<B, 2>,

    /// Targets in {0.0, 1.0} — shape: [batch_size]
    pub labels: Tensor<B, 1>,
}

/// Holds the target device so tensors are created on it.
#[derive(Clone, Debug)]
pub struct FeatureBatcher<B: Backend> {
    pub device: B::Device,
}

impl<B: Backend> FeatureBatcher<B> {
    pub fn new(device: B::Device) -> Self {
        Self { device }
    }

    /// Stack `items` into one FeatureBatch. `items` must be non-empty.
    pub fn batch(&self, items: &[FeatureRow]) -> FeatureBatch<B> {
        let batch_size = items.len();
        let n_features = items[0].features.len();

        let flat: Vec<f32> = items
            .iter()
            .flat_map(|r| r.features.iter().copied())
            .collect();
        let labels: Vec<f32> = items.iter().map(|r| r.label).collect();

        let features = Tensor::<B, 1>::from_floats(flat.as_slice(), &self.device)
            .reshape([batch_size, n_features]);
        let labels = Tensor::<B, 1>::from_floats(labels.as_slice(), &self.device);

        FeatureBatch { features, labels }
    }

    /// Feature matrix only, for inference on unlabeled rows.
    pub fn features(&self, rows: &[Vec<f32>]) -> Tensor<B, 2> {
        let n_features = rows.first().map_or(0, Vec::len);
        let flat: Vec<f32> = rows.iter().flat_map(|r| r.iter().copied()).collect();
        Tensor::<B, 1>::from_floats(flat.as_slice(), &self.device)
            .reshape([rows.len(), n_features])
    }
}
