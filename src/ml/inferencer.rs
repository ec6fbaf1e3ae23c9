// ============================================================
// Layer 5 — Inferencer
// ============================================================
// Wraps a fitted logistic model on the plain NdArray backend
// (no autodiff graph) and returns positive-class
// probabilities for featurised rows.
//
// Rows are stacked into one [N, D] tensor, so a whole test set
// is scored in a single forward pass.
use burn::{
    backend::{ndarray::NdArrayDevice, NdArray},
    prelude::*,
};

use crate::data::batcher::FeatureBatcher;
use crate::domain::traits::BinaryModel;
use crate::error::{Result, SentimentError};
use crate::ml::model::LogisticModel;

type InferBackend = NdArray;

/// A fitted logistic model living on the inference backend.
#[derive(Debug)]
pub struct FittedLogisticModel {
    model:  LogisticModel<InferBackend>,
    device: NdArrayDevice,
}

impl FittedLogisticModel {
    pub fn new(model: LogisticModel<InferBackend>, device: NdArrayDevice) -> Self {
        Self { model, device }
    }
}

impl BinaryModel for FittedLogisticModel {
    fn predict_proba(&self, features: &[Vec<f32>]) -> Result<Vec<f32>> {
        if features.is_empty() {
            return Ok(Vec::new());
        }

        let batcher = FeatureBatcher::<InferBackend>::new(self.device.clone());
        let probs   = self.model.predict_proba(batcher.features(features));

        probs
            .into_data()
            .to_vec::<f32>()
            .map_err(|e| SentimentError::Training(format!("cannot read probabilities: {e:?}")))
    }
}
