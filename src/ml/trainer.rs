// ============================================================
// Layer 5 — Training Loop
// ============================================================
// Fits the logistic model with Adam on seeded mini-batches.
//
// Reproducibility:
//   - weights start at zero (no backend RNG involved)
//   - batch order comes from StdRng::seed_from_u64(seed)
//   - the NdArray CPU backend is deterministic
//   so the same rows, labels and seed give the same model.
//
// Training uses TrainBackend (Autodiff<NdArray>) for gradients;
// model.valid() hands the fitted weights to the plain NdArray
// backend for inference.
//
// Reference: Burn Book §5, Kingma & Ba (2015) Adam

use burn::{
    backend::{ndarray::NdArrayDevice, Autodiff, NdArray},
    data::dataset::Dataset,
    module::AutodiffModule,
    optim::{AdamConfig, GradientsParams, Optimizer},
    prelude::*,
    tensor::ElementConversion,
};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::data::{
    batcher::FeatureBatcher,
    dataset::{FeatureDataset, FeatureRow},
};
use crate::domain::traits::BinaryClassifier;
use crate::error::{Result, SentimentError};
use crate::ml::config::TrainerConfig;
use crate::ml::inferencer::FittedLogisticModel;
use crate::ml::model::{LogisticModel, LogisticModelConfig};

type TrainBackend = Autodiff<NdArray>;

/// L2-regularised logistic regression trained with Adam.
/// Holds hyperparameters only; every `fit` builds a new model.
#[derive(Debug, Clone)]
pub struct LogisticClassifier {
    epochs:        usize,
    batch_size:    usize,
    learning_rate: f64,
    l2_penalty:    f64,
}

impl LogisticClassifier {
    pub fn new(cfg: &TrainerConfig) -> Self {
        Self {
            epochs:        cfg.epochs,
            batch_size:    cfg.batch_size,
            learning_rate: cfg.learning_rate,
            l2_penalty:    cfg.l2_penalty,
        }
    }
}

impl Default for LogisticClassifier {
    fn default() -> Self {
        Self::new(&TrainerConfig::default())
    }
}

impl BinaryClassifier for LogisticClassifier {
    type Model = FittedLogisticModel;

    fn fit(&self, features: &[Vec<f32>], labels: &[bool], seed: u64) -> Result<FittedLogisticModel> {
        if features.is_empty() {
            return Err(SentimentError::Training("cannot fit on zero rows".into()));
        }
        if features.len() != labels.len() {
            return Err(SentimentError::Training(format!(
                "{} feature rows but {} labels",
                features.len(),
                labels.len()
            )));
        }

        if self.epochs == 0 || self.batch_size == 0 {
            return Err(SentimentError::InvalidState(format!(
                "epochs and batch_size must be at least 1, got {} and {}.",
                self.epochs, self.batch_size
            )));
        }

        let n_features = features[0].len();
        if features.iter().any(|row| row.len() != n_features) {
            return Err(SentimentError::Training("feature rows differ in length".into()));
        }

        let device  = NdArrayDevice::default();
        let dataset = FeatureDataset::from_parts(features, labels);
        tracing::debug!(
            "Fitting logistic model: {} rows ({} positive), {} features",
            dataset.len(),
            dataset.positive_count(),
            n_features
        );

        let model = self.train_loop(&dataset, n_features, seed, &device);
        Ok(FittedLogisticModel::new(model.valid(), device))
    }
}

impl LogisticClassifier {
    fn train_loop(
        &self,
        dataset:    &FeatureDataset,
        n_features: usize,
        seed:       u64,
        device:     &NdArrayDevice,
    ) -> LogisticModel<TrainBackend> {
        let mut model: LogisticModel<TrainBackend> = LogisticModelConfig::new(n_features).init(device);

        // ── Adam optimiser ────────────────────────────────────────────────────
        let mut optim = AdamConfig::new()
            .with_epsilon(1e-8)
            .init::<TrainBackend, LogisticModel<TrainBackend>>();

        let batcher   = FeatureBatcher::<TrainBackend>::new(device.clone());
        let mut rng   = StdRng::seed_from_u64(seed);
        let mut order: Vec<usize> = (0..dataset.len()).collect();

        // ── Epoch loop ────────────────────────────────────────────────────────
        for epoch in 1..=self.epochs {
            order.shuffle(&mut rng);

            let mut loss_sum = 0.0f64;
            let mut batches  = 0usize;

            for chunk in order.chunks(self.batch_size) {
                let rows: Vec<FeatureRow> = chunk.iter().filter_map(|&i| dataset.get(i)).collect();
                let batch = batcher.batch(&rows);

                let loss = model.forward_loss(batch.features, batch.labels, self.l2_penalty);
                loss_sum += loss.clone().into_scalar().elem::<f64>();
                batches  += 1;

                // Backward pass + Adam update
                let grads = loss.backward();
                let grads = GradientsParams::from_grads(grads, &model);
                model = optim.step(self.learning_rate, model, grads);
            }

            tracing::debug!(
                "Epoch {:>3}/{} | train_loss={:.5}",
                epoch,
                self.epochs,
                loss_sum / batches.max(1) as f64
            );
        }

        model
    }
}
