// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pipeline is written against these traits, never against
// a concrete loader, featurizer or classifier:
//   - CsvExampleLoader     implements ExampleSource
//   - HashingFeaturizer    implements Featurizer
//   - LogisticClassifier   implements BinaryClassifier
//   - ClassifierTrainer    implements SentimentModelTrainer
//
// Swapping in a TF-IDF featurizer or a different learner only
// means implementing the matching trait.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use std::path::Path;

use crate::domain::example::SentimentExample;
use crate::domain::result::TrainingResult;
use crate::error::Result;

// ─── ExampleSource ────────────────────────────────────────────────────────────
/// Any component that can produce normalised examples from a file.
pub trait ExampleSource {
    /// Load every valid example from `path`, in file order.
    fn load(&self, path: &Path) -> Result<Vec<SentimentExample>>;
}

// ─── Featurizer ───────────────────────────────────────────────────────────────
/// Deterministic text → fixed-length vector transformation.
///
/// The same input must always produce the same vector so that
/// training runs are reproducible.
pub trait Featurizer: Send + Sync {
    /// Length of every vector returned by `featurize`
    fn dimension(&self) -> usize;

    /// Convert one normalised text into a feature vector
    fn featurize(&self, text: &str) -> Result<Vec<f32>>;
}

// ─── BinaryClassifier ─────────────────────────────────────────────────────────
/// A trainable binary learner. `fit` never mutates `self`;
/// it returns a fresh model so concurrent fits cannot interfere.
pub trait BinaryClassifier: Send + Sync {
    type Model: BinaryModel;

    /// Fit on feature rows and boolean labels.
    /// `seed` drives every random choice the learner makes.
    fn fit(&self, features: &[Vec<f32>], labels: &[bool], seed: u64) -> Result<Self::Model>;
}

/// A fitted binary model.
pub trait BinaryModel {
    /// Probability of the positive class for each feature row
    fn predict_proba(&self, features: &[Vec<f32>]) -> Result<Vec<f32>>;
}

// ─── SentimentModelTrainer ────────────────────────────────────────────────────
/// Trains a classifier on one collection and scores it on another.
///
/// `None` stands for an absent collection and is rejected with
/// `SentimentError::NullArgument`.
pub trait SentimentModelTrainer {
    fn train_and_evaluate(
        &self,
        train_examples: Option<&[SentimentExample]>,
        test_examples:  Option<&[SentimentExample]>,
    ) -> Result<TrainingResult>;
}
