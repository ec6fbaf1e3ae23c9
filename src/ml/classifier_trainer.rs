// ============================================================
// Layer 5 — ClassifierTrainer
// ============================================================
// Runs one train-and-evaluate cycle:
//
//   Step 1: Check both collections     (absent → empty → blank field)
//           then the trainer settings
//   Step 2: Map examples to labels     (is_positive → true/false)
//   Step 3: Featurize the text         (Featurizer)
//   Step 4: Fit the classifier         (BinaryClassifier, seeded)
//   Step 5: Predict on the test set    (BinaryModel)
//   Step 6: Score the predictions      (accuracy, AUC, F1)
//
// The trainer owns a read-only config and two stateless
// collaborators. Each call fits its own model, so one trainer
// can be shared across threads.

use crate::data::validator::ExampleValidator;
use crate::domain::example::SentimentExample;
use crate::domain::result::TrainingResult;
use crate::domain::traits::{BinaryClassifier, BinaryModel, Featurizer, SentimentModelTrainer};
use crate::error::{Result, SentimentError};
use crate::ml::config::TrainerConfig;
use crate::ml::evaluator::BinaryMetrics;
use crate::ml::featurizer::HashingFeaturizer;
use crate::ml::trainer::LogisticClassifier;

const TRAIN_PARAM: &str = "train_examples";
const TEST_PARAM:  &str = "test_examples";

/// Featurize → fit → evaluate, generic over the two collaborators.
pub struct ClassifierTrainer<F = HashingFeaturizer, C = LogisticClassifier> {
    config:     TrainerConfig,
    featurizer: F,
    classifier: C,
}

impl ClassifierTrainer {
    /// Hashing featurizer + logistic regression, both built from `config`
    pub fn new(config: TrainerConfig) -> Self {
        let featurizer = HashingFeaturizer::new(config.feature_dim);
        let classifier = LogisticClassifier::new(&config);
        Self { config, featurizer, classifier }
    }
}

impl Default for ClassifierTrainer {
    fn default() -> Self {
        Self::new(TrainerConfig::default())
    }
}

impl<F: Featurizer, C: BinaryClassifier> ClassifierTrainer<F, C> {
    /// Plug in custom collaborators. Only `seed` and `threshold`
    /// are read from `config` in that case.
    pub fn with_components(config: TrainerConfig, featurizer: F, classifier: C) -> Self {
        Self { config, featurizer, classifier }
    }

    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }

    fn featurize_all(&self, examples: &[SentimentExample]) -> Result<Vec<Vec<f32>>> {
        examples.iter().map(|e| self.featurizer.featurize(&e.text)).collect()
    }
}

impl<F: Featurizer, C: BinaryClassifier> SentimentModelTrainer for ClassifierTrainer<F, C> {
    fn train_and_evaluate(
        &self,
        train_examples: Option<&[SentimentExample]>,
        test_examples:  Option<&[SentimentExample]>,
    ) -> Result<TrainingResult> {
        // ── Step 1: Preconditions, first failure wins ─────────────────────────
        let train = train_examples.ok_or(SentimentError::NullArgument(TRAIN_PARAM))?;
        let test  = test_examples.ok_or(SentimentError::NullArgument(TEST_PARAM))?;

        for (examples, name) in [(train, TRAIN_PARAM), (test, TEST_PARAM)] {
            if examples.is_empty() {
                return Err(SentimentError::InvalidState(format!(
                    "Collection {name} must contain at least one example."
                )));
            }
        }

        ExampleValidator::validate(train, TRAIN_PARAM)?;
        ExampleValidator::validate(test, TEST_PARAM)?;
        self.config.validate()?;

        // ── Steps 2 + 3: Labels and features ──────────────────────────────────
        let train_labels: Vec<bool> = train.iter().map(SentimentExample::is_positive).collect();
        let test_labels:  Vec<bool> = test.iter().map(SentimentExample::is_positive).collect();

        let train_features = self.featurize_all(train)?;
        let test_features  = self.featurize_all(test)?;
        tracing::info!(
            "Training on {} examples, evaluating on {} ({} features, seed {})",
            train.len(),
            test.len(),
            self.featurizer.dimension(),
            self.config.seed
        );

        // ── Step 4: Fit ───────────────────────────────────────────────────────
        let model = self.classifier.fit(&train_features, &train_labels, self.config.seed)?;

        // ── Steps 5 + 6: Predict and score ────────────────────────────────────
        let probabilities = model.predict_proba(&test_features)?;
        if let Some(i) = probabilities.iter().position(|p| !p.is_finite()) {
            return Err(SentimentError::Training(format!(
                "Model produced a non-finite probability ({}) for test example {i}.",
                probabilities[i]
            )));
        }
        let metrics = BinaryMetrics::evaluate(&test_labels, &probabilities, self.config.threshold);
        tracing::debug!("Confusion matrix: {:?}", metrics.confusion_matrix);

        let result = TrainingResult::new(metrics.accuracy, metrics.auc, metrics.f1);
        tracing::info!("Evaluation: {}", result);
        Ok(result)
    }
}
