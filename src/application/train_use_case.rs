// ============================================================
// Layer 2 — TrainUseCase
// ============================================================
// Orchestrates one training run in order:
//
//   Step 1: Load the training CSV          (Layer 4 - data)
//   Step 2: Load or carve out the test set (Layer 4 - data)
//   Step 3: Train and evaluate             (Layer 5 - ml)
//   Step 4: Write the run report           (Layer 6 - infra)
//
// Reference: Rust Book §13 (Iterators and Closures)

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data::{loader::CsvExampleLoader, splitter::split_train_test};
use crate::domain::example::SentimentExample;
use crate::domain::result::TrainingResult;
use crate::domain::traits::{ExampleSource, SentimentModelTrainer};
use crate::infra::report::{ReportStore, RunReport};
use crate::ml::classifier_trainer::ClassifierTrainer;
use crate::ml::config::TrainerConfig;

// ─── Training Configuration ──────────────────────────────────────────────────
// Where the data comes from, where the report goes, and the
// trainer settings for the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub train_path: String,
    /// Separate test CSV; takes precedence over `holdout`
    pub test_path:  Option<String>,
    /// Fraction of the training file held out for testing
    pub holdout:    Option<f64>,
    pub report_dir: Option<String>,
    pub trainer:    TrainerConfig,
}

impl Default for TrainConfig {
    fn default() -> Self {
        Self {
            train_path: "data/train.csv".to_string(),
            test_path:  None,
            holdout:    None,
            report_dir: None,
            trainer:    TrainerConfig::default(),
        }
    }
}

// ─── TrainUseCase ─────────────────────────────────────────────────────────────
pub struct TrainUseCase {
    config: TrainConfig,
}

impl TrainUseCase {
    pub fn new(config: TrainConfig) -> Self {
        Self { config }
    }

    /// Run the whole pipeline and return the evaluation metrics.
    pub fn execute(&self) -> Result<TrainingResult> {
        let cfg    = &self.config;
        let loader = CsvExampleLoader::new();

        // ── Step 1: Training examples ─────────────────────────────────────────
        let train_examples = load(&loader, &cfg.train_path)?;

        // ── Step 2: Test examples ─────────────────────────────────────────────
        // No test file and no holdout leaves the test set absent; the
        // trainer rejects that with a NullArgument error.
        let (train, test) = match (&cfg.test_path, cfg.holdout) {
            (Some(path), _) => {
                if cfg.holdout.is_some() {
                    tracing::warn!("Both a test file and --holdout given; ignoring --holdout");
                }
                (train_examples, Some(load(&loader, path)?))
            }
            (None, Some(fraction)) => {
                ensure!(
                    fraction > 0.0 && fraction < 1.0,
                    "--holdout must be strictly between 0 and 1, got {fraction}"
                );
                let (train, test) =
                    split_train_test(train_examples, 1.0 - fraction, cfg.trainer.seed);
                tracing::info!("Held out {} of {} examples for testing", test.len(), train.len() + test.len());
                (train, Some(test))
            }
            (None, None) => (train_examples, None),
        };

        // ── Step 3: Train and evaluate ────────────────────────────────────────
        let trainer = ClassifierTrainer::new(cfg.trainer.clone());
        let result  = trainer
            .train_and_evaluate(Some(&train), test.as_deref())
            .context("Training failed")?;

        // ── Step 4: Report ────────────────────────────────────────────────────
        if let Some(dir) = &cfg.report_dir {
            let report = RunReport {
                train_path:     cfg.train_path.clone(),
                test_path:      cfg.test_path.clone(),
                holdout:        cfg.holdout.filter(|_| cfg.test_path.is_none()),
                train_examples: train.len(),
                test_examples:  test.as_ref().map_or(0, Vec::len),
                config:         cfg.trainer.clone(),
                result,
            };
            let path = ReportStore::new(dir)?.save(&report)?;
            tracing::info!("Wrote run report to '{}'", path.display());
        }

        Ok(result)
    }
}

fn load(loader: &CsvExampleLoader, path: &str) -> Result<Vec<SentimentExample>> {
    loader
        .load(Path::new(path))
        .with_context(|| format!("Cannot load examples from '{path}'"))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SentimentError;
    use std::fs;

    const TRAIN_CSV: &str = "\
Sentiment,Text
Positive,I loved this product
Positive,Absolutely wonderful and great
Positive,Great value and I loved it
Positive,Wonderful service
Negative,I hated this product
Negative,Terrible and awful
Negative,Awful value and I hated it
Negative,Terrible service
";

    fn write_csv(dir: &Path, name: &str, body: &str) -> String {
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn fast_trainer() -> TrainerConfig {
        TrainerConfig { feature_dim: 256, epochs: 10, ..TrainerConfig::default() }
    }

    #[test]
    fn test_holdout_run_writes_report() {
        let dir    = tempfile::tempdir().unwrap();
        let train  = write_csv(dir.path(), "train.csv", TRAIN_CSV);
        let report = dir.path().join("report");

        let cfg = TrainConfig {
            train_path: train,
            holdout:    Some(0.25),
            report_dir: Some(report.to_string_lossy().into_owned()),
            trainer:    fast_trainer(),
            ..TrainConfig::default()
        };
        let result = TrainUseCase::new(cfg).execute().unwrap();

        let saved = ReportStore::new(&report).unwrap().load().unwrap();
        assert_eq!(saved.result, result);
        assert_eq!(saved.train_examples + saved.test_examples, 8);
        assert_eq!(saved.test_examples, 2);
    }

    #[test]
    fn test_separate_test_file() {
        let dir   = tempfile::tempdir().unwrap();
        let train = write_csv(dir.path(), "train.csv", TRAIN_CSV);
        let test  = write_csv(dir.path(), "test.csv", "Text,Sentiment\nloved it,Positive\nhated it,Negative\n");

        let cfg = TrainConfig {
            train_path: train,
            test_path:  Some(test),
            trainer:    fast_trainer(),
            ..TrainConfig::default()
        };
        let result = TrainUseCase::new(cfg).execute().unwrap();
        assert!((0.0..=1.0).contains(&result.accuracy));
    }

    #[test]
    fn test_without_test_set_is_null_argument() {
        let dir   = tempfile::tempdir().unwrap();
        let train = write_csv(dir.path(), "train.csv", TRAIN_CSV);

        let cfg = TrainConfig { train_path: train, ..TrainConfig::default() };
        let err = TrainUseCase::new(cfg).execute().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SentimentError>(),
            Some(SentimentError::NullArgument("test_examples"))
        ));
    }

    #[test]
    fn test_holdout_out_of_range_is_rejected() {
        let dir   = tempfile::tempdir().unwrap();
        let train = write_csv(dir.path(), "train.csv", TRAIN_CSV);

        let cfg = TrainConfig { train_path: train, holdout: Some(1.0), ..TrainConfig::default() };
        assert!(TrainUseCase::new(cfg).execute().is_err());
    }

    #[test]
    fn test_missing_train_file_names_path() {
        let cfg = TrainConfig { train_path: "no/such/train.csv".into(), ..TrainConfig::default() };
        let err = TrainUseCase::new(cfg).execute().unwrap_err();
        assert!(format!("{err:#}").contains("train.csv"));
    }
}
