// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands: `train` and `inspect`
// and all their configurable flags.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, f64, etc.)
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{ArgGroup, Args, Subcommand};
use std::path::PathBuf;

use sentiment_trainer::application::train_use_case::TrainConfig;
use sentiment_trainer::ml::config::TrainerConfig;

/// The two top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train a sentiment classifier and report accuracy, AUC and F1
    Train(TrainArgs),

    /// Show how many examples a CSV file yields after normalisation
    Inspect(InspectArgs),
}

/// All arguments for the `train` command.
/// Trainer flags left unset keep the value from `--config`
/// (or the built-in default when no config file is given).
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("evaluation").required(true).args(["test", "holdout"])))]
pub struct TrainArgs {
    /// CSV file with `Sentiment` and `Text` columns to train on
    #[arg(long)]
    pub train: String,

    /// CSV file to evaluate on
    #[arg(long)]
    pub test: Option<String>,

    /// Hold out this fraction of the training file for evaluation
    #[arg(long)]
    pub holdout: Option<f64>,

    /// JSON file with trainer settings (or a previous report.json)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Seed for batch order and the holdout split
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of full passes through the training data (at least 1)
    #[arg(long)]
    pub epochs: Option<usize>,

    /// Number of examples per optimiser step (at least 1)
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Adam step size
    #[arg(long)]
    pub learning_rate: Option<f64>,

    /// Strength of the L2 penalty on the weights
    #[arg(long)]
    pub l2_penalty: Option<f64>,

    /// Length of the hashed feature vector
    #[arg(long)]
    pub feature_dim: Option<usize>,

    /// Directory to write report.json into
    #[arg(long)]
    pub report_dir: Option<String>,
}

impl TrainArgs {
    /// Convert CLI TrainArgs into the application-layer TrainConfig,
    /// applying every flag that was given on top of `base`.
    /// The application layer never sees clap types.
    pub fn into_config(self, base: TrainerConfig) -> TrainConfig {
        let trainer = TrainerConfig {
            seed:          self.seed.unwrap_or(base.seed),
            epochs:        self.epochs.unwrap_or(base.epochs),
            batch_size:    self.batch_size.unwrap_or(base.batch_size),
            learning_rate: self.learning_rate.unwrap_or(base.learning_rate),
            l2_penalty:    self.l2_penalty.unwrap_or(base.l2_penalty),
            feature_dim:   self.feature_dim.unwrap_or(base.feature_dim),
            ..base
        };

        TrainConfig {
            train_path: self.train,
            test_path:  self.test,
            holdout:    self.holdout,
            report_dir: self.report_dir,
            trainer,
        }
    }
}

/// All arguments for the `inspect` command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// CSV file to inspect
    #[arg(long)]
    pub input: PathBuf,

    /// Number of normalised examples to print
    #[arg(long, default_value_t = 5)]
    pub preview: usize,
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    fn parse_train(args: &[&str]) -> TrainArgs {
        let argv = ["sentiment-trainer", "train"].iter().chain(args).copied();
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Train(a) => a,
            other => panic!("expected train, got {other:?}"),
        }
    }

    #[test]
    fn test_flags_override_base_config() {
        let args = parse_train(&["--train", "a.csv", "--holdout", "0.2", "--epochs", "3"]);
        let base = TrainerConfig { seed: 9, epochs: 50, ..TrainerConfig::default() };
        let cfg  = args.into_config(base);

        assert_eq!(cfg.trainer.epochs, 3);
        assert_eq!(cfg.trainer.seed, 9);
        assert_eq!(cfg.holdout, Some(0.2));
        assert_eq!(cfg.test_path, None);
    }

    #[test]
    fn test_train_requires_test_or_holdout() {
        assert!(Cli::try_parse_from(["sentiment-trainer", "train", "--train", "a.csv"]).is_err());
    }

    #[test]
    fn test_test_and_holdout_conflict() {
        let res = Cli::try_parse_from([
            "sentiment-trainer", "train", "--train", "a.csv", "--test", "b.csv", "--holdout", "0.2",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn test_inspect_default_preview() {
        let cli = Cli::try_parse_from(["sentiment-trainer", "inspect", "--input", "x.csv"]).unwrap();
        match cli.command {
            Commands::Inspect(a) => assert_eq!(a.preview, 5),
            other => panic!("expected inspect, got {other:?}"),
        }
    }
}
