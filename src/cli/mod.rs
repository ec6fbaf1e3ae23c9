// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// Two commands are supported:
//   1. `train`   — trains and evaluates a sentiment classifier
//   2. `inspect` — summarises what a CSV file yields
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

// Declare the commands submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, InspectArgs, TrainArgs};

use sentiment_trainer::application::{
    inspect_use_case::InspectUseCase,
    train_use_case::TrainUseCase,
};
use sentiment_trainer::infra::report::load_trainer_config;
use sentiment_trainer::ml::config::TrainerConfig;

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "sentiment-trainer",
    version = "0.1.0",
    about = "Train and evaluate a binary sentiment classifier on labelled CSV files."
)]
pub struct Cli {
    /// The subcommand to run (train or inspect)
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Match on the subcommand and dispatch to the correct use case.
    /// The CLI layer only routes and prints, never computes.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Train(args)   => run_train(args),
            Commands::Inspect(args) => run_inspect(args),
        }
    }
}

/// Handles the `train` subcommand.
/// Resolves trainer settings, then hands off to Layer 2.
fn run_train(args: TrainArgs) -> Result<()> {
    let base = match &args.config {
        Some(path) => load_trainer_config(path)?,
        None       => TrainerConfig::default(),
    };

    tracing::info!("Starting training on '{}'", args.train);
    let report_dir = args.report_dir.clone();
    let result     = TrainUseCase::new(args.into_config(base)).execute()?;

    println!("\nAccuracy: {:.4}", result.accuracy);
    println!("AUC:      {:.4}", result.auc);
    println!("F1 score: {:.4}", result.f1_score);
    if let Some(dir) = report_dir {
        println!("Report saved to {dir}/report.json");
    }
    Ok(())
}

/// Handles the `inspect` subcommand.
fn run_inspect(args: InspectArgs) -> Result<()> {
    let summary = InspectUseCase::new(&args.input, args.preview).summarize()?;

    println!("Examples: {}", summary.total);
    println!("Positive: {}", summary.positive);
    println!("Other:    {}", summary.other);

    if !summary.preview.is_empty() {
        println!();
        for example in &summary.preview {
            println!("[{}] {}", example.sentiment, example.text);
        }
    }
    Ok(())
}
