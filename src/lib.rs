//! Load labelled sentiment CSV files, normalise the text, and train and
//! evaluate a binary sentiment classifier.
//!
//! ```no_run
//! use std::path::Path;
//! use sentiment_trainer::data::loader::CsvExampleLoader;
//! use sentiment_trainer::domain::traits::{ExampleSource, SentimentModelTrainer};
//! use sentiment_trainer::ml::classifier_trainer::ClassifierTrainer;
//! use sentiment_trainer::ml::config::TrainerConfig;
//!
//! # fn main() -> sentiment_trainer::Result<()> {
//! let loader = CsvExampleLoader::new();
//! let train  = loader.load(Path::new("train.csv"))?;
//! let test   = loader.load(Path::new("test.csv"))?;
//!
//! let result = ClassifierTrainer::new(TrainerConfig::default())
//!     .train_and_evaluate(Some(&train), Some(&test))?;
//! println!("{result}");
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod data;
pub mod domain;
pub mod error;
pub mod infra;
pub mod ml;

pub use error::{Result, SentimentError};
