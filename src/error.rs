// ============================================================
// Error Types
// ============================================================
// One error enum for the library layers (3 to 6). The CLI and
// use cases wrap it with anyhow context.
//
//   FileNotFound  — the input path is not a readable file
//   Format        — bad CSV header, or a blank field in a dataset
//   NullArgument  — a dataset was absent
//   InvalidState  — an empty dataset or an unusable setting
//   Csv / Io      — reader failures after the header
//   Training      — featurizer, tensor or model failures

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SentimentError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Format error: {0}")]
    Format(String),

    #[error("Argument '{0}' must not be absent")]
    NullArgument(&'static str),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Training error: {0}")]
    Training(String),
}

pub type Result<T> = std::result::Result<T, SentimentError>;
