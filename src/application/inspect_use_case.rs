// ============================================================
// Layer 2 — InspectUseCase
// ============================================================
// Loads one CSV file through the same loader the trainer uses
// and summarises what survived normalisation, so a dataset can
// be checked before spending time on training.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::data::loader::CsvExampleLoader;
use crate::domain::example::SentimentExample;
use crate::domain::traits::ExampleSource;

/// Counts and a preview of the normalised examples in one file.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub total:    usize,
    pub positive: usize,
    /// Everything not labelled "positive"
    pub other:    usize,
    pub preview:  Vec<SentimentExample>,
}

pub struct InspectUseCase {
    input:   PathBuf,
    preview: usize,
}

impl InspectUseCase {
    pub fn new(input: impl Into<PathBuf>, preview: usize) -> Self {
        Self { input: input.into(), preview }
    }

    pub fn summarize(&self) -> Result<DatasetSummary> {
        let examples = CsvExampleLoader::new()
            .load(&self.input)
            .with_context(|| format!("Cannot load examples from '{}'", self.input.display()))?;

        let positive = examples.iter().filter(|e| e.is_positive()).count();

        Ok(DatasetSummary {
            total:   examples.len(),
            positive,
            other:   examples.len() - positive,
            preview: examples.into_iter().take(self.preview).collect(),
        })
    }
}
