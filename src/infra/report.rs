// ============================================================
// Layer 6 — Run Reports
// ============================================================
// Persists what a training run used and what it scored, and
// reads trainer settings back from JSON.
//
// File layout:
//   <report_dir>/
//     report.json   ← RunReport (inputs, config, metrics)
//
// A report.json can be fed back through `--config`: only its
// `config` object is read in that case.
//
// Reference: Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::domain::result::TrainingResult;
use crate::ml::config::TrainerConfig;

const REPORT_FILE: &str = "report.json";

/// Everything worth keeping from one training run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub train_path:     String,
    pub test_path:      Option<String>,
    pub holdout:        Option<f64>,
    pub train_examples: usize,
    pub test_examples:  usize,
    pub config:         TrainerConfig,
    pub result:         TrainingResult,
}

/// Writes and reads `report.json` inside one directory.
pub struct ReportStore {
    dir: PathBuf,
}

impl ReportStore {
    /// Create the store, making the directory (and parents) if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create report directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(REPORT_FILE)
    }

    /// Serialise the report as pretty JSON; returns the file written.
    pub fn save(&self, report: &RunReport) -> Result<PathBuf> {
        let path = self.path();
        let json = serde_json::to_string_pretty(report)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write report to '{}'", path.display()))?;

        tracing::debug!("Saved run report to '{}'", path.display());
        Ok(path)
    }

    pub fn load(&self) -> Result<RunReport> {
        let path = self.path();
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read report from '{}'", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("'{}' is not a valid run report", path.display()))
    }
}

/// Read trainer settings from a JSON file.
///
/// Accepts either a bare `TrainerConfig` object or a full run report,
/// in which case its `config` field is used. Missing fields take their
/// default values.
pub fn load_trainer_config(path: &Path) -> Result<TrainerConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

    let value: serde_json::Value = serde_json::from_str(&json)
        .with_context(|| format!("'{}' is not valid JSON", path.display()))?;

    let config = match value.get("config") {
        Some(inner) => serde_json::from_value(inner.clone()),
        None        => serde_json::from_value(value),
    }
    .with_context(|| format!("'{}' does not hold trainer settings", path.display()))?;

    Ok(config)
}
