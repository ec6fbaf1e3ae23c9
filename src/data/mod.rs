// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from a raw CSV file to tensor batches.
//
// The pipeline flows in this order:
//
//   labelled .csv file
//       │
//       ▼
//   CsvExampleLoader  → reads rows, resolves columns by name
//       │
//       ▼
//   TextNormalizer    → unescapes, collapses whitespace, trims
//       │
//       ▼
//   ExampleValidator  → re-checks non-empty fields before training
//       │
//       ▼
//   FeatureDataset    → featurised rows (implements Burn's Dataset)
//       │
//       ▼
//   FeatureBatcher    → stacks rows into tensor batches
//
// Each module is responsible for exactly one step.
//
// Reference: Burn Book §4 (Datasets)
//            Rust Book §13 (Iterators and Closures)

/// Reads labelled CSV files into SentimentExamples
pub mod loader;

/// Escape resolution and whitespace normalisation
pub mod normalizer;

/// Non-empty field checks before training
pub mod validator;

/// Seeded shuffle and train/test split
pub mod splitter;

/// Implements Burn's Dataset trait for featurised rows
pub mod dataset;

/// Stacks feature rows into tensor batches
pub mod batcher;
