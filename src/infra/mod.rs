// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// File persistence that doesn't belong to any business layer:
//
//   report.rs — Run reports
//               Writes the trainer settings, input sizes and
//               evaluation metrics of a run to report.json,
//               and loads trainer settings from JSON for
//               `train --config`.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// JSON run reports and trainer config loading
pub mod report;
