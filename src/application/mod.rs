// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to accomplish a
// specific goal (training a classifier or inspecting a file).
//
// Rules for this layer:
//   - No ML math or model code here
//   - No printing here (that's Layer 1)
//   - File access only through Layer 4 and Layer 6
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The train-and-evaluate workflow
pub mod train_use_case;

// Dataset summary for a single CSV file
pub mod inspect_use_case;
