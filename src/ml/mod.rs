// ============================================================
// Layer 5 — ML / Model Layer (Burn)
// ============================================================
// Everything that turns normalised examples into a scored
// classifier. All Burn framework code lives here and in the
// dataset/batcher adapters of Layer 4.
//
// What's in this layer:
//
//   config.rs             — TrainerConfig (seed, feature size,
//                           optimiser settings, threshold)
//
//   featurizer.rs         — Hashing text vectoriser
//                           word unigrams + bigrams and
//                           character trigrams, L2-normalised
//
//   model.rs              — Logistic regression module
//                           one Linear unit, sigmoid output,
//                           BCE-with-logits + L2 loss
//
//   trainer.rs            — Adam training loop on seeded
//                           mini-batches
//
//   inferencer.rs         — Fitted model on the inference backend
//
//   evaluator.rs          — Confusion matrix, F1 and ROC AUC
//
//   classifier_trainer.rs — The train-and-evaluate contract
//                           tying the pieces together
//
// Reference: Burn Book §3 (Building Blocks)
//            Burn Book §5 (Training)

/// Read-only trainer settings
pub mod config;

/// Hashing featurizer (text → fixed-length vector)
pub mod featurizer;

/// Logistic regression module
pub mod model;

/// Mini-batch Adam training loop
pub mod trainer;

/// Prediction with a fitted model
pub mod inferencer;

/// Binary classification metrics
pub mod evaluator;

/// Train on one collection, score on another
pub mod classifier_trainer;
