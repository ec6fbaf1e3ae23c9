// ============================================================
// Layer 4 — Train/Test Splitter
// ============================================================
// Shuffles samples and splits them into two sets when only one
// labelled file is available:
//   - Training set: used to fit the classifier
//   - Test set:     used to score it on unseen examples
//
// Exported review files are often grouped by label, so the
// samples are shuffled before the cut. The shuffle is seeded so the same file and seed always give
// the same split.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.
//
// Reference: rand crate documentation

use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Shuffle `samples` with `seed` and split into (train, test).
///
/// # Arguments
/// * `samples`        - All available samples (consumed by this function)
/// * `train_fraction` - Proportion for training, e.g. 0.8 = 80%
/// * `seed`           - RNG seed for the shuffle
///
/// # Example
/// ```
/// use sentiment_trainer::data::splitter::split_train_test;
/// let (train, test) = split_train_test((0..10).collect::<Vec<_>>(), 0.8, 42);
/// assert_eq!((train.len(), test.len()), (8, 2));
/// ```
pub fn split_train_test<T>(mut samples: Vec<T>, train_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(seed);
    samples.shuffle(&mut rng);

    // e.g. 100 samples * 0.8 = 80 → first 80 are training
    let total    = samples.len();
    let split_at = ((total as f64) * train_fraction.clamp(0.0, 1.0)).round() as usize;
    let split_at = split_at.min(total);

    // After this: samples = [0..split_at], test = [split_at..total]
    let test = samples.split_off(split_at);

    tracing::debug!(
        "Dataset split: {} training, {} test (seed {})",
        samples.len(),
        test.len(),
        seed
    );

    (samples, test)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let (train, test)     = split_train_test(items, 0.8, 7);
        assert_eq!(train.len(), 80);
        assert_eq!(test.len(),  20);
    }

    #[test]
    fn test_all_items_preserved() {
        let items: Vec<usize> = (0..50).collect();
        let (train, test)     = split_train_test(items, 0.7, 7);
        let mut all: Vec<usize> = train.into_iter().chain(test).collect();
        all.sort_unstable();
        assert_eq!(all, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_split() {
        let a = split_train_test((0..30).collect::<Vec<usize>>(), 0.5, 99);
        let b = split_train_test((0..30).collect::<Vec<usize>>(), 0.5, 99);
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_dataset() {
        let (train, test) = split_train_test(Vec::<usize>::new(), 0.8, 1);
        assert!(train.is_empty());
        assert!(test.is_empty());
    }

    #[test]
    fn test_out_of_range_fraction_is_clamped() {
        let (train, test) = split_train_test((0..10).collect::<Vec<usize>>(), 1.5, 1);
        assert_eq!(train.len(), 10);
        assert!(test.is_empty());
    }
}
