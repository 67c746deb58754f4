// ============================================================
// Layer 4 — Shuffle and Train/Evaluation Splitter
// ============================================================
// Two small helpers over row slices:
//
//   shuffle_rows   → randomise the order once, at load time
//   split_at_ratio → cut an (already shuffled) table into
//                    training and evaluation parts
//
// Because the registry shuffles on load, splitting does not
// shuffle again: the same cached table always splits the same
// way for the same ratio.
//
// Split ratio is an integer percentage in 0..=100:
//   75 with 100 rows → 75 training rows, 25 evaluation rows
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.
//
// Reference: Rust Book §8 (Vectors, Slices)
//            rand crate documentation

use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle rows in place. Every permutation is equally likely.
pub fn shuffle_rows<T, R: Rng + ?Sized>(rows: &mut [T], rng: &mut R) {
    rows.shuffle(rng);
}

/// Split `rows` into (training, evaluation) at `split_ratio` percent.
///
/// The training share is rounded to the nearest row. Ratios
/// above 100 are treated as 100.
pub fn split_at_ratio<T>(rows: &[T], split_ratio: u8) -> (&[T], &[T]) {
    let total    = rows.len();
    let fraction = f64::from(split_ratio.min(100)) / 100.0;
    let split_at = ((total as f64) * fraction).round() as usize;

    // Clamp to valid range to avoid panics on tiny datasets
    let split_at = split_at.min(total);
    let (train, eval) = rows.split_at(split_at);

    tracing::debug!(
        "Data set split: {} training, {} evaluation ({}%)",
        train.len(),
        eval.len(),
        split_ratio,
    );

    (train, eval)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_correct_split_sizes() {
        let items: Vec<usize> = (0..100).collect();
        let (train, eval)     = split_at_ratio(&items, 75);
        assert_eq!(train.len(), 75);
        assert_eq!(eval.len(),  25);
    }

    #[test]
    fn test_split_keeps_order() {
        let items: Vec<usize> = (0..10).collect();
        let (train, eval)     = split_at_ratio(&items, 30);
        assert_eq!(train, &[0, 1, 2]);
        assert_eq!(eval[0], 3);
    }

    #[test]
    fn test_empty_dataset() {
        let items: Vec<usize> = Vec::new();
        let (train, eval)     = split_at_ratio(&items, 80);
        assert!(train.is_empty());
        assert!(eval.is_empty());
    }

    #[test]
    fn test_edge_ratios() {
        let items: Vec<usize> = (0..10).collect();
        assert_eq!(split_at_ratio(&items, 100).0.len(), 10);
        assert_eq!(split_at_ratio(&items, 0).1.len(),   10);
    }

    #[test]
    fn test_shuffle_preserves_items() {
        let mut items: Vec<usize> = (0..50).collect();
        shuffle_rows(&mut items, &mut StdRng::seed_from_u64(3));
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }
}
