//! Split-candidate generation.
//!
//! For each input dimension the samples are stably sorted by value; every
//! adjacent pair whose labels differ yields a stump at the midpoint of the two
//! values. Only label inequality is checked, so two samples sharing a value
//! but carrying different labels produce a zero-width candidate whose
//! threshold equals that value.

use crate::data::Dataset;
use crate::repr::Stump;

/// Enumerate candidate stumps, dimension by dimension in ascending order.
///
/// ```
/// use ndarray::array;
/// use stumpboost::data::Dataset;
/// use stumpboost::training::generate_candidates;
///
/// let ds = Dataset::new(array![[3.0, 1.0, 2.0]], array![1.0, -1.0, -1.0]).unwrap();
/// let candidates = generate_candidates(&ds);
/// assert_eq!(candidates.len(), 1);
/// assert_eq!(candidates[0].threshold, 2.5);
/// ```
pub fn generate_candidates(dataset: &Dataset) -> Vec<Stump> {
    let labels = dataset.labels();
    let mut order: Vec<usize> = Vec::with_capacity(dataset.n_samples());
    let mut candidates = Vec::new();

    for dim in 0..dataset.n_features() {
        let values = dataset.feature(dim);
        order.clear();
        order.extend(0..dataset.n_samples());
        order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

        for pair in order.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if labels[lo] != labels[hi] {
                candidates.push(Stump::new(dim, (values[lo] + values[hi]) / 2.0));
            }
        }
    }

    candidates
}

/// Number of candidates along each dimension.
///
/// Stumps with `dim >= n_features` are not counted.
pub fn candidates_per_dim(candidates: &[Stump], n_features: usize) -> Vec<usize> {
    let mut counts = vec![0; n_features];
    for stump in candidates {
        if let Some(count) = counts.get_mut(stump.dim) {
            *count += 1;
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn one_sign_change_one_candidate() {
        let ds = Dataset::new(array![[0.0, 1.0, 2.0, 3.0]], array![-1.0, -1.0, 1.0, 1.0]).unwrap();
        assert_eq!(generate_candidates(&ds), vec![Stump::new(0, 1.5)]);
    }

    #[test]
    fn dimensions_in_order() {
        let ds = Dataset::new(
            array![[0.0, 1.0, 2.0], [5.0, 4.0, 3.0]],
            array![1.0, -1.0, 1.0],
        )
        .unwrap();
        let candidates = generate_candidates(&ds);
        assert_eq!(
            candidates,
            vec![
                Stump::new(0, 0.5),
                Stump::new(0, 1.5),
                Stump::new(1, 3.5),
                Stump::new(1, 4.5),
            ]
        );
        assert_eq!(candidates_per_dim(&candidates, 2), vec![2, 2]);
    }

    #[test]
    fn constant_labels_yield_nothing() {
        let ds = Dataset::new(array![[3.0, 1.0, 2.0]], array![0.5, 0.5, 0.5]).unwrap();
        assert!(generate_candidates(&ds).is_empty());
    }

    #[test]
    fn duplicate_value_gives_zero_width_split() {
        let ds = Dataset::new(array![[1.0, 1.0, 2.0]], array![1.0, -1.0, -1.0]).unwrap();
        let candidates = generate_candidates(&ds);
        assert_eq!(candidates, vec![Stump::new(0, 1.0)]);
    }

    #[test]
    fn per_dim_counts_skip_unknown_dims() {
        let candidates = [Stump::new(0, 1.0), Stump::new(2, 0.0), Stump::new(0, 3.0), Stump::new(7, 1.0)];
        assert_eq!(candidates_per_dim(&candidates, 3), vec![2, 0, 1]);
    }
}
