//! Evaluation metrics tracked alongside the training cost.
//!
//! Metrics are separate from costs: a model is fitted by minimizing a cost
//! but may be monitored with a different, non-differentiable quantity.

use ndarray::ArrayView1;

// =============================================================================
// MisclassificationCount
// =============================================================================

/// Number of samples whose predicted sign disagrees with a `±1` label.
///
/// A prediction of exactly zero has sign `0` and is always counted as a miss.
///
/// ```
/// use ndarray::array;
/// use stumpboost::training::MisclassificationCount;
///
/// let preds = array![0.5, -2.0, 0.0];
/// let labels = array![1.0, 1.0, -1.0];
/// assert_eq!(MisclassificationCount.count(preds.view(), labels.view()), 2);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MisclassificationCount;

impl MisclassificationCount {
    pub fn count(&self, predictions: ArrayView1<f64>, labels: ArrayView1<f64>) -> usize {
        debug_assert_eq!(predictions.len(), labels.len());
        predictions
            .iter()
            .zip(labels.iter())
            .filter(|(&p, &y)| sign(p) != y)
            .count()
    }
}

#[inline]
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
