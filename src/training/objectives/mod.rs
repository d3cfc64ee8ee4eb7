//! Cost functions for stump boosting.
//!
//! A cost is defined by its per-sample loss `ℓ(prediction, label)` and is
//! reported as the mean over the evaluated samples. Costs also expose the
//! first and second derivative of `ℓ` with respect to the prediction, which
//! the optimizers reduce onto the weights of the term being fitted.
//!
//! # Available Costs
//!
//! ## Regression
//! - [`LeastSquares`]: `(p - y)²`
//! - [`LeastAbsoluteDeviations`]: `|p - y|`
//!
//! ## Two-class classification (labels in {-1, +1})
//! - [`Softmax`]: `ln(1 + exp(-y p))`
//! - [`Perceptron`]: `max(0, -y p)`
//!
//! Classification costs come with a [`MisclassificationCount`] counter.

mod classification;
mod regression;

pub use classification::{Perceptron, Softmax};
pub use regression::{LeastAbsoluteDeviations, LeastSquares};

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use crate::training::metrics::MisclassificationCount;
use crate::training::{Gradients, GradsTuple};

// =============================================================================
// Target Semantics
// =============================================================================

/// High-level task implied by a cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    Regression,
    BinaryClassification,
}

/// Label encoding expected by a cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetSchema {
    /// Any finite real value.
    Continuous,
    /// Exactly `-1.0` or `+1.0`.
    BinarySigned,
}

/// A label that does not fit the cost's [`TargetSchema`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("label {value} at sample {sample} is not valid for the {cost} cost (expected -1 or +1)")]
pub struct InvalidLabel {
    pub cost: &'static str,
    pub sample: usize,
    pub value: f64,
}

impl TargetSchema {
    /// Check every label against this schema.
    pub fn validate(self, cost: &'static str, labels: ArrayView1<f64>) -> Result<(), InvalidLabel> {
        match self {
            TargetSchema::Continuous => Ok(()),
            TargetSchema::BinarySigned => labels
                .iter()
                .position(|&y| y != 1.0 && y != -1.0)
                .map_or(Ok(()), |sample| {
                    Err(InvalidLabel {
                        cost,
                        sample,
                        value: labels[sample],
                    })
                }),
        }
    }
}

// =============================================================================
// CostFn Trait
// =============================================================================

/// A differentiable per-sample cost.
///
/// Implementors provide the loss and its derivatives for one sample; the
/// provided methods handle averaging and bulk gradient computation.
pub trait CostFn {
    /// Per-sample loss.
    fn loss(&self, prediction: f64, label: f64) -> f64;

    /// First and second derivative of [`loss`](CostFn::loss) with respect to
    /// the prediction.
    fn derivatives(&self, prediction: f64, label: f64) -> GradsTuple;

    /// Task implied by this cost.
    fn task_kind(&self) -> TaskKind;

    /// Label encoding expected by this cost.
    fn target_schema(&self) -> TargetSchema;

    /// Name of the cost (for logging).
    fn name(&self) -> &'static str;

    /// Misclassification counter for classification costs, `None` otherwise.
    fn counter(&self) -> Option<MisclassificationCount> {
        match self.task_kind() {
            TaskKind::BinaryClassification => Some(MisclassificationCount),
            TaskKind::Regression => None,
        }
    }

    /// Mean loss over all samples. Returns `0.0` for no samples.
    fn mean_cost(&self, predictions: ArrayView1<f64>, labels: ArrayView1<f64>) -> f64 {
        debug_assert_eq!(predictions.len(), labels.len());
        let n = predictions.len();
        if n == 0 {
            return 0.0;
        }
        let total: f64 = predictions
            .iter()
            .zip(labels.iter())
            .map(|(&p, &y)| self.loss(p, y))
            .sum();
        total / n as f64
    }

    /// Fill `out` with per-sample derivatives.
    fn compute_gradients_into(
        &self,
        predictions: ArrayView1<f64>,
        labels: ArrayView1<f64>,
        out: &mut Gradients,
    ) {
        debug_assert_eq!(predictions.len(), labels.len());
        debug_assert_eq!(predictions.len(), out.n_samples());
        let (grads, hess) = out.as_mut_slices();
        for (s, (&p, &y)) in predictions.iter().zip(labels.iter()).enumerate() {
            let d = self.derivatives(p, y);
            grads[s] = d.grad;
            hess[s] = d.hess;
        }
    }
}

// =============================================================================
// Cost Enum
// =============================================================================

/// Cost function enum for configuration.
///
/// Wraps every available cost and implements [`CostFn`] by delegation.
///
/// ```
/// use stumpboost::training::{Cost, CostFn, TaskKind};
///
/// let cost = Cost::softmax();
/// assert_eq!(cost.task_kind(), TaskKind::BinaryClassification);
/// assert!(cost.counter().is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cost {
    LeastSquares(LeastSquares),
    LeastAbsoluteDeviations(LeastAbsoluteDeviations),
    Softmax(Softmax),
    Perceptron(Perceptron),
}

impl Default for Cost {
    fn default() -> Self {
        Cost::least_squares()
    }
}

impl Cost {
    pub fn least_squares() -> Self {
        Cost::LeastSquares(LeastSquares)
    }

    pub fn least_absolute_deviations() -> Self {
        Cost::LeastAbsoluteDeviations(LeastAbsoluteDeviations)
    }

    pub fn softmax() -> Self {
        Cost::Softmax(Softmax)
    }

    pub fn perceptron() -> Self {
        Cost::Perceptron(Perceptron)
    }

    fn inner(&self) -> &dyn CostFn {
        match self {
            Cost::LeastSquares(c) => c,
            Cost::LeastAbsoluteDeviations(c) => c,
            Cost::Softmax(c) => c,
            Cost::Perceptron(c) => c,
        }
    }
}

impl CostFn for Cost {
    #[inline]
    fn loss(&self, prediction: f64, label: f64) -> f64 {
        self.inner().loss(prediction, label)
    }

    #[inline]
    fn derivatives(&self, prediction: f64, label: f64) -> GradsTuple {
        self.inner().derivatives(prediction, label)
    }

    fn task_kind(&self) -> TaskKind {
        self.inner().task_kind()
    }

    fn target_schema(&self) -> TargetSchema {
        self.inner().target_schema()
    }

    fn name(&self) -> &'static str {
        self.inner().name()
    }
}
