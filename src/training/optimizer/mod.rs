//! Iterative optimizers for the per-round subproblem.
//!
//! Each boosting round fits the weights of one new term while the rest of the
//! model stays frozen. Every sample activates exactly one weight (its side of
//! the stump, or the single bias weight), so the subproblem is
//! piecewise-constant:
//!
//! ```text
//! pred[p] = offset[p] + w[bucket[p]]
//! ∂cost/∂w[k]   = Σ_{p in batch, bucket[p] = k} ℓ'(pred[p], y[p]) / |batch|
//! ∂²cost/∂w[k]² = Σ_{p in batch, bucket[p] = k} ℓ''(pred[p], y[p]) / |batch|
//! ```
//!
//! The Hessian is diagonal. Optimizers return an [`OptimizationTrace`] holding
//! every iterate (starting with the initial point) and its full-batch cost.

mod gradient_descent;
mod newton;

pub use gradient_descent::{GradientDescent, GradientDescentParams, StepLength};
pub use newton::{Newton, NewtonParams};

use std::ops::Range;

use ndarray::{Array1, ArrayView1, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::repr::Stump;
use crate::training::{CostFn, Gradients, GradsTuple};

// =============================================================================
// Subproblem
// =============================================================================

/// Weights of one new term on top of frozen predictions.
#[derive(Debug, Clone)]
pub struct Subproblem<'a> {
    offsets: ArrayView1<'a, f64>,
    labels: ArrayView1<'a, f64>,
    buckets: Vec<usize>,
    n_weights: usize,
}

impl<'a> Subproblem<'a> {
    /// A single weight shared by every sample.
    pub fn bias(offsets: ArrayView1<'a, f64>, labels: ArrayView1<'a, f64>) -> Self {
        debug_assert_eq!(offsets.len(), labels.len());
        Self {
            buckets: vec![0; offsets.len()],
            offsets,
            labels,
            n_weights: 1,
        }
    }

    /// Left/right weights of `stump` over the samples of `features`
    /// (`[n_features, n_samples]`).
    pub fn stump(
        stump: &Stump,
        features: ArrayView2<'_, f64>,
        offsets: ArrayView1<'a, f64>,
        labels: ArrayView1<'a, f64>,
    ) -> Self {
        debug_assert_eq!(offsets.len(), labels.len());
        debug_assert_eq!(features.ncols(), labels.len());
        let buckets = features
            .row(stump.dim)
            .iter()
            .map(|&v| stump.side_of(v).index())
            .collect();
        Self {
            offsets,
            labels,
            buckets,
            n_weights: 2,
        }
    }

    #[inline]
    pub fn n_samples(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn n_weights(&self) -> usize {
        self.n_weights
    }

    /// Weight slot activated by each sample.
    #[inline]
    pub fn buckets(&self) -> &[usize] {
        &self.buckets
    }

    /// Predictions of the frozen model plus the new term with weights `w`.
    pub fn predictions(&self, w: &[f64]) -> Array1<f64> {
        debug_assert_eq!(w.len(), self.n_weights);
        self.offsets
            .iter()
            .zip(&self.buckets)
            .map(|(&offset, &bucket)| offset + w[bucket])
            .collect()
    }

    /// Mean cost over every sample.
    pub fn cost<C: CostFn + ?Sized>(&self, cost: &C, w: &[f64]) -> f64 {
        let preds = self.predictions(w);
        cost.mean_cost(preds.view(), self.labels)
    }

    /// Gradient and Hessian diagonal over the whole sample set.
    pub fn full_derivatives<C: CostFn + ?Sized>(
        &self,
        cost: &C,
        w: &[f64],
        buffer: &mut Gradients,
    ) -> Vec<GradsTuple> {
        let preds = self.predictions(w);
        cost.compute_gradients_into(preds.view(), self.labels, buffer);
        self.reduce(buffer, 0..self.n_samples())
    }

    /// Gradient and Hessian diagonal over the contiguous sample range `batch`.
    pub fn batch_derivatives<C: CostFn + ?Sized>(
        &self,
        cost: &C,
        w: &[f64],
        batch: Range<usize>,
        buffer: &mut Gradients,
    ) -> Vec<GradsTuple> {
        for s in batch.clone() {
            let d = cost.derivatives(self.offsets[s] + w[self.buckets[s]], self.labels[s]);
            buffer.set(s, d.grad, d.hess);
        }
        self.reduce(buffer, batch)
    }

    fn reduce(&self, buffer: &Gradients, batch: Range<usize>) -> Vec<GradsTuple> {
        let len = batch.len();
        let mut sums = buffer.sum_by_bucket(&self.buckets, batch, self.n_weights);
        if len > 0 {
            let scale = 1.0 / len as f64;
            for sum in &mut sums {
                sum.grad *= scale;
                sum.hess *= scale;
            }
        }
        sums
    }
}

// =============================================================================
// OptimizationTrace
// =============================================================================

/// Weight and cost history of one optimizer run.
///
/// Always holds at least the initial point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationTrace {
    weights: Vec<Vec<f64>>,
    costs: Vec<f64>,
}

impl OptimizationTrace {
    /// Start a trace at the initial iterate.
    pub fn start(init: Vec<f64>, cost: f64) -> Self {
        Self {
            weights: vec![init],
            costs: vec![cost],
        }
    }

    pub fn push(&mut self, weights: Vec<f64>, cost: f64) {
        self.weights.push(weights);
        self.costs.push(cost);
    }

    /// Number of recorded iterates, including the initial point.
    #[inline]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn weights(&self) -> &[Vec<f64>] {
        &self.weights
    }

    pub fn costs(&self) -> &[f64] {
        &self.costs
    }

    pub fn into_costs(self) -> Vec<f64> {
        self.costs
    }

    /// Index of the best iterate.
    ///
    /// The first index holding the smallest non-NaN cost; `0` when every cost
    /// is NaN.
    pub fn best_index(&self) -> usize {
        argmin(&self.costs)
    }

    /// Weights and cost of the best iterate.
    pub fn best(&self) -> (&[f64], f64) {
        let i = self.best_index();
        (&self.weights[i], self.costs[i])
    }
}

fn argmin(costs: &[f64]) -> usize {
    let mut best: Option<(usize, f64)> = None;
    for (i, &c) in costs.iter().enumerate() {
        if c.is_nan() {
            continue;
        }
        match best {
            Some((_, b)) if c >= b => {}
            _ => best = Some((i, c)),
        }
    }
    best.map_or(0, |(i, _)| i)
}

// =============================================================================
// Optimizer Trait
// =============================================================================

/// An iterative method for a [`Subproblem`].
pub trait Optimizer {
    /// Run from `init` and return every iterate with its full-batch cost.
    fn optimize<C: CostFn + ?Sized>(
        &self,
        cost: &C,
        problem: &Subproblem<'_>,
        init: &[f64],
    ) -> OptimizationTrace;

    /// Name of the optimizer (for logging).
    fn name(&self) -> &'static str;
}

/// Invalid optimizer parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OptimizerParamError {
    #[error("max_its must be at least 1")]
    ZeroIterations,

    #[error("fixed step length must be positive and finite, got {0}")]
    InvalidStepLength(f64),

    #[error("epsilon must be non-negative and finite, got {0}")]
    InvalidEpsilon(f64),

    #[error("batch_size must be at least 1")]
    ZeroBatchSize,
}

// =============================================================================
// OptimizerKind
// =============================================================================

/// Optimizer selection for configuration.
///
/// ```
/// use stumpboost::training::OptimizerKind;
///
/// let gd = OptimizerKind::default();
/// assert_eq!(gd.max_its(), 500);
/// assert!(OptimizerKind::newton().validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptimizerKind {
    GradientDescent(GradientDescentParams),
    Newton(NewtonParams),
}

impl Default for OptimizerKind {
    fn default() -> Self {
        OptimizerKind::GradientDescent(GradientDescentParams::default())
    }
}

impl OptimizerKind {
    /// Gradient descent with default parameters.
    pub fn gradient_descent() -> Self {
        Self::default()
    }

    /// Damped Newton's method with default parameters.
    pub fn newton() -> Self {
        OptimizerKind::Newton(NewtonParams::default())
    }

    pub fn max_its(&self) -> usize {
        match self {
            OptimizerKind::GradientDescent(p) => p.max_its,
            OptimizerKind::Newton(p) => p.max_its,
        }
    }

    pub fn validate(&self) -> Result<(), OptimizerParamError> {
        match self {
            OptimizerKind::GradientDescent(p) => p.validate(),
            OptimizerKind::Newton(p) => p.validate(),
        }
    }
}

impl Optimizer for OptimizerKind {
    fn optimize<C: CostFn + ?Sized>(
        &self,
        cost: &C,
        problem: &Subproblem<'_>,
        init: &[f64],
    ) -> OptimizationTrace {
        match self {
            OptimizerKind::GradientDescent(p) => GradientDescent::new(*p).optimize(cost, problem, init),
            OptimizerKind::Newton(p) => Newton::new(*p).optimize(cost, problem, init),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            OptimizerKind::GradientDescent(_) => "gradient_descent",
            OptimizerKind::Newton(_) => "newton",
        }
    }
}
