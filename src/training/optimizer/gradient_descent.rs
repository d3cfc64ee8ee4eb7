//! Gradient descent with optional mini-batches.

use serde::{Deserialize, Serialize};

use super::{OptimizationTrace, Optimizer, OptimizerParamError, Subproblem};
use crate::training::{CostFn, Gradients};

/// Step length schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepLength {
    /// The same step every iteration.
    Fixed(f64),
    /// `1 / k` at iteration `k` (1-based).
    Diminishing,
}

impl Default for StepLength {
    fn default() -> Self {
        StepLength::Fixed(0.1)
    }
}

impl StepLength {
    /// Step used at iteration `k` (1-based).
    #[inline]
    pub fn at(self, k: usize) -> f64 {
        match self {
            StepLength::Fixed(alpha) => alpha,
            StepLength::Diminishing => 1.0 / k as f64,
        }
    }
}

/// Gradient descent parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientDescentParams {
    /// Number of iterations (full sweeps over the samples). Default: 500.
    pub max_its: usize,
    /// Step length schedule. Default: `Fixed(0.1)`.
    pub step: StepLength,
    /// Mini-batch size. `None` uses the full batch.
    pub batch_size: Option<usize>,
}

impl Default for GradientDescentParams {
    fn default() -> Self {
        Self {
            max_its: 500,
            step: StepLength::default(),
            batch_size: None,
        }
    }
}

impl GradientDescentParams {
    pub fn validate(&self) -> Result<(), OptimizerParamError> {
        if self.max_its == 0 {
            return Err(OptimizerParamError::ZeroIterations);
        }
        if let StepLength::Fixed(alpha) = self.step {
            if !(alpha > 0.0 && alpha.is_finite()) {
                return Err(OptimizerParamError::InvalidStepLength(alpha));
            }
        }
        if self.batch_size == Some(0) {
            return Err(OptimizerParamError::ZeroBatchSize);
        }
        Ok(())
    }
}

/// Gradient descent.
///
/// Each iteration sweeps the samples in contiguous mini-batches, taking one
/// step per batch, then records the full-batch cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct GradientDescent {
    params: GradientDescentParams,
}

impl GradientDescent {
    pub fn new(params: GradientDescentParams) -> Self {
        Self { params }
    }
}

impl Optimizer for GradientDescent {
    fn optimize<C: CostFn + ?Sized>(
        &self,
        cost: &C,
        problem: &Subproblem<'_>,
        init: &[f64],
    ) -> OptimizationTrace {
        debug_assert_eq!(init.len(), problem.n_weights());
        let n_samples = problem.n_samples();
        let batch_size = self.params.batch_size.unwrap_or(n_samples).clamp(1, n_samples.max(1));

        let mut w = init.to_vec();
        let mut trace = OptimizationTrace::start(w.clone(), problem.cost(cost, &w));
        let mut buffer = Gradients::new(n_samples);

        for k in 1..=self.params.max_its {
            let alpha = self.params.step.at(k);
            let mut start = 0;
            while start < n_samples {
                let end = (start + batch_size).min(n_samples);
                let grads = problem.batch_derivatives(cost, &w, start..end, &mut buffer);
                for (wj, g) in w.iter_mut().zip(&grads) {
                    *wj -= alpha * g.grad;
                }
                start = end;
            }
            trace.push(w.clone(), problem.cost(cost, &w));
        }

        trace
    }

    fn name(&self) -> &'static str {
        "gradient_descent"
    }
}
