//! Damped Newton's method.

use serde::{Deserialize, Serialize};

use super::{OptimizationTrace, Optimizer, OptimizerParamError, Subproblem};
use crate::training::{CostFn, Gradients};

/// Newton's method parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewtonParams {
    /// Number of Newton steps. Default: 500.
    pub max_its: usize,
    /// Diagonal damping added to the Hessian. Default: 1e-10.
    pub epsilon: f64,
}

impl Default for NewtonParams {
    fn default() -> Self {
        Self {
            max_its: 500,
            epsilon: 1e-10,
        }
    }
}

impl NewtonParams {
    pub fn validate(&self) -> Result<(), OptimizerParamError> {
        if self.max_its == 0 {
            return Err(OptimizerParamError::ZeroIterations);
        }
        if !(self.epsilon >= 0.0 && self.epsilon.is_finite()) {
            return Err(OptimizerParamError::InvalidEpsilon(self.epsilon));
        }
        Ok(())
    }
}

/// Damped Newton's method.
///
/// Each step solves `(H + εI) Δ = ∇` over the full batch and sets
/// `w ← w - Δ`. With a diagonal Hessian this is a per-weight division.
/// A weight whose damped curvature `h + ε` is zero keeps its value; with
/// `ε = 0` this is the case for a stump side no training sample falls on.
#[derive(Debug, Clone, Copy, Default)]
pub struct Newton {
    params: NewtonParams,
}

impl Newton {
    pub fn new(params: NewtonParams) -> Self {
        Self { params }
    }
}

impl Optimizer for Newton {
    fn optimize<C: CostFn + ?Sized>(
        &self,
        cost: &C,
        problem: &Subproblem<'_>,
        init: &[f64],
    ) -> OptimizationTrace {
        debug_assert_eq!(init.len(), problem.n_weights());
        let mut w = init.to_vec();
        let mut trace = OptimizationTrace::start(w.clone(), problem.cost(cost, &w));
        let mut buffer = Gradients::new(problem.n_samples());

        for _ in 0..self.params.max_its {
            let derivs = problem.full_derivatives(cost, &w, &mut buffer);
            for (wj, d) in w.iter_mut().zip(&derivs) {
                let curvature = d.hess + self.params.epsilon;
                if curvature != 0.0 {
                    *wj -= d.grad / curvature;
                }
            }
            trace.push(w.clone(), problem.cost(cost, &w));
        }

        trace
    }

    fn name(&self) -> &'static str {
        "newton"
    }
}
