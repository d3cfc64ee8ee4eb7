//! Regression costs.

use serde::{Deserialize, Serialize};

use super::{CostFn, TargetSchema, TaskKind};
use crate::training::GradsTuple;

// =============================================================================
// Least Squares
// =============================================================================

/// Squared error.
///
/// - Loss: `(p - y)²`
/// - Gradient: `2 (p - y)`
/// - Hessian: `2`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeastSquares;

impl CostFn for LeastSquares {
    #[inline]
    fn loss(&self, prediction: f64, label: f64) -> f64 {
        let r = prediction - label;
        r * r
    }

    #[inline]
    fn derivatives(&self, prediction: f64, label: f64) -> GradsTuple {
        GradsTuple::new(2.0 * (prediction - label), 2.0)
    }

    fn task_kind(&self) -> TaskKind {
        TaskKind::Regression
    }

    fn target_schema(&self) -> TargetSchema {
        TargetSchema::Continuous
    }

    fn name(&self) -> &'static str {
        "least_squares"
    }
}

// =============================================================================
// Least Absolute Deviations
// =============================================================================

/// Absolute error.
///
/// - Loss: `|p - y|`
/// - Gradient: `sign(p - y)`, `0` at `p = y`
/// - Hessian: `0` (Newton steps rely on the epsilon floor)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeastAbsoluteDeviations;

impl CostFn for LeastAbsoluteDeviations {
    #[inline]
    fn loss(&self, prediction: f64, label: f64) -> f64 {
        (prediction - label).abs()
    }

    #[inline]
    fn derivatives(&self, prediction: f64, label: f64) -> GradsTuple {
        let r = prediction - label;
        let grad = if r > 0.0 {
            1.0
        } else if r < 0.0 {
            -1.0
        } else {
            0.0
        };
        GradsTuple::new(grad, 0.0)
    }

    fn task_kind(&self) -> TaskKind {
        TaskKind::Regression
    }

    fn target_schema(&self) -> TargetSchema {
        TargetSchema::Continuous
    }

    fn name(&self) -> &'static str {
        "least_absolute_deviations"
    }
}
