//! Two-class classification costs.
//!
//! Labels are `-1` or `+1` and the model output is a real-valued margin whose
//! sign is the predicted class.

use serde::{Deserialize, Serialize};

use super::{CostFn, TargetSchema, TaskKind};
use crate::training::GradsTuple;

#[inline]
fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}

/// `ln(1 + exp(z))` without overflow for large `z`.
#[inline]
fn softplus(z: f64) -> f64 {
    if z > 0.0 {
        z + (-z).exp().ln_1p()
    } else {
        z.exp().ln_1p()
    }
}

// =============================================================================
// Softmax
// =============================================================================

/// Two-class softmax (logistic) cost.
///
/// With margin `z = -y p`:
/// - Loss: `ln(1 + exp(z))`
/// - Gradient: `-y σ(z)`
/// - Hessian: `y² σ(z) (1 - σ(z))`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Softmax;

impl CostFn for Softmax {
    #[inline]
    fn loss(&self, prediction: f64, label: f64) -> f64 {
        softplus(-label * prediction)
    }

    #[inline]
    fn derivatives(&self, prediction: f64, label: f64) -> GradsTuple {
        let s = sigmoid(-label * prediction);
        GradsTuple::new(-label * s, label * label * s * (1.0 - s))
    }

    fn task_kind(&self) -> TaskKind {
        TaskKind::BinaryClassification
    }

    fn target_schema(&self) -> TargetSchema {
        TargetSchema::BinarySigned
    }

    fn name(&self) -> &'static str {
        "softmax"
    }
}

// =============================================================================
// Perceptron
// =============================================================================

/// Perceptron (ReLU) cost.
///
/// With margin `z = -y p`:
/// - Loss: `max(0, z)`
/// - Gradient: `-y` for `z > 0`, `-y / 2` at `z = 0`, `0` otherwise
/// - Hessian: `0`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perceptron;

impl CostFn for Perceptron {
    #[inline]
    fn loss(&self, prediction: f64, label: f64) -> f64 {
        (-label * prediction).max(0.0)
    }

    #[inline]
    fn derivatives(&self, prediction: f64, label: f64) -> GradsTuple {
        let z = -label * prediction;
        let grad = if z > 0.0 {
            -label
        } else if z == 0.0 {
            -0.5 * label
        } else {
            0.0
        };
        GradsTuple::new(grad, 0.0)
    }

    fn task_kind(&self) -> TaskKind {
        TaskKind::BinaryClassification
    }

    fn target_schema(&self) -> TargetSchema {
        TargetSchema::BinarySigned
    }

    fn name(&self) -> &'static str {
        "perceptron"
    }
}
