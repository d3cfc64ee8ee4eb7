//! Additive stump model.

use ndarray::{Array1, ArrayView1, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use super::StumpTerm;

/// Bias plus an ordered list of frozen stump terms.
///
/// Prediction is a left-to-right fold: `bias + term_0(x) + term_1(x) + ...`.
/// Keeping the accumulation order fixed means a model extended by a
/// zero-weight term predicts bit-identical values.
///
/// # Example
///
/// ```
/// use stumpboost::repr::{AdditiveModel, Stump, StumpTerm};
///
/// let mut model = AdditiveModel::with_bias(0.5);
/// model.push(StumpTerm::new(Stump::new(0, 0.0), [-1.0, 1.0]));
///
/// assert_eq!(model.predict_sample(ndarray::array![-2.0].view()), -0.5);
/// assert_eq!(model.predict_sample(ndarray::array![2.0].view()), 1.5);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditiveModel {
    bias: f64,
    terms: Vec<StumpTerm>,
}

impl AdditiveModel {
    /// A constant model.
    pub fn with_bias(bias: f64) -> Self {
        Self {
            bias,
            terms: Vec::new(),
        }
    }

    #[inline]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn set_bias(&mut self, bias: f64) {
        self.bias = bias;
    }

    /// Frozen terms, in the order they were added.
    #[inline]
    pub fn terms(&self) -> &[StumpTerm] {
        &self.terms
    }

    /// Number of stump terms (excluding the bias).
    #[inline]
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    /// Append a term. Earlier terms are never modified.
    pub fn push(&mut self, term: StumpTerm) {
        self.terms.push(term);
    }

    /// The model as it stood after `n_terms` boosting rounds.
    ///
    /// `n_terms` larger than the current term count returns a full copy.
    pub fn truncated(&self, n_terms: usize) -> AdditiveModel {
        AdditiveModel {
            bias: self.bias,
            terms: self.terms[..n_terms.min(self.terms.len())].to_vec(),
        }
    }

    /// Predict one sample given its input column.
    pub fn predict_sample(&self, sample: ArrayView1<f64>) -> f64 {
        self.terms
            .iter()
            .fold(self.bias, |acc, term| acc + term.eval(sample))
    }

    /// Predict every sample of a feature-major matrix (`[n_features, n_samples]`).
    pub fn predict(&self, features: ArrayView2<f64>) -> Array1<f64> {
        let mut out = Array1::from_elem(features.ncols(), self.bias);
        for term in &self.terms {
            accumulate_term(term, features, &mut out);
        }
        out
    }
}

/// Add one term's contribution to running predictions.
fn accumulate_term(term: &StumpTerm, features: ArrayView2<f64>, predictions: &mut Array1<f64>) {
    let column = features.index_axis(Axis(0), term.stump.dim);
    for (pred, &value) in predictions.iter_mut().zip(column.iter()) {
        *pred += term.value_of(value);
    }
}
