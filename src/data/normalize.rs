//! Input normalization.
//!
//! Normalizer statistics are fitted once on the full dataset (before any
//! train/validation split) and then applied to every subset.

use ndarray::{Array1, Array2, ArrayView2, Axis};
use serde::{Deserialize, Serialize};

use super::Dataset;

/// Standard deviations below this are replaced by 1.
const MIN_STD: f64 = 1e-2;

/// Which normalization to apply to the inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizerKind {
    /// Leave inputs untouched.
    #[default]
    None,
    /// Per-dimension `(x - mean) / std`.
    Standard,
}

impl NormalizerKind {
    /// Fit the normalizer to `features` (`[n_features, n_samples]`).
    pub fn fit(self, features: ArrayView2<f64>) -> Normalizer {
        match self {
            NormalizerKind::None => Normalizer::Identity,
            NormalizerKind::Standard => {
                let n_features = features.nrows();
                let means = features
                    .mean_axis(Axis(1))
                    .unwrap_or_else(|| Array1::zeros(n_features));
                let stds = features
                    .std_axis(Axis(1), 0.0)
                    .mapv(|s| if s < MIN_STD { 1.0 } else { s });
                Normalizer::Standard { means, stds }
            }
        }
    }
}

/// A fitted normalizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Normalizer {
    Identity,
    Standard {
        means: Array1<f64>,
        stds: Array1<f64>,
    },
}

impl Normalizer {
    /// Map raw inputs into normalized space.
    pub fn transform(&self, features: ArrayView2<f64>) -> Array2<f64> {
        match self {
            Normalizer::Identity => features.to_owned(),
            Normalizer::Standard { means, stds } => {
                debug_assert_eq!(features.nrows(), means.len());
                let means = means.view().insert_axis(Axis(1));
                let stds = stds.view().insert_axis(Axis(1));
                (&features - &means) / &stds
            }
        }
    }

    /// Map normalized inputs back to the raw space.
    pub fn inverse_transform(&self, features: ArrayView2<f64>) -> Array2<f64> {
        match self {
            Normalizer::Identity => features.to_owned(),
            Normalizer::Standard { means, stds } => {
                let means = means.view().insert_axis(Axis(1));
                let stds = stds.view().insert_axis(Axis(1));
                &features * &stds + &means
            }
        }
    }

    /// Normalize the features of a dataset, keeping its labels.
    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        dataset.with_features(self.transform(dataset.features()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn identity_is_noop() {
        let x = array![[1.0, 2.0], [3.0, 4.0]];
        let norm = NormalizerKind::None.fit(x.view());
        assert_eq!(norm.transform(x.view()), x);
        assert_eq!(norm.inverse_transform(x.view()), x);
    }

    #[test]
    fn standard_centers_and_scales() {
        let x = array![[1.0, 2.0, 3.0, 4.0], [10.0, 10.0, 30.0, 30.0]];
        let norm = NormalizerKind::Standard.fit(x.view());
        let z = norm.transform(x.view());

        for row in z.rows() {
            assert_abs_diff_eq!(row.mean().unwrap(), 0.0, epsilon = 1e-12);
            assert_abs_diff_eq!(row.std(0.0), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn constant_dimension_keeps_unit_scale() {
        let x = array![[5.0, 5.0, 5.0]];
        let norm = NormalizerKind::Standard.fit(x.view());
        let z = norm.transform(x.view());
        assert_eq!(z, array![[0.0, 0.0, 0.0]]);
    }

    #[test]
    fn inverse_round_trips() {
        let x = array![[1.0, -2.0, 7.5], [0.3, 0.1, 0.2]];
        let norm = NormalizerKind::Standard.fit(x.view());
        let back = norm.inverse_transform(norm.transform(x.view()).view());
        for (a, b) in back.iter().zip(x.iter()) {
            assert_abs_diff_eq!(*a, *b, epsilon = 1e-12);
        }
    }
}
