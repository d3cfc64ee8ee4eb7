//! In-memory dataset and train/validation splitting.
//!
//! Features are stored feature-major: `[n_features, n_samples]`, one row per
//! input dimension. Labels are a single row of length `n_samples`.

use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};
use rand::seq::SliceRandom;
use rand::Rng;

/// Dataset construction and validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    #[error("number of labels ({labels}) does not match number of samples ({samples})")]
    LabelLenMismatch { samples: usize, labels: usize },

    #[error("dataset has no input features")]
    NoFeatures,

    #[error("dataset has no samples")]
    NoSamples,

    #[error("non-finite value {value} at feature {feature}, sample {sample}")]
    NonFiniteFeature {
        feature: usize,
        sample: usize,
        value: f64,
    },

    #[error("non-finite label {value} at sample {sample}")]
    NonFiniteLabel { sample: usize, value: f64 },

    #[error("expected {expected} input features, got {got}")]
    FeatureCountMismatch { expected: usize, got: usize },
}

/// A fixed-size numeric dataset.
///
/// Immutable after construction; subsets are materialized with [`Dataset::select`].
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Array2<f64>,
    labels: Array1<f64>,
}

impl Dataset {
    /// Create a dataset from feature-major inputs and a label vector.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::NoFeatures`] if `features` has zero rows
    /// - [`DatasetError::NoSamples`] if `features` has zero columns
    /// - [`DatasetError::LabelLenMismatch`] if the label count differs from the column count
    /// - [`DatasetError::NonFiniteFeature`] / [`DatasetError::NonFiniteLabel`] on NaN or infinity
    pub fn new(features: Array2<f64>, labels: Array1<f64>) -> Result<Self, DatasetError> {
        let (n_features, n_samples) = features.dim();
        if n_features == 0 {
            return Err(DatasetError::NoFeatures);
        }
        if n_samples == 0 {
            return Err(DatasetError::NoSamples);
        }
        if labels.len() != n_samples {
            return Err(DatasetError::LabelLenMismatch {
                samples: n_samples,
                labels: labels.len(),
            });
        }

        for ((feature, sample), &value) in features.indexed_iter() {
            if !value.is_finite() {
                return Err(DatasetError::NonFiniteFeature {
                    feature,
                    sample,
                    value,
                });
            }
        }
        for (sample, &value) in labels.iter().enumerate() {
            if !value.is_finite() {
                return Err(DatasetError::NonFiniteLabel { sample, value });
            }
        }

        Ok(Self { features, labels })
    }

    /// Create a dataset from sample-major rows (`[n_samples, n_features]`).
    pub fn from_rows(rows: ArrayView2<f64>, labels: Array1<f64>) -> Result<Self, DatasetError> {
        Self::new(rows.t().to_owned(), labels)
    }

    /// Number of input dimensions.
    #[inline]
    pub fn n_features(&self) -> usize {
        self.features.nrows()
    }

    /// Number of samples.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.features.ncols()
    }

    /// Returns true if the dataset holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n_samples() == 0
    }

    /// Feature matrix, `[n_features, n_samples]`.
    #[inline]
    pub fn features(&self) -> ArrayView2<'_, f64> {
        self.features.view()
    }

    /// Values of one input dimension across all samples.
    #[inline]
    pub fn feature(&self, dim: usize) -> ArrayView1<'_, f64> {
        self.features.row(dim)
    }

    /// Label vector.
    #[inline]
    pub fn labels(&self) -> ArrayView1<'_, f64> {
        self.labels.view()
    }

    /// Materialize the samples at `indices` (in that order).
    ///
    /// An empty index list yields a dataset with zero samples but the same
    /// number of features.
    pub fn select(&self, indices: &[usize]) -> Dataset {
        Dataset {
            features: self.features.select(Axis(1), indices),
            labels: self.labels.select(Axis(0), indices),
        }
    }

    /// Replace the feature matrix, keeping the labels.
    ///
    /// Used by normalizers, which preserve the shape.
    pub(crate) fn with_features(&self, features: Array2<f64>) -> Dataset {
        debug_assert_eq!(features.dim(), self.features.dim());
        Dataset {
            features,
            labels: self.labels.clone(),
        }
    }

    /// Randomly partition the samples into training and validation subsets.
    ///
    /// See [`TrainValidSplit::random`].
    pub fn split<R: Rng + ?Sized>(
        &self,
        train_portion: f64,
        rng: &mut R,
    ) -> (TrainValidSplit, Dataset, Dataset) {
        let split = TrainValidSplit::random(self.n_samples(), train_portion, rng);
        let train = self.select(&split.train);
        let valid = self.select(&split.valid);
        (split, train, valid)
    }
}

// =============================================================================
// TrainValidSplit
// =============================================================================

/// Sample indices of a train/validation partition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrainValidSplit {
    /// Indices of training samples, in permutation order.
    pub train: Vec<usize>,
    /// Indices of validation samples, in permutation order.
    pub valid: Vec<usize>,
}

impl TrainValidSplit {
    /// Shuffle `0..n_samples` and take the first
    /// `round(train_portion * n_samples)` indices for training.
    ///
    /// Rounding is half-to-even. `train_portion` is clamped to `[0, 1]`.
    pub fn random<R: Rng + ?Sized>(n_samples: usize, train_portion: f64, rng: &mut R) -> Self {
        let mut perm: Vec<usize> = (0..n_samples).collect();
        perm.shuffle(rng);

        let n_train = train_count(n_samples, train_portion);
        let valid = perm.split_off(n_train);
        Self { train: perm, valid }
    }

    /// Number of training samples.
    pub fn n_train(&self) -> usize {
        self.train.len()
    }

    /// Number of validation samples.
    pub fn n_valid(&self) -> usize {
        self.valid.len()
    }
}

fn train_count(n_samples: usize, train_portion: f64) -> usize {
    let portion = train_portion.clamp(0.0, 1.0);
    let n_train = (portion * n_samples as f64).round_ties_even() as usize;
    n_train.min(n_samples)
}

// =============================================================================
// Tests
// =============================================================================
