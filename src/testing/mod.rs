//! Synthetic datasets for tests, benches and demos.

use ndarray::{Array1, Array2};
use rand::prelude::*;

use crate::data::{Dataset, DatasetError};

/// Random feature-major inputs (`[n_features, n_samples]`), uniform in `[min, max]`.
pub fn random_features(n_features: usize, n_samples: usize, seed: u64, min: f64, max: f64) -> Array2<f64> {
    assert!(max >= min);
    let mut rng = StdRng::seed_from_u64(seed);
    let width = max - min;
    Array2::from_shape_fn((n_features, n_samples), |_| min + rng.gen::<f64>() * width)
}

/// A noisy sine wave over the first dimension: `y = sin(2π x₀) + noise`.
pub fn sine_regression(n_features: usize, n_samples: usize, seed: u64, noise: f64) -> Result<Dataset, DatasetError> {
    let features = random_features(n_features, n_samples, seed, 0.0, 1.0);
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let labels: Array1<f64> = features
        .row(0)
        .iter()
        .map(|&x| (std::f64::consts::TAU * x).sin() + (rng.gen::<f64>() * 2.0 - 1.0) * noise)
        .collect();
    Dataset::new(features, labels)
}

/// Two classes labelled `±1` by the sign of a random linear score plus noise.
pub fn linear_classification(n_features: usize, n_samples: usize, seed: u64, noise: f64) -> Result<Dataset, DatasetError> {
    let features = random_features(n_features, n_samples, seed, -1.0, 1.0);
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(1));
    let weights: Vec<f64> = (0..n_features).map(|_| rng.gen::<f64>() * 2.0 - 1.0).collect();
    let labels: Array1<f64> = features
        .columns()
        .into_iter()
        .map(|x| {
            let score: f64 = x.iter().zip(&weights).map(|(v, w)| v * w).sum::<f64>()
                + (rng.gen::<f64>() * 2.0 - 1.0) * noise;
            if score > 0.0 {
                1.0
            } else {
                -1.0
            }
        })
        .collect();
    Dataset::new(features, labels)
}
