//! Trained stump model and the training entry point.

use ndarray::{Array1, ArrayView2};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

use super::BoostConfig;
use crate::data::{Dataset, DatasetError, Normalizer, TrainValidSplit};
use crate::repr::{AdditiveModel, Stump};
use crate::training::{generate_candidates, BoostHistory, CostFn, StumpBooster, TrainError};

/// A trained additive stump model together with its input normalizer.
///
/// # Example
///
/// ```
/// use ndarray::array;
/// use stumpboost::data::Dataset;
/// use stumpboost::model::{BoostConfig, StumpBoostModel};
/// use stumpboost::training::OptimizerKind;
///
/// let data = Dataset::new(
///     array![[0.0, 1.0, 2.0, 3.0]],
///     array![1.0, 1.0, 3.0, 3.0],
/// )
/// .unwrap();
/// let config = BoostConfig::builder()
///     .optimizer(OptimizerKind::newton())
///     .n_rounds(1)
///     .build()
///     .unwrap();
///
/// let run = StumpBoostModel::train(&data, &config).unwrap();
/// let preds = run.model.predict(array![[0.5, 2.5]].view()).unwrap();
/// assert!((preds[0] - 1.0).abs() < 1e-6);
/// assert!((preds[1] - 3.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StumpBoostModel {
    model: AdditiveModel,
    normalizer: Normalizer,
    n_features: usize,
}

impl StumpBoostModel {
    /// Wrap an additive model that operates in `normalizer`'s output space.
    pub fn new(model: AdditiveModel, normalizer: Normalizer, n_features: usize) -> Self {
        Self {
            model,
            normalizer,
            n_features,
        }
    }

    /// Train on `dataset`.
    ///
    /// The normalizer is fitted on the full dataset, samples are then split
    /// with a generator seeded from `config.seed`, and candidates are taken
    /// from the full normalized dataset before boosting on the training split.
    ///
    /// # Errors
    ///
    /// - [`TrainError::InvalidConfig`] if `config` fails [`BoostConfig::validate`]
    /// - [`TrainError::InvalidLabel`] if a label does not fit the cost
    /// - [`TrainError::EmptyTrainingSplit`] if `train_portion` leaves no training samples
    pub fn train(dataset: &Dataset, config: &BoostConfig) -> Result<BoostRun, TrainError> {
        config.validate()?;
        config
            .cost
            .target_schema()
            .validate(config.cost.name(), dataset.labels())?;

        let normalizer = config.normalizer.fit(dataset.features());
        let normalized = normalizer.apply(dataset);

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
        let (split, train, valid) = normalized.split(config.train_portion, &mut rng);
        let candidates = generate_candidates(&normalized);

        let booster = StumpBooster::new(config.cost, config.optimizer, config.boost_params());
        let (model, history) = booster.boost(&train, &valid, &candidates, &mut rng)?;

        Ok(BoostRun {
            model: StumpBoostModel::new(model, normalizer, dataset.n_features()),
            history,
            candidates,
            split,
        })
    }

    /// The additive model in normalized input space.
    pub fn additive(&self) -> &AdditiveModel {
        &self.model
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Predict raw (un-normalized) inputs, `[n_features, n_samples]`.
    pub fn predict(&self, features: ArrayView2<f64>) -> Result<Array1<f64>, DatasetError> {
        if features.nrows() != self.n_features {
            return Err(DatasetError::FeatureCountMismatch {
                expected: self.n_features,
                got: features.nrows(),
            });
        }
        let normalized = self.normalizer.transform(features);
        Ok(self.model.predict(normalized.view()))
    }

    /// Predict a dataset, whose features are raw.
    pub fn predict_dataset(&self, dataset: &Dataset) -> Result<Array1<f64>, DatasetError> {
        self.predict(dataset.features())
    }
}

/// Everything a boosting run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostRun {
    /// Final model.
    pub model: StumpBoostModel,
    /// Per-round costs, counts and optimizer traces.
    pub history: BoostHistory,
    /// Candidate list the rounds drew from; `history.selected` indexes into it.
    pub candidates: Vec<Stump>,
    /// Sample indices of the train/validation partition.
    pub split: TrainValidSplit,
}

impl BoostRun {
    /// The model as it stood after `round` rounds (`0` is bias only).
    pub fn model_at(&self, round: usize) -> StumpBoostModel {
        StumpBoostModel {
            model: self.model.model.truncated(round),
            normalizer: self.model.normalizer.clone(),
            n_features: self.model.n_features,
        }
    }

    /// Rounds completed, the bias round included.
    pub fn n_rounds(&self) -> usize {
        self.history.n_rounds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::NormalizerKind;
    use crate::model::ConfigError;
    use crate::training::{Cost, OptimizerKind};
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    fn two_blobs() -> Dataset {
        Dataset::new(
            array![
                [-2.0, -1.5, -1.0, 1.0, 1.5, 2.0, -1.8, 1.2],
                [0.3, -0.2, 0.1, 0.2, -0.1, 0.0, 0.4, -0.3]
            ],
            array![-1.0, -1.0, -1.0, 1.0, 1.0, 1.0, -1.0, 1.0],
        )
        .unwrap()
    }

    #[test]
    fn classification_run_tracks_counts() {
        let config = BoostConfig::builder()
            .cost(Cost::softmax())
            .optimizer(OptimizerKind::newton())
            .normalizer(NormalizerKind::Standard)
            .train_portion(0.75)
            .n_rounds(3)
            .build()
            .unwrap();
        let run = StumpBoostModel::train(&two_blobs(), &config).unwrap();

        assert_eq!(run.split.n_train(), 6);
        assert_eq!(run.split.n_valid(), 2);
        assert_eq!(run.n_rounds(), 4);
        assert_eq!(run.history.train_counts.as_ref().unwrap().len(), 4);
        assert_eq!(run.history.valid_counts.as_ref().unwrap().len(), 4);
        assert_eq!(run.history.train_counts.as_ref().unwrap()[3], 0);
    }

    #[test]
    fn model_at_matches_history() {
        let data = two_blobs();
        let config = BoostConfig::builder()
            .cost(Cost::softmax())
            .optimizer(OptimizerKind::newton())
            .n_rounds(2)
            .build()
            .unwrap();
        let run = StumpBoostModel::train(&data, &config).unwrap();

        for round in 0..run.n_rounds() {
            let preds = run.model_at(round).predict_dataset(&data).unwrap();
            let cost = config.cost.mean_cost(preds.view(), data.labels());
            assert_abs_diff_eq!(cost, run.history.train_costs[round], epsilon = 1e-12);
        }
    }

    #[test]
    fn predict_checks_feature_count() {
        let run = StumpBoostModel::train(&two_blobs(), &BoostConfig::default()).unwrap();
        let err = run.model.predict(array![[1.0]].view()).unwrap_err();
        assert_eq!(
            err,
            DatasetError::FeatureCountMismatch {
                expected: 2,
                got: 1
            }
        );
    }

    #[test]
    fn rejects_bad_labels_before_splitting() {
        let data = Dataset::new(array![[0.0, 1.0]], array![0.0, 1.0]).unwrap();
        let config = BoostConfig::builder().cost(Cost::perceptron()).build().unwrap();
        let err = StumpBoostModel::train(&data, &config).unwrap_err();
        assert!(matches!(err, TrainError::InvalidLabel(ref e) if e.sample == 0));
    }

    #[test]
    fn rejects_config_built_without_builder() {
        let config = BoostConfig {
            max_check: Some(0),
            ..BoostConfig::default()
        };
        let err = StumpBoostModel::train(&two_blobs(), &config).unwrap_err();
        assert_eq!(err, TrainError::InvalidConfig(ConfigError::ZeroMaxCheck));
    }

    #[test]
    fn empty_training_split() {
        let config = BoostConfig::builder().train_portion(0.0).build().unwrap();
        let err = StumpBoostModel::train(&two_blobs(), &config).unwrap_err();
        assert_eq!(err, TrainError::EmptyTrainingSplit { n_samples: 8 });
    }
}
