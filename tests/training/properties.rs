//! Property-based tests for candidate generation and the boosting loop.

use ndarray::{Array1, Array2};
use proptest::collection::vec as prop_vec;
use proptest::prelude::*;

use stumpboost::data::Dataset;
use stumpboost::model::{BoostConfig, StumpBoostModel};
use stumpboost::training::{
    candidates_per_dim, generate_candidates, Cost, GradientDescentParams, OptimizerKind,
};

// =============================================================================
// Strategies
// =============================================================================

/// Small feature-major datasets with few distinct values, so duplicates occur.
fn arb_dataset(signed: bool) -> impl Strategy<Value = Dataset> {
    (1usize..4, 2usize..20).prop_flat_map(move |(n_features, n_samples)| {
        let values = prop_vec(-5i32..5, n_features * n_samples);
        let labels = if signed {
            prop_vec(prop::bool::ANY.prop_map(|b| if b { 1.0 } else { -1.0 }), n_samples).boxed()
        } else {
            prop_vec((-20i32..20).prop_map(|v| v as f64 / 4.0), n_samples).boxed()
        };
        (values, labels).prop_map(move |(values, labels)| {
            let features = Array2::from_shape_vec(
                (n_features, n_samples),
                values.into_iter().map(f64::from).collect(),
            )
            .unwrap();
            Dataset::new(features, Array1::from(labels)).unwrap()
        })
    })
}

/// Label changes between neighbours after a stable sort by `dim`.
fn label_changes(data: &Dataset, dim: usize) -> usize {
    let values = data.feature(dim);
    let labels = data.labels();
    let mut order: Vec<usize> = (0..data.n_samples()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));
    order.windows(2).filter(|w| labels[w[0]] != labels[w[1]]).count()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn candidates_match_label_changes(data in arb_dataset(false)) {
        let candidates = generate_candidates(&data);
        let counts = candidates_per_dim(&candidates, data.n_features());
        for dim in 0..data.n_features() {
            prop_assert_eq!(counts[dim], label_changes(&data, dim));
        }
        // grouped by dimension, ascending
        prop_assert!(candidates.windows(2).all(|w| w[0].dim <= w[1].dim));
    }

    #[test]
    fn train_cost_is_non_increasing(
        data in arb_dataset(false),
        rounds in 1u32..5,
        max_check in 1usize..6,
        seed in any::<u64>(),
    ) {
        let config = BoostConfig::builder()
            .optimizer(OptimizerKind::GradientDescent(GradientDescentParams {
                max_its: 25,
                ..Default::default()
            }))
            .n_rounds(rounds)
            .max_check(max_check)
            .seed(seed)
            .build()
            .unwrap();
        let run = StumpBoostModel::train(&data, &config).unwrap();
        let costs = &run.history.train_costs;
        prop_assert!(costs.windows(2).all(|w| w[1] <= w[0]));
        prop_assert_eq!(run.history.selected.len(), costs.len());
        prop_assert_eq!(run.history.cost_traces.len(), costs.len());
    }

    #[test]
    fn softmax_with_validation_tracks_all_series(
        data in arb_dataset(true),
        seed in any::<u64>(),
    ) {
        let config = BoostConfig::builder()
            .cost(Cost::softmax())
            .optimizer(OptimizerKind::newton())
            .train_portion(0.5)
            .n_rounds(3)
            .seed(seed)
            .build()
            .unwrap();
        let run = StumpBoostModel::train(&data, &config).unwrap();
        let n = run.n_rounds();
        prop_assert!(run.history.train_costs.windows(2).all(|w| w[1] <= w[0]));
        prop_assert_eq!(run.history.train_counts.as_ref().map(Vec::len), Some(n));
        if run.split.n_valid() > 0 {
            prop_assert_eq!(run.history.valid_costs.as_ref().map(Vec::len), Some(n));
            prop_assert_eq!(run.history.valid_counts.as_ref().map(Vec::len), Some(n));
        } else {
            prop_assert!(run.history.valid_costs.is_none());
        }
    }
}
