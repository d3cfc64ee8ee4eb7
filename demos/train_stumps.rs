//! Train a stump-boosted classifier on synthetic data and print its history.
//!
//! Run with `RUST_LOG=info` (or `debug` to see every candidate).
//! An optional argument names a delimited-text dataset: one line per input
//! dimension, last line holding `±1` labels, fields separated by commas.

use std::error::Error;

use tracing_subscriber::EnvFilter;

use stumpboost::data::{load_delimited, NormalizerKind};
use stumpboost::model::{BoostConfig, StumpBoostModel};
use stumpboost::testing::linear_classification;
use stumpboost::training::{Cost, OptimizerKind, Verbosity};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let data = match std::env::args().nth(1) {
        Some(path) => load_delimited(path, ',')?,
        None => linear_classification(2, 200, 42, 0.2)?,
    };

    let config = BoostConfig::builder()
        .cost(Cost::softmax())
        .optimizer(OptimizerKind::newton())
        .normalizer(NormalizerKind::Standard)
        .train_portion(0.7)
        .n_rounds(15)
        .max_check(40)
        .verbosity(Verbosity::Info)
        .build()?;

    let run = StumpBoostModel::train(&data, &config)?;

    println!("round  train_cost  valid_cost  train_miss  valid_miss");
    for round in 0..run.n_rounds() {
        let valid_cost = run.history.valid_costs.as_ref().map_or(f64::NAN, |c| c[round]);
        let train_miss = run.history.train_counts.as_ref().map_or(0, |c| c[round]);
        let valid_miss = run.history.valid_counts.as_ref().map_or(0, |c| c[round]);
        println!(
            "{round:>5}  {:>10.5}  {valid_cost:>10.5}  {train_miss:>10}  {valid_miss:>10}",
            run.history.train_costs[round]
        );
    }

    if let Some(best) = run.history.best_valid_round() {
        println!("best validation round: {best}");
    }

    let out = std::env::temp_dir().join("stumpboost_history.json");
    run.history.write_json(&out)?;
    println!("history written to {}", out.display());
    Ok(())
}
