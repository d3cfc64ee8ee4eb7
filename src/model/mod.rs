//! High-level model API.
//!
//! - [`BoostConfig`]: run configuration, built and validated with a builder
//! - [`StumpBoostModel`]: trained model plus input normalizer
//! - [`BoostRun`]: final model, history, candidates and split of one run
//!
//! ```
//! use ndarray::array;
//! use stumpboost::data::Dataset;
//! use stumpboost::model::{BoostConfig, StumpBoostModel};
//!
//! let data = Dataset::new(array![[0.0, 1.0, 2.0]], array![0.0, 0.0, 1.0]).unwrap();
//! let run = StumpBoostModel::train(&data, &BoostConfig::default()).unwrap();
//! assert_eq!(run.n_rounds(), 11);
//! ```

mod config;
mod stumps;

pub use config::{BoostConfig, BoostConfigBuilder, ConfigError};
pub use stumps::{BoostRun, StumpBoostModel};
