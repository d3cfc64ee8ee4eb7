//! High-level boosting configuration with builder pattern.
//!
//! # Example
//!
//! ```
//! use stumpboost::data::NormalizerKind;
//! use stumpboost::model::BoostConfig;
//! use stumpboost::training::{Cost, OptimizerKind};
//!
//! // All defaults
//! let config = BoostConfig::builder().build().unwrap();
//! assert_eq!(config.n_rounds, 10);
//!
//! let config = BoostConfig::builder()
//!     .cost(Cost::softmax())
//!     .optimizer(OptimizerKind::newton())
//!     .normalizer(NormalizerKind::Standard)
//!     .train_portion(0.8)
//!     .n_rounds(25)
//!     .max_check(50)
//!     .build()
//!     .unwrap();
//! ```

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::data::NormalizerKind;
use crate::training::{BoostParams, Cost, OptimizerKind, OptimizerParamError, Verbosity};

// =============================================================================
// ConfigError
// =============================================================================

/// Errors that can occur during configuration validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("train_portion must be in [0, 1], got {0}")]
    InvalidTrainPortion(f64),

    #[error("max_check must be at least 1")]
    ZeroMaxCheck,

    #[error("invalid optimizer parameters: {0}")]
    Optimizer(#[from] OptimizerParamError),
}

// =============================================================================
// BoostConfig
// =============================================================================

/// Configuration of a complete boosting run.
#[derive(Debug, Clone, PartialEq, Builder, Serialize, Deserialize)]
#[builder(
    derive(Clone, Debug),
    finish_fn(vis = "", name = __build_internal)
)]
pub struct BoostConfig {
    /// Cost minimized by every round. Default: least squares.
    #[builder(default)]
    pub cost: Cost,

    /// Optimizer used for the bias and every candidate. Default: gradient
    /// descent, fixed step 0.1, 500 iterations, full batch.
    #[builder(default)]
    pub optimizer: OptimizerKind,

    /// Input normalization. Default: none.
    #[builder(default)]
    pub normalizer: NormalizerKind,

    /// Fraction of samples used for training; the rest is validation.
    /// Default: 1.0 (no validation).
    #[builder(default = 1.0)]
    pub train_portion: f64,

    /// Stump rounds after the bias round. Default: 10.
    #[builder(default = 10)]
    pub n_rounds: u32,

    /// Candidates evaluated per round. `None` evaluates all of them.
    pub max_check: Option<usize>,

    /// Seed for the split and the per-round candidate draw. Default: 42.
    #[builder(default = 42)]
    pub seed: u64,

    /// Verbosity level. Default: `Silent`.
    #[builder(default)]
    pub verbosity: Verbosity,
}

impl<S: boost_config_builder::IsComplete> BoostConfigBuilder<S> {
    /// Build and validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if any parameter is invalid:
    /// - `train_portion` outside `[0, 1]` or NaN
    /// - `max_check == Some(0)`
    /// - invalid optimizer parameters
    pub fn build(self) -> Result<BoostConfig, ConfigError> {
        let config = self.__build_internal();
        config.validate()?;
        Ok(config)
    }
}

impl BoostConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.train_portion) {
            return Err(ConfigError::InvalidTrainPortion(self.train_portion));
        }
        if self.max_check == Some(0) {
            return Err(ConfigError::ZeroMaxCheck);
        }
        self.optimizer.validate()?;
        Ok(())
    }

    /// Parameters of the boosting loop.
    pub fn boost_params(&self) -> BoostParams {
        BoostParams {
            n_rounds: self.n_rounds,
            max_check: self.max_check,
            verbosity: self.verbosity,
        }
    }
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self::builder().__build_internal()
    }
}
