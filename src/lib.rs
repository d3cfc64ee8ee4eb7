//! stumpboost: greedy boosting of one-dimensional decision stumps.
//!
//! Builds an additive model `bias + Σ stump_k(x)` one frozen term per round.
//! Candidate stumps sit at label changes along each sorted input dimension;
//! every round re-optimizes a random subset of them on top of the current
//! model with a pluggable optimizer and keeps the best one.
//!
//! # Key Types
//!
//! - [`StumpBoostModel`] / [`BoostRun`] - Training entry point and its results
//! - [`BoostConfig`] - Configuration builder
//! - [`Cost`] / [`OptimizerKind`] - Cost functions and subproblem optimizers
//! - [`Dataset`] - Data handling
//!
//! # Training
//!
//! Use `BoostConfig::builder()` to configure, then `StumpBoostModel::train()`.
//! See the [`model`] module for details.

// Re-export approx traits for users who want to compare predictions
pub use approx;

pub mod data;
pub mod model;
pub mod repr;
pub mod testing;
pub mod training;

// =============================================================================
// Convenience Re-exports
// =============================================================================

pub use model::{BoostConfig, BoostRun, ConfigError, StumpBoostModel};

pub use training::{BoostHistory, Cost, CostFn, OptimizerKind, TrainError, Verbosity};

pub use data::{Dataset, DatasetError, NormalizerKind};
