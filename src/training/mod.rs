//! Training infrastructure for stump boosting.
//!
//! ## Shared Infrastructure
//!
//! - [`Gradients`]: Structure-of-Arrays gradient storage
//! - [`CostFn`], [`Cost`]: Differentiable per-sample costs
//! - [`MisclassificationCount`]: Secondary classification metric
//! - [`TrainingLogger`], [`Verbosity`]: Structured logging
//!
//! ## Boosting
//!
//! - [`generate_candidates`]: Stumps at label changes along each sorted dimension
//! - [`Subproblem`], [`Optimizer`], [`OptimizerKind`]: Fitting one new term
//! - [`StumpBooster`]: The greedy round loop
//! - [`BoostHistory`]: Per-round costs, counts and optimizer traces

mod booster;
mod candidates;
mod gradients;
mod history;
mod logger;
mod metrics;
mod objectives;
mod optimizer;

pub use booster::{BoostParams, StumpBooster, TrainError};
pub use candidates::{candidates_per_dim, generate_candidates};
pub use gradients::{GradsTuple, Gradients};
pub use history::BoostHistory;
pub use logger::{RoundSummary, TrainingLogger, Verbosity};
pub use metrics::MisclassificationCount;
pub use objectives::{
    Cost, CostFn, InvalidLabel, LeastAbsoluteDeviations, LeastSquares, Perceptron, Softmax,
    TargetSchema, TaskKind,
};
pub use optimizer::{
    GradientDescent, GradientDescentParams, Newton, NewtonParams, OptimizationTrace, Optimizer,
    OptimizerKind, OptimizerParamError, StepLength, Subproblem,
};
