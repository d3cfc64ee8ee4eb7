//! Data handling: datasets, loading, normalization and splitting.
//!
//! # Layout
//!
//! Features are stored **feature-major**, `[n_features, n_samples]`: each row
//! is one input dimension. This matches the delimited-text format, where each
//! line is a dimension and the last line holds the labels, and keeps the
//! per-dimension sort in candidate generation contiguous.
//!
//! # Key Types
//!
//! - [`Dataset`]: immutable features + labels
//! - [`TrainValidSplit`]: seeded random partition of sample indices
//! - [`NormalizerKind`] / [`Normalizer`]: input scaling fitted on the full dataset
//! - [`io::load_delimited`]: delimited text loader

mod dataset;
pub mod io;
mod normalize;

pub use dataset::{Dataset, DatasetError, TrainValidSplit};
pub use io::{load_delimited, parse_delimited, DatasetLoadError};
pub use normalize::{Normalizer, NormalizerKind};
