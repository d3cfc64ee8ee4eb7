//! Model representations.
//!
//! - [`Stump`]: a `(dimension, threshold)` split
//! - [`StumpTerm`]: a stump with frozen left/right values
//! - [`AdditiveModel`]: bias plus an ordered list of terms

mod additive;
mod stump;

pub use additive::AdditiveModel;
pub use stump::{Side, Stump, StumpTerm};
