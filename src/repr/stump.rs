//! Decision stumps and frozen stump terms.

use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

/// Which side of a stump's threshold a value falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// `value <= threshold`
    Left = 0,
    /// `value > threshold`
    Right = 1,
}

impl Side {
    /// Weight slot used by this side.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A single-threshold split over one input dimension.
///
/// ```
/// use stumpboost::repr::{Side, Stump};
///
/// let stump = Stump::new(0, 1.5);
/// assert_eq!(stump.side_of(1.5), Side::Left);
/// assert_eq!(stump.side_of(1.6), Side::Right);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stump {
    /// Input dimension the split is defined along.
    pub dim: usize,
    /// Split point.
    pub threshold: f64,
}

impl Stump {
    pub fn new(dim: usize, threshold: f64) -> Self {
        Self { dim, threshold }
    }

    /// Side for a single value of this stump's dimension.
    #[inline]
    pub fn side_of(&self, value: f64) -> Side {
        if value <= self.threshold {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Side for a sample given as its full input column.
    #[inline]
    pub fn side(&self, sample: ArrayView1<f64>) -> Side {
        self.side_of(sample[self.dim])
    }
}

/// A stump with frozen left/right values.
///
/// Contributes `weights[0]` to samples on the left of the threshold and
/// `weights[1]` to samples on the right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StumpTerm {
    pub stump: Stump,
    pub weights: [f64; 2],
}

impl StumpTerm {
    pub fn new(stump: Stump, weights: [f64; 2]) -> Self {
        Self { stump, weights }
    }

    /// Value contributed for a single value of the stump's dimension.
    #[inline]
    pub fn value_of(&self, value: f64) -> f64 {
        self.weights[self.stump.side_of(value).index()]
    }

    /// Value contributed for a sample column.
    #[inline]
    pub fn eval(&self, sample: ArrayView1<f64>) -> f64 {
        self.value_of(sample[self.stump.dim])
    }
}
