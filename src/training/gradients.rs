//! Per-sample gradient storage.
//!
//! Gradients and hessians are kept in separate contiguous arrays
//! (Structure-of-Arrays), one entry per training sample:
//!
//! ```text
//! grads: [s0, s1, ..., sN]
//! hess:  [s0, s1, ..., sN]
//! ```
//!
//! Entries are derivatives of the per-sample loss with respect to the
//! sample's prediction. Reducing them onto weights is the subproblem's job.

/// First and second derivative of a per-sample loss.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GradsTuple {
    pub grad: f64,
    pub hess: f64,
}

impl GradsTuple {
    #[inline]
    pub fn new(grad: f64, hess: f64) -> Self {
        Self { grad, hess }
    }
}

/// Structure-of-Arrays gradient buffer.
///
/// # Example
///
/// ```
/// use stumpboost::training::Gradients;
///
/// let mut buffer = Gradients::new(3);
/// buffer.set(1, -0.5, 2.0);
///
/// assert_eq!(buffer.get(1), (-0.5, 2.0));
/// assert_eq!(buffer.grads(), &[0.0, -0.5, 0.0]);
/// ```
#[derive(Debug, Clone)]
pub struct Gradients {
    /// Gradient values (∂ℓ/∂pred).
    grads: Vec<f64>,
    /// Hessian values (∂²ℓ/∂pred²).
    hess: Vec<f64>,
}

impl Gradients {
    /// Create a zeroed buffer for `n_samples` samples.
    pub fn new(n_samples: usize) -> Self {
        Self {
            grads: vec![0.0; n_samples],
            hess: vec![0.0; n_samples],
        }
    }

    /// Number of samples in the buffer.
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.grads.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grads.is_empty()
    }

    /// Reset all gradients and hessians to zero.
    pub fn reset(&mut self) {
        self.grads.fill(0.0);
        self.hess.fill(0.0);
    }

    #[inline]
    pub fn get(&self, sample: usize) -> (f64, f64) {
        (self.grads[sample], self.hess[sample])
    }

    #[inline]
    pub fn set(&mut self, sample: usize, grad: f64, hess: f64) {
        self.grads[sample] = grad;
        self.hess[sample] = hess;
    }

    #[inline]
    pub fn grads(&self) -> &[f64] {
        &self.grads
    }

    #[inline]
    pub fn hess(&self) -> &[f64] {
        &self.hess
    }

    /// Gradients and hessians as a mutable slice pair.
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [f64], &mut [f64]) {
        (&mut self.grads, &mut self.hess)
    }

    /// Sum gradients and hessians per bucket over `samples`.
    ///
    /// `buckets[s]` is the bucket of sample `s`. Returns one [`GradsTuple`]
    /// per bucket.
    pub fn sum_by_bucket(
        &self,
        buckets: &[usize],
        samples: std::ops::Range<usize>,
        n_buckets: usize,
    ) -> Vec<GradsTuple> {
        debug_assert_eq!(buckets.len(), self.n_samples());
        let mut sums = vec![GradsTuple::default(); n_buckets];
        for s in samples {
            let slot = &mut sums[buckets[s]];
            slot.grad += self.grads[s];
            slot.hess += self.hess[s];
        }
        sums
    }
}
