use getset::CopyGetters;
use tracing::trace;
use typed_builder::TypedBuilder;

use crate::{expect_messages::EXPECT_CONVERSION, numeric::Numeric};

/// Welford online algorithm for estimating the mean and the sample variance.
///
/// Holds the running count, mean and sum of squared deviations from the mean.
/// A seeded instance, e.g. to resume a prior partial computation, is created with
/// `WelfordOnline::builder()`.
///
/// # Example
/// ```
/// use running_variance::prelude::*;
///
/// let mut acc = WelfordOnline::<f64>::new();
/// for x in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.update(x);
/// }
/// assert_eq!(acc.count(), 8);
/// assert_eq!(acc.mean(), 5.0);
/// assert!((acc.variance().unwrap() - 32.0 / 7.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, TypedBuilder, CopyGetters)]
pub struct WelfordOnline<F>
where
    F: Numeric,
{
    /// The number of values absorbed, including the seeded ones.
    #[getset(get_copy = "pub")]
    count: u64,

    /// The running mean of all absorbed values.
    #[getset(get_copy = "pub")]
    mean: F,

    /// The running sum of squared deviations from the mean (M2).
    #[getset(get_copy = "pub")]
    sum_sq_dev: F,
}

impl<F> Default for WelfordOnline<F>
where
    F: Numeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<F> std::fmt::Display for WelfordOnline<F>
where
    F: Numeric,
{
    #[mutants::skip]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "WelfordOnline( count: {}, mean: {}, sum_sq_dev: {} )",
            self.count, self.mean, self.sum_sq_dev
        )
    }
}

impl<F> WelfordOnline<F>
where
    F: Numeric,
{
    /// Create a new instance with zeroed state.
    pub fn new() -> Self {
        Self {
            count: 0,
            mean: F::zero(),
            sum_sq_dev: F::zero(),
        }
    }

    /// Add a new value to update the estimates.
    #[inline]
    pub fn update(&mut self, x: F) {
        trace!("update: {x}, self: {self}");
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / F::from(self.count).expect(EXPECT_CONVERSION);
        self.sum_sq_dev += delta * (x - self.mean);
    }

    /// Return the unbiased sample variance, or `None` if less than two values were absorbed.
    /// Floating point drift below zero is clamped to zero, NaN stays NaN.
    #[inline]
    pub fn variance(&self) -> Option<F> {
        if self.count < 2 {
            return None;
        }
        let denominator = F::from(self.count - 1).expect(EXPECT_CONVERSION);
        let variance = self.sum_sq_dev / denominator;
        if variance < F::zero() {
            return Some(F::zero());
        }
        Some(variance)
    }

    /// Return the sample standard deviation
    #[inline]
    pub fn std_dev(&self) -> Option<F> {
        self.variance().map(F::sqrt)
    }
}
