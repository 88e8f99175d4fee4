use getset::CopyGetters;
use tracing::debug;

use crate::{
    errors::{Error, InvalidReason, Result, Setter},
    numeric::Numeric,
    stage::{MapStage, Pipe, ReduceStage, StageExt},
    welford_online::WelfordOnline,
};

/// The largest seeded count, leaves headroom for the values streamed afterwards.
pub const MAX_NUM_VALUES: u64 = u64::MAX / 2;

/// The composed transform stage computing the running sample variance.
///
/// The reduce stage absorbs each value into a [`WelfordOnline`] accumulator and emits its state,
/// the map stage derives the sample variance from that state.
/// Nothing is emitted while fewer than two values are absorbed.
pub type VarianceStage<F> = Pipe<ReduceStage<WelfordOnline<F>, F>, MapStage<WelfordOnline<F>, F>>;

/// Configures the initial state of the accumulation and creates variance stages from it.
///
/// # Example
/// ```
/// use std::convert::Infallible;
///
/// use running_variance::prelude::*;
///
/// let variances: Vec<f64> = Variance::<f64>::new()
///     .stream()
///     .attach([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0].map(Ok::<_, Infallible>))
///     .map(|v| v.unwrap())
///     .collect();
/// assert_eq!(variances.len(), 7);
/// assert_eq!(variances[0], 2.0);
/// assert!((variances[6] - 32.0 / 7.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, CopyGetters)]
pub struct Variance<F>
where
    F: Numeric,
{
    /// The initial sum of squared deviations from the mean.
    #[getset(get_copy = "pub")]
    value: F,

    /// The initial mean.
    #[getset(get_copy = "pub")]
    mean: F,

    /// The number of values the initial state represents.
    #[getset(get_copy = "pub")]
    num_values: u64,
}

impl<F> Default for Variance<F>
where
    F: Numeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<F> Variance<F>
where
    F: Numeric,
{
    /// Create a new instance with zeroed initial state.
    pub fn new() -> Self {
        Self {
            value: F::zero(),
            mean: F::zero(),
            num_values: 0,
        }
    }

    /// Set the initial sum of squared deviations from which to begin the accumulation.
    pub fn set_value(&mut self, value: F) -> Result<&mut Self> {
        check_finite(Setter::Value, value)?;
        if value < F::zero() {
            return Err(invalid(Setter::Value, InvalidReason::Negative));
        }
        debug!("set_value: {value}");
        self.value = value;
        Ok(self)
    }

    /// Set the initial mean used during the accumulation.
    pub fn set_mean(&mut self, mean: F) -> Result<&mut Self> {
        check_finite(Setter::Mean, mean)?;
        debug!("set_mean: {mean}");
        self.mean = mean;
        Ok(self)
    }

    /// Set the number of values the initial state represents.
    /// Must be a non-negative integer not above [`MAX_NUM_VALUES`].
    pub fn set_num_values(&mut self, num_values: F) -> Result<&mut Self> {
        check_finite(Setter::NumValues, num_values)?;
        if num_values < F::zero() {
            return Err(invalid(Setter::NumValues, InvalidReason::Negative));
        }
        if num_values.fract() != F::zero() {
            return Err(invalid(Setter::NumValues, InvalidReason::NotIntegral));
        }
        let Some(num_values) = num_values.to_u64().filter(|n| *n <= MAX_NUM_VALUES) else {
            return Err(invalid(Setter::NumValues, InvalidReason::OutOfRange));
        };
        debug!("set_num_values: {num_values}");
        self.num_values = num_values;
        Ok(self)
    }

    /// Create a fresh stage seeded with the current configuration.
    /// Each stage owns its accumulator, later configuration changes do not affect it.
    pub fn stream(&self) -> VarianceStage<F> {
        debug!("stream: {self:?}");
        assert2::debug_assert!(self.value >= F::zero());

        let acc = WelfordOnline::builder()
            .count(self.num_values)
            .mean(self.mean)
            .sum_sq_dev(self.value)
            .build();
        ReduceStage::new(acc, WelfordOnline::update)
            .pipe(MapStage::new(|acc: WelfordOnline<F>| acc.variance()))
    }
}

#[inline]
fn invalid(setter: Setter, reason: InvalidReason) -> Error {
    Error::InvalidArgument { setter, reason }
}

fn check_finite<F: Numeric>(setter: Setter, val: F) -> Result<()> {
    if val.is_nan() {
        return Err(invalid(setter, InvalidReason::NotANumber));
    }
    if val.is_infinite() {
        return Err(invalid(setter, InvalidReason::Infinite));
    }
    Ok(())
}
