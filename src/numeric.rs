use num_traits::Float;

/// Every sample type the accumulator can absorb must implement this trait.
/// Implemented for all floats which can be logged, e.g. `f32` and `f64`.
pub trait Numeric:
    Float
    + Send
    + Sync
    + 'static
    + std::fmt::Debug
    + std::fmt::Display
    + std::ops::AddAssign
    + std::ops::SubAssign
{
}

impl<T> Numeric for T where
    T: Float
        + Send
        + Sync
        + 'static
        + std::fmt::Debug
        + std::fmt::Display
        + std::ops::AddAssign
        + std::ops::SubAssign
{
}
