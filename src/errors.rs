use derive_more::Display;

/// The configuration setter that rejected its argument.
#[derive(Debug, Display, Clone, Copy, Eq, PartialEq)]
pub enum Setter {
    /// The initial sum of squared deviations.
    #[display("set_value")]
    Value,
    /// The initial mean.
    #[display("set_mean")]
    Mean,
    /// The number of values the initial state represents.
    #[display("set_num_values")]
    NumValues,
}

/// Why an argument was rejected.
#[derive(Debug, Display, Clone, Copy, Eq, PartialEq)]
pub enum InvalidReason {
    /// The argument is NaN.
    #[display("must be numeric")]
    NotANumber,
    /// The argument is positive or negative infinity.
    #[display("must be finite")]
    Infinite,
    /// The argument is below zero.
    #[display("must be >= 0")]
    Negative,
    /// The argument has a fractional part.
    #[display("must be an integer")]
    NotIntegral,
    /// The argument does not fit into the counter with headroom for streaming.
    #[display("must be at most u64::MAX / 2")]
    OutOfRange,
}

/// Describes possible Errors that may occur when calling methods in this crate
#[derive(thiserror::Error, Debug, Clone, Copy, Eq, PartialEq)]
#[allow(missing_docs, reason = "Error messages are self explanatory")]
pub enum Error {
    #[error("{setter}: invalid input argument, {reason}")]
    InvalidArgument {
        setter: Setter,
        reason: InvalidReason,
    },
}

/// Shorthand for a `Result` with the error type of this crate.
pub type Result<T> = std::result::Result<T, Error>;
