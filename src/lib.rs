#![deny(missing_docs, rustdoc::missing_crate_level_docs, unused_imports)]
#![warn(clippy::all)]
#![doc = include_str!("../README.md")]

//! running-variance - numerically stable running sample variance over push based stages

mod errors;
mod expect_messages;
mod numeric;
pub mod stage;
mod variance;
mod welford_online;

/// Exports common types
pub mod prelude {
    pub use crate::{
        errors::{Error, InvalidReason, Result, Setter},
        numeric::Numeric,
        stage::{MapStage, Pipe, ReduceStage, Stage, StageExt, StageStream},
        variance::{MAX_NUM_VALUES, Variance, VarianceStage},
        welford_online::WelfordOnline,
    };
}

pub use prelude::*;

/// Create a fresh `f64` variance configuration with zeroed initial state.
pub fn variance() -> Variance<f64> {
    Variance::new()
}
