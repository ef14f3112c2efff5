#![cfg_attr(not(test), no_std)]

pub mod float_utils;
pub use float_utils::*;

pub mod stats;
pub use stats::*;


/// Converts seconds to milliseconds, used when reporting sample intervals.
pub const S_TO_MS: f64 = 1000.0;
