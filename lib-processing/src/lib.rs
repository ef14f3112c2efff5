#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub use math::Bounds;

pub mod error;
pub use error::*;

pub mod utils;
pub use utils::*;

pub mod integration;
pub use integration::*;

pub mod diagnostics;
pub use diagnostics::*;

pub mod step_plot;
pub use step_plot::*;

/// Velocity drift (in m/s) above which the end of a recording is considered suspicious. A device
/// that is at rest again at the end of a recording should end up close to zero velocity.
///
pub const DRIFT_WARNING_THRESHOLD: f64 = 0.1;

#[cfg(test)]
pub mod tests;
