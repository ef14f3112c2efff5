use alloc::vec::Vec;
use crate::*;

/// One corner of a step shaped line.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepPoint
{
    pub time: f64,
    pub value: f64,
}

impl StepPoint {
    #[inline]
    pub const fn new(time: f64, value: f64) -> Self {
        StepPoint { time, value }
    }
}

/// Turns a sampled signal into the corners of a step line that holds every sample's value until
/// the next sample arrives (horizontal, then vertical). Drawing the returned points with straight
/// lines gives the zero-order-hold view of the signal, which matches what the Euler integration
/// assumes about the acceleration between two samples.
///
/// For every sample after the first a horizontal segment at the previous value is emitted, and for
/// every sample but the last a point at the sample itself which closes the vertical jump. The
/// first sample is emitted both as the start and as its own jump point. A series of `n` samples
/// thus produces `3n - 2` points.
///
pub fn step_series(time: &[f64], values: &[f64]) -> Result<Vec<StepPoint>, ProcessingError>
{
    validate_series(time, values)?;

    let n = time.len();
    let mut points = Vec::with_capacity(3 * n - 2);

    for i in 0..n {
        if i == 0 {
            points.push(StepPoint::new(time[0], values[0]));
        } else {
            points.push(StepPoint::new(time[i - 1], values[i - 1]));
            points.push(StepPoint::new(time[i], values[i - 1]));
        }

        // No jump after the last sample.
        if i < n - 1 {
            points.push(StepPoint::new(time[i], values[i]));
        }
    }

    Ok(points)
}
