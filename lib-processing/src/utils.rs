use core::cmp::Ordering;
use crate::*;

/// Checks that a time series and the values sampled at those times can be processed together:
/// both have the same, non-zero, length and the time values are strictly increasing.
///
/// The values themselves are not inspected, NaN or infinite samples are allowed and will simply
/// propagate through whatever is computed from them. A NaN time value however can never be
/// strictly increasing and is rejected.
///
pub fn validate_series(time: &[f64], values: &[f64]) -> Result<(), InvalidInput>
{
    if time.len() != values.len() {
        return Err(InvalidInput::LengthMismatch { time: time.len(), values: values.len() });
    }

    if time.is_empty() {
        return Err(InvalidInput::Empty);
    }

    for (i, pair) in time.windows(2).enumerate() {
        let (previous, current) = (pair[0], pair[1]);
        if current.partial_cmp(&previous) != Some(Ordering::Greater) {
            return Err(InvalidInput::NonIncreasingTime { index: i + 1, previous, current });
        }
    }

    Ok(())
}

/// Same as [`validate_series`] but additionally requires at least `required` samples, which is
/// needed by anything that works on the time steps rather than on the samples themselves.
///
pub fn validate_min_samples(time: &[f64], values: &[f64], required: usize) -> Result<(), ProcessingError>
{
    validate_series(time, values)?;

    if time.len() < required {
        return Err(ProcessingError::InsufficientData { required, found: time.len() });
    }

    Ok(())
}
