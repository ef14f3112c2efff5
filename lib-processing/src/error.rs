use core::{error::Error, fmt};

/// Reasons a pair of aligned series can be rejected before any numbers are crunched.
///
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidInput
{
    /// No samples at all.
    Empty,

    /// The time series and the value series do not have the same amount of samples.
    LengthMismatch { time: usize, values: usize },

    /// `time[index]` is not strictly larger than `time[index - 1]`.
    NonIncreasingTime { index: usize, previous: f64, current: f64 },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "series contains no samples"),
            Self::LengthMismatch { time, values } => write!(
                f, "series lengths differ: {} time values but {} samples", time, values
            ),
            Self::NonIncreasingTime { index, previous, current } => write!(
                f, "time is not strictly increasing at index {}: {} followed by {}",
                index, previous, current
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError
{
    InvalidInput(InvalidInput),
    InsufficientData { required: usize, found: usize },
}

impl Error for ProcessingError {}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidInput(err) => write!(f, "Invalid input: {}", err),
            Self::InsufficientData { required, found } => write!(
                f, "Insufficient data: need at least {} samples, got {}", required, found
            ),
        }
    }
}

impl From<InvalidInput> for ProcessingError
{
    fn from(err: InvalidInput) -> Self {
        ProcessingError::InvalidInput(err)
    }
}
