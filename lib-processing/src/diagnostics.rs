use alloc::vec::Vec;
use math::{coefficient_of_variation, differences, mean, population_std_dev, Bounds};
use crate::*;

/// Overview of a loaded recording, computed before any processing happens.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary
{
    /// Amount of samples in the recording.
    pub samples: usize,

    /// In seconds; time of the first sample.
    pub start_time: f64,

    /// In seconds; time of the last sample.
    pub end_time: f64,

    /// In m/s²; smallest and largest measured acceleration.
    pub accel_range: Bounds,
}

impl SeriesSummary {
    /// In seconds; total time covered by the recording.
    ///
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }
}

/// Summarizes a recording of acceleration samples.
///
pub fn summarize(time: &[f64], accel: &[f64]) -> Result<SeriesSummary, ProcessingError>
{
    validate_series(time, accel)?;

    let start_time = time[0];
    let end_time = time[time.len() - 1];
    let accel_range = Bounds::of(accel).ok_or(InvalidInput::Empty)?;

    Ok(SeriesSummary {
        samples: time.len(),
        start_time,
        end_time,
        accel_range,
    })
}

/// Quality indicators for a velocity reconstruction.
///
/// The time step statistics show how regular the sensor was sampled, the Euler method assumes the
/// acceleration is constant over each interval so long or irregular intervals make it less
/// accurate. The drift is the velocity at the end of the recording which, for a device that comes
/// to rest again, should be close to zero; a large drift points at sensor offset or accumulated
/// integration error.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationDiagnostics
{
    /// Amount of time steps, i.e. one less than the amount of samples.
    pub timesteps: usize,

    /// In seconds.
    pub mean_timestep: f64,

    /// In seconds; population standard deviation of the time steps.
    pub timestep_std_dev: f64,

    /// In percent; `timestep_std_dev / mean_timestep * 100`.
    pub timestep_variation: f64,

    /// In m/s; velocity at the last sample.
    pub drift: f64,

    /// Is the absolute drift larger than [`DRIFT_WARNING_THRESHOLD`]?
    pub drift_warning: bool,

    /// In m/s; smallest and largest reconstructed velocity.
    pub velocity_range: Bounds,
}

/// Is a final velocity large enough to warn about? Exactly at the threshold is still fine.
///
#[inline]
pub fn is_drift_excessive(drift: f64) -> bool {
    libm::fabs(drift) > DRIFT_WARNING_THRESHOLD
}

/// Computes the [`IntegrationDiagnostics`] of a reconstructed velocity series.
///
/// Needs at least two samples, a single sample has no time steps to compute statistics over.
///
pub fn analyze(time: &[f64], velocity: &[f64]) -> Result<IntegrationDiagnostics, ProcessingError>
{
    validate_min_samples(time, velocity, 2)?;

    let timesteps: Vec<f64> = differences(time).collect();
    let insufficient = || ProcessingError::InsufficientData { required: 2, found: time.len() };

    let mean_timestep = mean(&timesteps).ok_or_else(insufficient)?;
    let timestep_std_dev = population_std_dev(&timesteps).ok_or_else(insufficient)?;
    let velocity_range = Bounds::of(velocity).ok_or(InvalidInput::Empty)?;
    let drift = velocity[velocity.len() - 1];

    log::debug!(
        "Analyzed {} time steps, mean {} s, final velocity {} m/s",
        timesteps.len(), mean_timestep, drift
    );

    Ok(IntegrationDiagnostics {
        timesteps: timesteps.len(),
        mean_timestep,
        timestep_std_dev,
        timestep_variation: coefficient_of_variation(timestep_std_dev, mean_timestep),
        drift,
        drift_warning: is_drift_excessive(drift),
        velocity_range,
    })
}
