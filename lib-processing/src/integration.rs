use alloc::vec::Vec;
use cfg_if::cfg_if;
use crate::*;

/// Velocity (in m/s) a reconstruction starts from when nothing else is known, i.e. the device is
/// assumed to be at rest when the recording starts.
///
pub const DEFAULT_INITIAL_VELOCITY: f64 = 0.0;

/// Reconstructs velocity from acceleration samples one sample at a time using the explicit
/// (forward) Euler method.
///
/// Every update uses the acceleration of the *previous* sample, i.e. the acceleration measured at
/// the start of the interval:
///
/// `v[i] = v[i - 1] + a[i - 1] * (t[i] - t[i - 1])`
///
/// The integrator itself does not validate its input, feeding it samples that go back in time
/// simply produces negative time steps. Use [`reconstruct`] for checked, whole-series
/// integration.
///
pub struct VelocityIntegrator
{
    /// In seconds and m/s²; time and acceleration of the previously processed sample. `None`
    /// until the first sample has been seen.
    pub prev: Option<(f64, f64)>,

    /// In m/s; the velocity at the time of the previously processed sample.
    pub velocity: f64,
}

impl VelocityIntegrator {

    #[inline]
    pub fn new(initial_velocity: f64) -> Self {
        VelocityIntegrator {
            prev: None,
            velocity: initial_velocity,
        }
    }

    /// Processes one sample and returns the velocity at `time`.
    ///
    pub fn step(&mut self, time: f64, accel: f64) -> f64
    {
        // The first sample only marks the start of the first interval, the velocity at that
        // point is the initial velocity.
        if let Some((prev_time, prev_accel)) = self.prev {
            let delta_t = time - prev_time;
            self.velocity += prev_accel * delta_t;

            cfg_if!{ if #[cfg(feature = "debug")] {
                log::trace!(
                    "t={} dt={} a={} v={}", time, delta_t, prev_accel, self.velocity
                );
            }}
        }

        self.prev = Some((time, accel));
        self.velocity
    }
}

impl Default for VelocityIntegrator {
    fn default() -> Self {
        VelocityIntegrator::new(DEFAULT_INITIAL_VELOCITY)
    }
}

/// Reconstructs the velocity at every sample time from the acceleration measured at those times.
/// The returned series has the same length as the input and starts at `initial_velocity`.
///
/// Fails if the series are empty, differ in length or if time is not strictly increasing.
///
pub fn reconstruct(time: &[f64], accel: &[f64], initial_velocity: f64) -> Result<Vec<f64>, ProcessingError>
{
    validate_series(time, accel)?;

    log::debug!(
        "Integrating {} samples from v0={} m/s", time.len(), initial_velocity
    );

    let mut integrator = VelocityIntegrator::new(initial_velocity);
    let velocity = time.iter()
        .zip(accel)
        .map(|(&t, &a)| integrator.step(t, a))
        .collect();

    Ok(velocity)
}
