
use math::approx_eq;
use crate::*;

const TOLERANCE: f64 = 1e-9;

/// Constant acceleration over unit time steps gives a linearly increasing velocity.
///
#[test]
pub fn constant_acceleration_unit_steps() {
    let velocity = reconstruct(&[0.0, 1.0, 2.0, 3.0], &[1.0, 1.0, 1.0, 1.0], 0.0).unwrap();
    assert_eq!(velocity, vec![0.0, 1.0, 2.0, 3.0]);
}

/// Every update uses the acceleration at the start of the interval, the last acceleration sample
/// never contributes.
///
#[test]
pub fn uses_acceleration_at_interval_start() {
    let velocity = reconstruct(&[0.0, 2.0], &[5.0, -1234.5], 0.0).unwrap();
    assert_eq!(velocity, vec![0.0, 10.0]);

    let velocity = reconstruct(&[0.0, 2.0], &[5.0, f64::NAN], 0.0).unwrap();
    assert_eq!(velocity, vec![0.0, 10.0]);
}

#[test]
pub fn starts_at_initial_velocity() {
    for v0 in [0.0, -3.25, 12.5] {
        let velocity = reconstruct(&[0.0, 0.5, 1.5], &[2.0, 2.0, 2.0], v0).unwrap();
        assert_eq!(velocity.len(), 3);
        assert_eq!(velocity[0], v0);
        assert_eq!(velocity[2], v0 + 2.0 * 0.5 + 2.0 * 1.0);
    }
}

#[test]
pub fn single_sample_is_only_initial_velocity() {
    assert_eq!(reconstruct(&[4.2], &[9.81], 1.5).unwrap(), vec![1.5]);
}

/// Results must match the left-endpoint recurrence exactly, not just approximately.
///
#[test]
pub fn matches_recurrence_with_irregular_steps() {
    let time = [0.0, 0.0102, 0.0197, 0.0311, 0.0398, 0.0512];
    let accel = [0.12, -0.37, 0.051, 1.204, -0.66, 0.3];

    let velocity = reconstruct(&time, &accel, 0.0).unwrap();

    let mut expected = vec![0.0; time.len()];
    for i in 1..time.len() {
        expected[i] = expected[i - 1] + accel[i - 1] * (time[i] - time[i - 1]);
    }
    assert_eq!(velocity, expected);
}

#[test]
pub fn reconstruct_is_deterministic() {
    let time = [0.0, 0.01, 0.021, 0.029, 0.04];
    let accel = [0.3, 0.1, -0.2, 0.05, 0.0];
    assert_eq!(
        reconstruct(&time, &accel, 0.1).unwrap(),
        reconstruct(&time, &accel, 0.1).unwrap(),
    );
}

#[test]
pub fn nan_acceleration_propagates() {
    let velocity = reconstruct(&[0.0, 1.0, 2.0], &[f64::NAN, 1.0, 1.0], 0.0).unwrap();
    assert_eq!(velocity[0], 0.0);
    assert!(velocity[1].is_nan());
    assert!(velocity[2].is_nan());
}

#[test]
pub fn integrator_matches_reconstruct() {
    let time = [0.0, 0.25, 0.5, 1.0];
    let accel = [4.0, -2.0, 1.0, 8.0];

    let mut integrator = VelocityIntegrator::default();
    let streamed: Vec<f64> = time.iter().zip(&accel)
        .map(|(&t, &a)| integrator.step(t, a))
        .collect();

    assert_eq!(streamed, reconstruct(&time, &accel, DEFAULT_INITIAL_VELOCITY).unwrap());
    assert_eq!(integrator.velocity, 1.0 - 0.5 + 0.5);
    assert_eq!(integrator.prev, Some((1.0, 8.0)));
}

#[test]
pub fn rejects_length_mismatch() {
    assert_eq!(
        reconstruct(&[0.0, 1.0], &[1.0], 0.0),
        Err(ProcessingError::InvalidInput(InvalidInput::LengthMismatch { time: 2, values: 1 })),
    );
}

#[test]
pub fn rejects_empty_series() {
    assert_eq!(
        reconstruct(&[], &[], 0.0),
        Err(ProcessingError::InvalidInput(InvalidInput::Empty)),
    );
}

#[test]
pub fn rejects_non_increasing_time() {
    let err = reconstruct(&[0.0, 1.0, 1.0, 2.0], &[0.0; 4], 0.0).unwrap_err();
    assert_eq!(
        err,
        ProcessingError::InvalidInput(InvalidInput::NonIncreasingTime {
            index: 2, previous: 1.0, current: 1.0,
        }),
    );

    assert!(reconstruct(&[0.0, 2.0, 1.0], &[0.0; 3], 0.0).is_err());
    assert!(reconstruct(&[0.0, f64::NAN], &[0.0; 2], 0.0).is_err());
}

#[test]
pub fn error_messages() {
    let err = ProcessingError::from(InvalidInput::LengthMismatch { time: 3, values: 2 });
    assert_eq!(err.to_string(), "Invalid input: series lengths differ: 3 time values but 2 samples");

    let err = ProcessingError::InsufficientData { required: 2, found: 1 };
    assert_eq!(err.to_string(), "Insufficient data: need at least 2 samples, got 1");
}

#[test]
pub fn diagnostics_for_regular_sampling() {
    let time = [0.0, 0.1, 0.2, 0.3];
    let velocity = [0.0, 0.01, 0.02, 0.03];

    let diagnostics = analyze(&time, &velocity).unwrap();

    assert_eq!(diagnostics.timesteps, 3);
    assert!(approx_eq(diagnostics.mean_timestep, 0.1, TOLERANCE));
    assert!(approx_eq(diagnostics.timestep_std_dev, 0.0, TOLERANCE));
    assert!(approx_eq(diagnostics.timestep_variation, 0.0, TOLERANCE));
    assert_eq!(diagnostics.drift, 0.03);
    assert!(!diagnostics.drift_warning);
    assert_eq!(diagnostics.velocity_range, Bounds::new(0.0, 0.03));
}

#[test]
pub fn diagnostics_for_irregular_sampling() {
    // Time steps of 1 and 3 seconds: mean 2, population standard deviation 1.
    let diagnostics = analyze(&[0.0, 1.0, 4.0], &[0.0, -0.5, 0.25]).unwrap();

    assert!(approx_eq(diagnostics.mean_timestep, 2.0, TOLERANCE));
    assert!(approx_eq(diagnostics.timestep_std_dev, 1.0, TOLERANCE));
    assert!(approx_eq(diagnostics.timestep_variation, 50.0, TOLERANCE));
    assert_eq!(diagnostics.drift, 0.25);
    assert!(diagnostics.drift_warning);
    assert_eq!(diagnostics.velocity_range, Bounds::new(-0.5, 0.25));
}

#[test]
pub fn drift_warning_is_strict() {
    assert!(!analyze(&[0.0, 1.0], &[0.0, 0.1]).unwrap().drift_warning);
    assert!(!analyze(&[0.0, 1.0], &[0.0, -0.1]).unwrap().drift_warning);
    assert!(analyze(&[0.0, 1.0], &[0.0, 0.1000001]).unwrap().drift_warning);
    assert!(analyze(&[0.0, 1.0], &[0.0, -0.2]).unwrap().drift_warning);

    assert!(!is_drift_excessive(DRIFT_WARNING_THRESHOLD));
    assert!(!is_drift_excessive(f64::NAN));
}

/// A NaN anywhere in the velocity must show up in the reported range, not be hidden by it.
///
#[test]
pub fn diagnostics_range_shows_nan() {
    let diagnostics = analyze(&[0.0, 1.0], &[0.0, f64::NAN]).unwrap();
    assert!(diagnostics.drift.is_nan());
    assert!(diagnostics.velocity_range.min.is_nan());
    assert!(diagnostics.velocity_range.max.is_nan());

    let summary = summarize(&[0.0, 1.0, 2.0], &[0.5, f64::NAN, -0.5]).unwrap();
    assert!(summary.accel_range.min.is_nan());
    assert!(summary.accel_range.max.is_nan());
}

#[test]
pub fn diagnostics_need_two_samples() {
    assert_eq!(
        analyze(&[0.0], &[0.0]),
        Err(ProcessingError::InsufficientData { required: 2, found: 1 }),
    );
}

#[test]
pub fn diagnostics_reject_invalid_input() {
    assert!(matches!(
        analyze(&[0.0, 1.0, 2.0], &[0.0, 1.0]),
        Err(ProcessingError::InvalidInput(InvalidInput::LengthMismatch { .. })),
    ));
    assert!(matches!(
        analyze(&[0.0, 2.0, 1.0], &[0.0, 1.0, 2.0]),
        Err(ProcessingError::InvalidInput(InvalidInput::NonIncreasingTime { index: 2, .. })),
    ));
}

#[test]
pub fn diagnostics_after_reconstruction() {
    let time = [0.0, 0.5, 1.0, 1.5, 2.0];
    let accel = [1.0, 1.0, -1.0, -1.0, 0.0];

    let velocity = reconstruct(&time, &accel, 0.0).unwrap();
    let diagnostics = analyze(&time, &velocity).unwrap();

    // Accelerate and brake for the same amount of time, ending at rest.
    assert_eq!(diagnostics.drift, 0.0);
    assert!(!diagnostics.drift_warning);
    assert_eq!(diagnostics.velocity_range, Bounds::new(0.0, 1.0));
}

#[test]
pub fn summary_of_recording() {
    let summary = summarize(&[0.5, 1.0, 2.5], &[0.2, -0.4, 0.1]).unwrap();

    assert_eq!(summary.samples, 3);
    assert_eq!(summary.start_time, 0.5);
    assert_eq!(summary.end_time, 2.5);
    assert_eq!(summary.duration(), 2.0);
    assert_eq!(summary.accel_range, Bounds::new(-0.4, 0.2));

    assert!(summarize(&[], &[]).is_err());
}

#[test]
pub fn step_series_shape() {
    let points = step_series(&[0.0, 1.0, 2.0], &[5.0, 6.0, 7.0]).unwrap();

    assert_eq!(points, vec![
        StepPoint::new(0.0, 5.0),
        StepPoint::new(0.0, 5.0),
        StepPoint::new(0.0, 5.0),
        StepPoint::new(1.0, 5.0),
        StepPoint::new(1.0, 6.0),
        StepPoint::new(1.0, 6.0),
        StepPoint::new(2.0, 6.0),
    ]);
}

#[test]
pub fn step_series_length() {
    assert_eq!(step_series(&[3.0], &[1.0]).unwrap(), vec![StepPoint::new(3.0, 1.0)]);

    for n in 2..10 {
        let time: Vec<f64> = (0..n).map(|i| i as f64 * 0.01).collect();
        let values: Vec<f64> = (0..n).map(|i| (i % 3) as f64).collect();
        let points = step_series(&time, &values).unwrap();

        assert_eq!(points.len(), 3 * n - 2);
        assert_eq!(points.last(), Some(&StepPoint::new(time[n - 1], values[n - 2])));
    }
}

#[test]
pub fn step_series_rejects_invalid_input() {
    assert!(step_series(&[], &[]).is_err());
    assert!(step_series(&[0.0, 1.0], &[1.0]).is_err());
    assert!(step_series(&[1.0, 0.0], &[1.0, 2.0]).is_err());
}
