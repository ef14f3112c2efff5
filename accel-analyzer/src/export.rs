//! CSV tables for plotting the results with external tools.

use std::io::Write;
use processing::StepPoint;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct VelocityRecord {
    #[serde(rename = "Time_s")]
    time: f64,
    #[serde(rename = "Acceleration_x_ms2")]
    accel: f64,
    #[serde(rename = "Velocity_x_ms")]
    velocity: f64,
}

/// Same column names as the app's raw data export so both can be plotted the same way.
#[derive(Debug, Serialize)]
struct SampleRecord {
    #[serde(rename = "Time (s)")]
    time: f64,
    #[serde(rename = "Linear Acceleration x (m/s^2)")]
    accel: f64,
}

/// Writes one row per sample with its time, measured acceleration and reconstructed velocity.
pub fn write_velocity<W: Write>(out: W, time: &[f64], accel: &[f64], velocity: &[f64]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    for ((&time, &accel), &velocity) in time.iter().zip(accel).zip(velocity) {
        writer.serialize(VelocityRecord { time, accel, velocity })?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the corners of the step line.
pub fn write_steps<W: Write>(out: W, points: &[StepPoint]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    for point in points {
        writer.serialize(SampleRecord { time: point.time, accel: point.value })?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the raw samples, drawn as markers on top of the step line.
pub fn write_samples<W: Write>(out: W, time: &[f64], accel: &[f64]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(out);
    for (&time, &accel) in time.iter().zip(accel) {
        writer.serialize(SampleRecord { time, accel })?;
    }
    writer.flush()?;
    Ok(())
}
