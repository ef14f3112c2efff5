//! Human readable console output.

use std::fmt;
use math::{Bounds, S_TO_MS};
use processing::{IntegrationDiagnostics, SeriesSummary};

pub struct SummaryReport<'a>(pub &'a SeriesSummary);

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let summary = self.0;
        writeln!(f, "Data loaded:")?;
        writeln!(f, "- Samples: {}", summary.samples)?;
        writeln!(f, "- Time range: {:.3}s to {:.3}s", summary.start_time, summary.end_time)?;
        write!(
            f, "- Acceleration range: {:.3} to {:.3} m/s²",
            summary.accel_range.min, summary.accel_range.max
        )
    }
}

pub struct VelocityReport {
    pub range: Bounds,
    pub final_velocity: f64,
}

impl fmt::Display for VelocityReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Velocity reconstructed:")?;
        writeln!(f, "- Velocity range: {:.3} to {:.3} m/s", self.range.min, self.range.max)?;
        write!(f, "- Final velocity: {:.3} m/s", self.final_velocity)
    }
}

pub struct QualityReport<'a>(pub &'a IntegrationDiagnostics);

impl fmt::Display for QualityReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let diagnostics = self.0;
        writeln!(f, "Integration quality:")?;
        writeln!(f, "- Mean time step: {:.2} ms", diagnostics.mean_timestep * S_TO_MS)?;
        writeln!(f, "- Time step standard deviation: {:.2} ms", diagnostics.timestep_std_dev * S_TO_MS)?;
        writeln!(f, "- Time step variability: {:.2}%", diagnostics.timestep_variation)?;
        write!(f, "- Velocity drift: {:.3} m/s", diagnostics.drift)
    }
}
