use std::{fs::{self, File}, path::{Path, PathBuf}};
use anyhow::Context;
use clap::Parser;
use math::Bounds;
use processing::{analyze, reconstruct, step_series, summarize, ProcessingError};

mod cli;
mod export;
mod loader;
mod report;

use cli::{Cli, Commands};
use loader::CsvLayout;
use report::{QualityReport, SummaryReport, VelocityReport};

static RESULTS_DIR: &str = "analysis";

static VELOCITY_FILE: &str = "velocity_reconstruction_results.csv";

static STEPS_FILE: &str = "acceleration_steps.csv";

static SAMPLES_FILE: &str = "acceleration_samples.csv";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let layout = cli.layout()?;

    match cli.command {
        Commands::Velocity { input, initial_velocity, output_dir } => {
            let out_dir = results_dir(&input, output_dir)?;
            run_velocity(&input, &layout, initial_velocity, &out_dir)
        }
        Commands::Steps { input, output_dir } => {
            let out_dir = results_dir(&input, output_dir)?;
            run_steps(&input, &layout, &out_dir)
        }
    }
}

/// Every input file gets its own folder in the results directory unless told otherwise.
fn results_dir(input: &Path, explicit: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir);
    }

    let name = input.file_stem()
        .with_context(|| format!("'{}' does not name a file", input.display()))?;
    Ok(Path::new(RESULTS_DIR).join(name))
}

fn create_output(out_dir: &Path, name: &str) -> anyhow::Result<(File, PathBuf)> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create '{}'", out_dir.display()))?;

    let path = out_dir.join(name);
    let file = File::create(&path)
        .with_context(|| format!("failed to create '{}'", path.display()))?;
    Ok((file, path))
}

fn run_velocity(input: &Path, layout: &CsvLayout, initial_velocity: f64, out_dir: &Path) -> anyhow::Result<()> {
    let recording = loader::load_file(input, layout)?;

    let summary = summarize(&recording.time, &recording.accel)?;
    println!("{}\n", SummaryReport(&summary));

    let velocity = reconstruct(&recording.time, &recording.accel, initial_velocity)?;
    let range = Bounds::of(&velocity).context("no velocity samples")?;
    let final_velocity = velocity[velocity.len() - 1];
    println!("{}\n", VelocityReport { range, final_velocity });

    let (file, path) = create_output(out_dir, VELOCITY_FILE)?;
    export::write_velocity(file, &recording.time, &recording.accel, &velocity)
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    log::info!("Results saved to {}", path.display());

    match analyze(&recording.time, &velocity) {
        Ok(diagnostics) => {
            println!("\n{}", QualityReport(&diagnostics));
            if diagnostics.drift_warning {
                log::warn!(
                    "Large velocity drift of {:.3} m/s detected, this may indicate sensor offset or integration error",
                    diagnostics.drift
                );
            }
        }
        Err(err @ ProcessingError::InsufficientData { .. }) => {
            log::warn!("Skipping integration quality analysis: {}", err);
        }
        Err(err) => return Err(err.into()),
    }

    Ok(())
}

fn run_steps(input: &Path, layout: &CsvLayout, out_dir: &Path) -> anyhow::Result<()> {
    let recording = loader::load_file(input, layout)?;
    let points = step_series(&recording.time, &recording.accel)?;
    log::debug!("{} samples became {} step points", recording.len(), points.len());

    let (file, path) = create_output(out_dir, STEPS_FILE)?;
    export::write_steps(file, &points)
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    log::info!("Step line saved to {}", path.display());

    let (file, path) = create_output(out_dir, SAMPLES_FILE)?;
    export::write_samples(file, &recording.time, &recording.accel)
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    log::info!("Samples saved to {}", path.display());

    Ok(())
}
