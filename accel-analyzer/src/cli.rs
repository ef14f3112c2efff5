//! Command-line interface

use std::path::PathBuf;
use anyhow::bail;
use clap::{Parser, Subcommand};
use processing::DEFAULT_INITIAL_VELOCITY;

use crate::loader::{CsvLayout, DEFAULT_ACCEL_COLUMN, DEFAULT_TIME_COLUMN};

/// Reconstructs velocity from accelerometer recordings exported as CSV.
#[derive(Parser, Debug)]
#[command(name = "accel-analyzer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Header of the column holding the sample times in seconds
    #[arg(long, global = true, default_value = DEFAULT_TIME_COLUMN)]
    pub time_column: String,

    /// Header of the column holding the linear x acceleration in m/s²
    #[arg(long, global = true, default_value = DEFAULT_ACCEL_COLUMN)]
    pub accel_column: String,

    /// Field delimiter of the input file
    #[arg(short, long, global = true, default_value_t = ',')]
    pub delimiter: char,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Integrate acceleration to velocity, print diagnostics and export the results
    Velocity {
        /// Input CSV file
        input: PathBuf,

        /// Velocity in m/s at the first sample
        #[arg(short, long, default_value_t = DEFAULT_INITIAL_VELOCITY, allow_negative_numbers = true)]
        initial_velocity: f64,

        /// Directory to write results to (default: analysis/<input name>)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Export the acceleration signal as step-plot data
    Steps {
        /// Input CSV file
        input: PathBuf,

        /// Directory to write results to (default: analysis/<input name>)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },
}

impl Cli {
    /// Describes how the input file is laid out.
    pub fn layout(&self) -> anyhow::Result<CsvLayout> {
        if !self.delimiter.is_ascii() {
            bail!("delimiter must be a single ASCII character, got '{}'", self.delimiter);
        }

        Ok(CsvLayout {
            time_column: self.time_column.clone(),
            accel_column: self.accel_column.clone(),
            delimiter: self.delimiter as u8,
        })
    }
}
