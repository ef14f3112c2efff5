//! Reads accelerometer recordings from CSV exports of the sensor logging app.

use std::{fs::File, io::Read, path::{Path, PathBuf}};
use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

pub const DEFAULT_TIME_COLUMN: &str = "Time (s)";

pub const DEFAULT_ACCEL_COLUMN: &str = "Linear Acceleration x (m/s^2)";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open '{}': {}", .path.display(), .source)]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("column '{0}' not found in header")]
    MissingColumn(String),

    #[error("line {line}: no value for column '{column}'")]
    MissingValue { line: u64, column: String },

    #[error("line {line}: cannot parse '{value}' in column '{column}' as a number")]
    InvalidValue { line: u64, column: String, value: String },

    #[error("file contains a header but no samples")]
    Empty,
}

/// Which columns hold the data and how fields are separated.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvLayout {
    pub time_column: String,
    pub accel_column: String,
    pub delimiter: u8,
}

impl Default for CsvLayout {
    fn default() -> Self {
        CsvLayout {
            time_column: DEFAULT_TIME_COLUMN.to_string(),
            accel_column: DEFAULT_ACCEL_COLUMN.to_string(),
            delimiter: b',',
        }
    }
}

/// Aligned time (s) and acceleration (m/s²) samples, in file order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recording {
    pub time: Vec<f64>,
    pub accel: Vec<f64>,
}

impl Recording {
    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

pub fn load_file(path: &Path, layout: &CsvLayout) -> Result<Recording, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let recording = load_reader(file, layout)?;
    log::info!("Loaded {} samples from {}", recording.len(), path.display());
    Ok(recording)
}

pub fn load_reader<R: Read>(reader: R, layout: &CsvLayout) -> Result<Recording, LoadError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(layout.delimiter)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let time_index = column_index(&headers, &layout.time_column)?;
    let accel_index = column_index(&headers, &layout.accel_column)?;

    let mut recording = Recording::default();
    for (i, result) in reader.records().enumerate() {
        let record = result?;
        // Header is line 1.
        let line = record.position().map_or(i as u64 + 2, |position| position.line());

        recording.time.push(parse_field(&record, time_index, &layout.time_column, line)?);
        recording.accel.push(parse_field(&record, accel_index, &layout.accel_column, line)?);
    }

    if recording.is_empty() {
        return Err(LoadError::Empty);
    }

    Ok(recording)
}

fn column_index(headers: &StringRecord, column: &str) -> Result<usize, LoadError> {
    headers.iter()
        .position(|header| header == column)
        .ok_or_else(|| LoadError::MissingColumn(column.to_string()))
}

fn parse_field(record: &StringRecord, index: usize, column: &str, line: u64) -> Result<f64, LoadError> {
    let value = record.get(index)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| LoadError::MissingValue { line, column: column.to_string() })?;

    value.parse().map_err(|_| LoadError::InvalidValue {
        line,
        column: column.to_string(),
        value: value.to_string(),
    })
}
