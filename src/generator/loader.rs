//! Sample loading from CSV and JSON files.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::data::{Sample, SampleSet};

/// Error type for sample loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read file: {0}")]
    ReadError(String),

    #[error("Failed to parse CSV: {0}")]
    CsvError(String),

    #[error("Failed to parse JSON: {0}")]
    JsonError(String),

    #[error("Unsupported file format: {0} (expected .csv or .json)")]
    UnsupportedFormat(String),

    #[error("No numeric data found in file")]
    NoNumericData,
}

/// Load samples from `path`, picking the format from its extension.
pub fn load_samples(path: &Path) -> Result<SampleSet, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    let set = match ext.as_str() {
        "csv" => load_csv(path)?,
        "json" => load_json(path)?,
        _ => return Err(LoadError::UnsupportedFormat(path.display().to_string())),
    };

    if set.is_empty() {
        return Err(LoadError::NoNumericData);
    }
    Ok(set)
}

fn io_error(e: std::io::Error) -> LoadError {
    match e.kind() {
        std::io::ErrorKind::NotFound => LoadError::FileNotFound(e.to_string()),
        _ => LoadError::ReadError(e.to_string()),
    }
}

/// CSV with a header row. Uses columns named `x`/`y` when present,
/// otherwise the first two. Rows that don't parse as two finite floats
/// (`NaN` and `inf` included) are skipped.
pub fn load_csv(path: &Path) -> Result<SampleSet, LoadError> {
    let file = File::open(path).map_err(io_error)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(BufReader::new(file));

    let headers = reader
        .headers()
        .map_err(|e| LoadError::CsvError(e.to_string()))?
        .clone();

    let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let (x_idx, y_idx) = match (find("x"), find("y")) {
        (Some(x), Some(y)) => (x, y),
        _ if headers.len() >= 2 => (0, 1),
        _ => {
            return Err(LoadError::CsvError(
                "expected at least two columns".to_string(),
            ));
        }
    };

    let mut samples = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| LoadError::CsvError(e.to_string()))?;
        let x = record.get(x_idx).and_then(parse_finite);
        let y = record.get(y_idx).and_then(parse_finite);
        if let (Some(x), Some(y)) = (x, y) {
            samples.push(Sample::new(x, y));
        }
    }

    Ok(SampleSet::new(samples))
}

fn parse_finite(field: &str) -> Option<f64> {
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPoint {
    Object { x: f64, y: f64 },
    Pair([f64; 2]),
}

/// JSON array of `{"x": .., "y": ..}` objects or `[x, y]` pairs.
pub fn load_json(path: &Path) -> Result<SampleSet, LoadError> {
    let content = fs::read_to_string(path).map_err(io_error)?;
    let points: Vec<JsonPoint> =
        serde_json::from_str(&content).map_err(|e| LoadError::JsonError(e.to_string()))?;

    Ok(SampleSet::new(
        points
            .into_iter()
            .map(|p| match p {
                JsonPoint::Object { x, y } => Sample::new(x, y),
                JsonPoint::Pair([x, y]) => Sample::new(x, y),
            })
            .collect(),
    ))
}
