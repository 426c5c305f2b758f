use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::data::{Dataset, Record};

const BUNDLED_SAMPLE: &str = include_str!("../../data/tips_sample.csv");

/// Errors that can occur when loading the dataset.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Failed to open dataset '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse dataset line {line}: {source}")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid record on line {line}: {message}")]
    InvalidRecord { line: u64, message: String },

    #[error("Dataset contains no records")]
    Empty,
}

impl Dataset {
    /// Load the sample table compiled into the binary.
    pub fn bundled() -> Result<Self, DataError> {
        Self::from_csv(BUNDLED_SAMPLE)
    }

    /// Load a CSV file with a `total_bill,tip,sex,smoker,day,time,size` header.
    pub fn load_from(path: &Path) -> Result<Self, DataError> {
        let text = fs::read_to_string(path).map_err(|e| DataError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let dataset = Self::from_csv(&text)?;
        tracing::info!(
            path = %path.display(),
            records = dataset.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Parse CSV text. Error line numbers are 1-based and count blank lines.
    pub fn from_csv(text: &str) -> Result<Self, DataError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let headers = csv_reader.headers().map_err(csv_error)?.clone();
        let mut raw = csv::StringRecord::new();
        let mut records = Vec::new();
        while csv_reader.read_record(&mut raw).map_err(csv_error)? {
            let line = start_line(text, raw.position());
            let record: Record = raw
                .deserialize(Some(&headers))
                .map_err(|source| DataError::Csv { line, source })?;
            validate(&record, line)?;
            records.push(record);
        }

        Dataset::new(records)
    }
}

/// Line on which the record at `position` starts. The reader stamps a record
/// with the offset right after the previous one, before any skipped blank
/// lines.
fn start_line(text: &str, position: Option<&csv::Position>) -> u64 {
    let offset = position.map_or(0, |p| p.byte() as usize).min(text.len());
    let before = text.as_bytes()[..offset]
        .iter()
        .filter(|&&b| b == b'\n')
        .count();
    let blank = text.as_bytes()[offset..]
        .split(|&b| b == b'\n')
        .take_while(|line| line.iter().all(|&b| b == b'\r'))
        .count();
    (1 + before + blank) as u64
}

fn csv_error(source: csv::Error) -> DataError {
    DataError::Csv {
        line: source.position().map(|p| p.line()).unwrap_or(0),
        source,
    }
}

fn validate(record: &Record, line: u64) -> Result<(), DataError> {
    let message = if !(record.total_bill.is_finite() && record.total_bill > 0.0) {
        format!("total_bill must be positive, got {}", record.total_bill)
    } else if !(record.tip.is_finite() && record.tip >= 0.0) {
        format!("tip must be non-negative, got {}", record.tip)
    } else if record.size == 0 {
        "size must be at least 1".to_string()
    } else {
        return Ok(());
    };
    Err(DataError::InvalidRecord { line, message })
}
