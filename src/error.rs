//! Error types for the input and output boundaries
//!
//! The calculators themselves never fail; these errors come from parsing
//! scenario files, unit names and template ids.

use thiserror::Error;

/// Result alias for boundary operations
pub type Result<T> = std::result::Result<T, CalcError>;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown duration unit: {0}")]
    UnknownDurationUnit(String),

    #[error("Unknown contribution frequency: {0}")]
    UnknownFrequency(String),

    #[error("Unknown compounding period: {0}")]
    UnknownCompoundingPeriod(String),

    #[error("Unknown scenario mode '{mode}' on row {row}")]
    UnknownMode { row: usize, mode: String },

    #[error("Row {row}: {message}")]
    InvalidRow { row: usize, message: String },

    #[error("Row {row} is missing required field '{field}'")]
    MissingField { row: usize, field: &'static str },

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
}
