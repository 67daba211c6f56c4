// crates/covtest-core/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars operation failed: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Could not parse timestamp '{value}' in column '{column}'")]
    Timestamp { column: String, value: String },

    #[error("Unrecognized timezone abbreviation '{0}'")]
    UnknownTimezone(String),

    #[error("Column '{column}' has a null value at row {row}")]
    NullValue { column: String, row: usize },
}

pub type Result<T> = std::result::Result<T, TransformError>;
