//! Error types for the invdash-core library.

use thiserror::Error;

/// Main error type for the invdash library.
#[derive(Error, Debug)]
pub enum DashError {
    /// CSV input could not be turned into a dataset.
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// A derived metric could not be computed.
    #[error("aggregate error: {0}")]
    Aggregate(#[from] AggregateError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while loading CSV text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Input is not text at all (e.g., a number handed over from JavaScript).
    #[error("expected text input, found {found}")]
    NotText { found: String },

    /// Input bytes are not valid UTF-8 text.
    #[error("input is not valid UTF-8 text (invalid byte at offset {offset})")]
    NotUtf8 { offset: usize },

    /// A data row has a different number of fields than the header (strict policy only).
    #[error("line {line}: expected {expected} fields, found {found}")]
    ColumnCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A header name is empty (strict policy only).
    #[error("header column {column} has an empty name")]
    EmptyHeader { column: usize },
}

/// Errors raised by aggregate accessors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    /// The metric is undefined over zero records.
    #[error("cannot compute {field} over an empty dataset")]
    EmptyDataset { field: String },
}

/// Result type for the invdash library.
pub type Result<T> = std::result::Result<T, DashError>;
