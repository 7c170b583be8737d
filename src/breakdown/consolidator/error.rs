use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tool loads, consolidates, or writes breakdown tables.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Wrapper for IO failures such as reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when JSON serialization of the summary fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Raised when an input table is malformed.
    #[error(transparent)]
    Consolidate(#[from] ConsolidateError),

    /// Raised when a currency symbol would collide with number syntax.
    #[error("invalid currency symbol '{0}': digits, separators, signs, parentheses, quotes and whitespace are reserved")]
    InvalidCurrencySymbol(char),

    /// Raised when the numeric cell pattern fails to compile.
    #[error("invalid numeric cell pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Raised when the user provides a path that does not exist.
    #[error("input file not found: {0}")]
    MissingInput(PathBuf),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

/// Malformed input detected while aggregating tables. Every variant aborts the
/// whole consolidation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsolidateError {
    /// A header cell parses as a number.
    #[error("header contains numerical value instead of label `{label}` in table {table}: {line}")]
    HeaderIsNumeric {
        label: String,
        table: usize,
        line: String,
    },

    /// A data row has more fields than its table's header.
    #[error(
        "a value is under a column with no header in table {table} ({fields} fields, {columns} columns): {line}"
    )]
    ValueWithoutHeader {
        table: usize,
        line: String,
        fields: usize,
        columns: usize,
    },

    /// A data cell fails the numeric structural test.
    #[error("non-value `{value}` found outside of header in table {table}: {line}")]
    InvalidValue {
        value: String,
        table: usize,
        line: String,
    },
}

/// Discriminant of [`ConsolidateError`] for callers that branch on the kind of
/// failure rather than its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsolidateErrorKind {
    HeaderIsNumeric,
    ValueWithoutHeader,
    InvalidValue,
}

impl ConsolidateError {
    pub fn kind(&self) -> ConsolidateErrorKind {
        match self {
            ConsolidateError::HeaderIsNumeric { .. } => ConsolidateErrorKind::HeaderIsNumeric,
            ConsolidateError::ValueWithoutHeader { .. } => {
                ConsolidateErrorKind::ValueWithoutHeader
            }
            ConsolidateError::InvalidValue { .. } => ConsolidateErrorKind::InvalidValue,
        }
    }

    /// Index of the table, in input order, that triggered the error.
    pub fn table(&self) -> usize {
        match self {
            ConsolidateError::HeaderIsNumeric { table, .. }
            | ConsolidateError::ValueWithoutHeader { table, .. }
            | ConsolidateError::InvalidValue { table, .. } => *table,
        }
    }
}
