//! Error types for guest-list parsing.
//!
//! - [`FieldError`] - Conversion failure of a single row
//! - [`GuestListError`] - Top-level errors of reading, decoding and mapping
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::num::ParseIntError;

use thiserror::Error;

// =============================================================================
// Row Conversion Errors
// =============================================================================

/// Errors while converting one row into a [`crate::GuestRecord`].
#[derive(Debug, Error)]
pub enum FieldError {
    /// A required column is absent from the row.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A field expected to hold an integer holds something else.
    #[error("Malformed integer in field '{field}' (value '{value}'): {source}")]
    MalformedInteger {
        field: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

impl FieldError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            FieldError::MissingField(field) => field,
            FieldError::MalformedInteger { field, .. } => field,
        }
    }
}

// =============================================================================
// Guest List Errors (top-level)
// =============================================================================

/// Errors raised while reading a guest list.
///
/// This is the item error of [`crate::GuestList`] and the error returned by
/// [`crate::export::export`].
#[derive(Debug, Error)]
pub enum GuestListError {
    /// A row could not be converted.
    #[error("Line {line}: {source}")]
    Row {
        line: u64,
        #[source]
        source: FieldError,
    },

    /// The delimited reader rejected the input.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Failed to read or write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The input could not be decoded.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Expected header columns are missing.
    #[error("Missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GuestListError {
    /// Source line of a failed row, if known.
    pub fn line(&self) -> Option<u64> {
        match self {
            GuestListError::Row { line, .. } => Some(*line),
            GuestListError::Csv(err) => err.position().map(|pos| pos.line()),
            _ => None,
        }
    }

    /// Whether only the current row is affected and iteration may continue.
    pub fn is_row_error(&self) -> bool {
        match self {
            GuestListError::Row { .. } => true,
            GuestListError::Csv(err) => !err.is_io_error(),
            _ => false,
        }
    }
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for row conversion.
pub type FieldResult<T> = Result<T, FieldError>;

/// Result type for guest-list operations.
pub type GuestListResult<T> = Result<T, GuestListError>;
