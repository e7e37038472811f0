//! Error types for the data-loader crate.
//!
//! Only loading can fail. Once a [`MovieCatalog`](crate::MovieCatalog) exists,
//! every lookup is infallible: an absent key is an empty result, not an error.

use thiserror::Error;

/// Errors that can occur while loading the movie data file
///
/// Every variant is recoverable by the caller. The loader never exits the
/// process; deciding whether a failed load is fatal belongs to the binary.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A field of a record line couldn't be parsed
    ///
    /// `line` is the 1-based physical line number, header included.
    #[error("Parse error at line {line}, field '{field}': {reason}")]
    ParseError {
        line: usize,
        field: &'static str,
        reason: String,
    },

    /// A record line did not split into the expected number of fields
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
