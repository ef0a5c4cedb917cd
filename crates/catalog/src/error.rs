//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading or validating a video catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading the data file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Line in the data file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// Expected number of fields in a line doesn't match actual
    #[error("Expected {expected} fields but found {found} in line {line}")]
    FieldCountMismatch {
        expected: usize,
        found: usize,
        line: usize,
    },

    /// The same video id was declared twice
    #[error("Duplicate video id {id} at line {line}")]
    DuplicateId { id: u64, line: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
