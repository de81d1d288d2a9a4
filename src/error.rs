//! Unified error types for rowpack.
//!
//! This module provides a single [`RowpackError`] enum covering all error
//! cases in the library.
//!
//! The lenient serialization path never produces one of these: missing
//! attributes and null values are represented in-band in the output, and an
//! empty input is an empty result, not a failure. Errors only arise from the
//! opt-in strict mode, from the file convenience layer, and from JSON record
//! parsing.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for rowpack operations.
///
/// # Example
///
/// ```rust
/// use rowpack::error::Result;
///
/// fn my_function() -> Result<String> {
///     // ... operations that may fail
///     Ok(String::new())
/// }
/// ```
pub type Result<T> = std::result::Result<T, RowpackError>;

/// The error type for all rowpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RowpackError {
    /// An I/O error occurred while writing output to a file.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Strict-mode serialization encountered a column name the record's
    /// type does not have.
    #[error("row {row}: no attribute '{name}' on record")]
    MissingAttribute {
        /// The unresolved attribute name
        name: String,
        /// Zero-based index of the offending record
        row: usize,
    },

    /// A value could not be interpreted as a record.
    ///
    /// Produced when a JSON array element is not an object.
    #[error("invalid record: {message}")]
    InvalidRecord {
        /// Description of what's wrong
        message: String,
    },

    /// JSON parsing error.
    #[cfg(feature = "json")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RowpackError {
    /// Creates a missing-attribute error.
    pub fn missing_attribute(name: impl Into<String>, row: usize) -> Self {
        RowpackError::MissingAttribute {
            name: name.into(),
            row,
        }
    }

    /// Creates an invalid-record error.
    pub fn invalid_record(message: impl Into<String>) -> Self {
        RowpackError::InvalidRecord {
            message: message.into(),
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, RowpackError::Io(_))
    }

    /// Returns `true` if this is a missing-attribute error.
    pub fn is_missing_attribute(&self) -> bool {
        matches!(self, RowpackError::MissingAttribute { .. })
    }

    /// Returns `true` if this is an invalid-record error.
    pub fn is_invalid_record(&self) -> bool {
        matches!(self, RowpackError::InvalidRecord { .. })
    }
}
