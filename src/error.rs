//! Error types for the Lexica library.
//!
//! All errors are represented by the [`LexicaError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use lexica::error::{LexicaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexicaError::dictionary("Dictionary file is empty"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Lexica operations.
#[derive(Error, Debug)]
pub enum LexicaError {
    /// I/O errors (dictionary files, output streams, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Dictionary-related errors (loading, malformed sources)
    #[error("Dictionary error: {0}")]
    Dictionary(String),

    /// Query-related errors (invalid arguments, unusable queries)
    #[error("Query error: {0}")]
    Query(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with LexicaError.
pub type Result<T> = std::result::Result<T, LexicaError>;

impl LexicaError {
    /// Create a new dictionary error.
    pub fn dictionary<S: Into<String>>(msg: S) -> Self {
        LexicaError::Dictionary(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        LexicaError::Query(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexicaError::Other(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        LexicaError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new not found error.
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        LexicaError::Other(format!("Not found: {}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexicaError::dictionary("Test dictionary error");
        assert_eq!(error.to_string(), "Dictionary error: Test dictionary error");

        let error = LexicaError::query("Test query error");
        assert_eq!(error.to_string(), "Query error: Test query error");

        let error = LexicaError::not_found("word");
        assert_eq!(error.to_string(), "Error: Not found: word");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lexica_error = LexicaError::from(io_error);

        match lexica_error {
            LexicaError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
