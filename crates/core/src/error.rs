//! Error types for linedex
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! The search core itself never raises for expected absence-of-data conditions:
//! a token missing from the index is an empty posting slice, a malformed query
//! degrades per the parser rules, and an empty candidate set is an empty result
//! vector. Only the document source surfaces errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for linedex operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for linedex
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (directory traversal, file reads)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The index root does not exist or is not a directory
    #[error("not a directory: {0}")]
    InvalidRoot(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidRoot(PathBuf::from("/no/such/dir"));
        assert_eq!(err.to_string(), "not a directory: /no/such/dir");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
