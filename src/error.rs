//! Error types for grid setup, persistence and import.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the grid editor.
///
/// Navigation and editing never fail; only startup validation and the
/// file-facing operations of [`crate::codec`] produce these.
#[derive(Error, Debug)]
pub enum GridError {
    /// A startup parameter is outside its permitted range, or a config file is
    /// unusable.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The persisted table could not be written or read.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Destination or source path.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// An imported file is not well-formed CSV.
    #[error("parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number where parsing stopped.
        line: usize,
        /// What went wrong.
        message: String,
    },
}

impl GridError {
    /// Builds an out-of-range error for a named dimension.
    pub fn out_of_range(what: &str, value: usize, max: usize) -> Self {
        GridError::Configuration(format!("{what} must be between 1 and {max}, got {value}"))
    }

    /// Wraps an OS error with the path it happened on.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GridError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = GridError::out_of_range("rows", 0, 100);
        assert_eq!(
            err.to_string(),
            "invalid configuration: rows must be between 1 and 100, got 0"
        );
    }

    #[test]
    fn test_io_error_names_path() {
        let err = GridError::io(
            "/nowhere/table.csv",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/nowhere/table.csv"));
        assert!(msg.contains("missing"));
    }
}
