//! Error types for resumen.

use std::path::PathBuf;

/// Result type alias for resumen operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing a summary report.
///
/// Every variant is fatal: the run stops with a diagnostic and no report
/// is emitted. Recoverable irregularities (a missing column, no rows left
/// after cleaning) are absorbed into the report shape instead and surface
/// as [`Warning`](crate::summary::Warning)s or the degenerate report.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Input file does not exist.
    #[error("Input file not found: {path:?}")]
    InputNotFound {
        /// The path that was requested.
        path: PathBuf,
    },

    /// I/O error during file operations.
    #[error("I/O error at {path:?}: {source}")]
    Io {
        /// The path where the error occurred.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Input exists but cannot be parsed as delimited text.
    #[error("Unreadable input at {path:?}: {source}")]
    Malformed {
        /// The path of the unreadable input.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: arrow::error::ArrowError,
    },

    /// Input yields no columns at all (empty file or missing header).
    #[error("Unreadable input at {path:?}: no columns found")]
    NoColumns {
        /// The path of the column-less input.
        path: PathBuf,
    },

    /// Arrow error during batch processing.
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Report serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },
}

impl Error {
    /// Create an input-not-found error.
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create an I/O error with a path context.
    pub fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an unreadable-input error with a path context.
    pub fn malformed(source: arrow::error::ArrowError, path: impl Into<PathBuf>) -> Self {
        Self::Malformed {
            path: path.into(),
            source,
        }
    }

    /// Create a no-columns error.
    pub fn no_columns(path: impl Into<PathBuf>) -> Self {
        Self::NoColumns { path: path.into() }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}
