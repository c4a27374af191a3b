//! Error types for trophica_io crate.
//!
//! Every file-system failure carries the path it happened on.

use std::path::{Path, PathBuf};
use thiserror::Error;
use trophica_core::CoreError;

/// Main error type for trophica_io operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File could not be opened, read or written
    #[error("File system error at {}: {source}", path.display())]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed population table
    #[error("Parse error in {} line {line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// JSON encoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors raised by the analysis pipeline
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for trophica_io operations.
pub type Result<T> = std::result::Result<T, IoError>;

impl IoError {
    /// Wraps an `std::io::Error` with the path it occurred on.
    #[must_use]
    pub fn file_system(path: &Path, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.to_path_buf(),
            source,
        }
    }

    #[must_use]
    pub fn parse<S: Into<String>>(path: &Path, line: usize, message: S) -> Self {
        Self::Parse {
            path: path.to_path_buf(),
            line,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound(resource.into())
    }

    /// True when the underlying cause is a missing species column.
    pub fn is_data_not_found(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_data_not_found())
    }

    /// Path of the failing file, when there is one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::FileSystem { path, .. } | Self::Parse { path, .. } => Some(path),
            _ => None,
        }
    }
}
