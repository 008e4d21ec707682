//! Error types for `NoteCore`

use std::path::{Path, PathBuf};

use thiserror::Error;

/// The error type for `NoteCore` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error that is not tied to a document path (config files, etc).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Document Errors ====================
    /// The document could not be read (missing, permission denied, ...).
    #[error("{}: {source}", path.display())]
    FileRead {
        /// The path that was being opened.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The document was read but is not valid UTF-8 text.
    #[error("{}: file is not valid UTF-8 text", path.display())]
    Decode {
        /// The path that was being opened.
        path: PathBuf,
    },

    /// The document could not be written (permission denied, disk full, ...).
    #[error("{}: {source}", path.display())]
    FileWrite {
        /// The path that was being written.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    // ==================== Search Errors ====================
    /// The find/replace target does not occur in the document.
    #[error("Text not found.")]
    SearchMiss,

    // ==================== Config Errors ====================
    /// JSON (de)serialization failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::InvalidData {
            return Self::Decode {
                path: path.to_path_buf(),
            };
        }
        Self::FileRead {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        Self::FileWrite {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Whether this error came from reading a document.
    pub fn is_read_error(&self) -> bool {
        matches!(self, Self::FileRead { .. } | Self::Decode { .. })
    }

    /// Whether this error came from writing a document.
    pub fn is_write_error(&self) -> bool {
        matches!(self, Self::FileWrite { .. })
    }
}

/// Result type for `NoteCore` operations.
pub type Result<T> = std::result::Result<T, Error>;
