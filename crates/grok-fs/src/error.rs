//! Error types for grok-fs

use std::path::PathBuf;

/// Result type for grok-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in grok-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to copy {src} to {dst}: {source}")]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Another instance already holds the lock at {path}")]
    AlreadyLocked { path: PathBuf },

    #[error("Lock acquisition failed for {path}: {source}")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
