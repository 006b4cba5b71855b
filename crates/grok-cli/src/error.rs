//! Error types for grok-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error from the service client
    #[error(transparent)]
    Web(#[from] grok_web::Error),

    /// Error from the filesystem layer
    #[error(transparent)]
    Fs(#[from] grok_fs::Error),

    /// Error from external tool execution
    #[error(transparent)]
    Tools(#[from] grok_tools::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// User-facing error with a message
    #[error("{message}")]
    User { message: String },

    /// Broken caller contract; a bug, not a recoverable condition
    #[error("internal error: {message}")]
    Internal { message: String },
}

impl CliError {
    /// Create a new user error with the given message
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }

    /// Create a new internal (contract violation) error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
