//! Error types for grok-tools

/// Result type for grok-tools operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when resolving or running external tools
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Command not found: {command}")]
    NotFound { command: String },

    #[error("Failed to spawn {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command {command} failed ({status}):\n{output}")]
    Failed {
        command: String,
        status: String,
        output: String,
    },

    #[error("Command {command} did not finish within {secs} seconds")]
    Timeout { command: String, secs: u64 },
}
