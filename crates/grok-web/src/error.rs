//! Error types for grok-web

use std::path::PathBuf;

/// Result type for grok-web operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when talking to the web service
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid service URI {uri}: {source}")]
    Uri {
        uri: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Service returned {status} for {url}: {body}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
        body: String,
    },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
