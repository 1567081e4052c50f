//! Errors raised by [`ApiClient`](super::ApiClient).
//!
//! The request lifecycle collapses all of these into a single failure, so
//! the variants exist for logging only.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Connection refused, timeout, or any other transport failure.
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-success status.
    #[error("'{url}' returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Response body was not the expected JSON.
    #[error("Invalid response from '{url}': {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The file selected for upload could not be read.
    #[error("Failed to read '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Building the multipart body failed.
    #[error("Failed to build upload form: {0}")]
    Form(#[source] reqwest::Error),
}

impl ApiError {
    /// Short machine-readable kind, used as a tracing field.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Client(_) => "client",
            ApiError::Transport { source, .. } if source.is_timeout() => "timeout",
            ApiError::Transport { .. } => "transport",
            ApiError::Status { .. } => "status",
            ApiError::Decode { .. } => "decode",
            ApiError::ReadFile { .. } => "read_file",
            ApiError::Form(_) => "form",
        }
    }
}
