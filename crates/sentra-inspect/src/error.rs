//! Error types for the inspection client.

use thiserror::Error;

/// Errors that can occur while inspecting content.
#[derive(Error, Debug)]
pub enum InspectError {
    /// Unrecognized content kind label
    #[error("invalid content kind for byte item: '{kind}'")]
    InvalidContentKind {
        /// The offending label
        kind: String,
    },

    /// Inspection settings that cannot be turned into a request config
    #[error("invalid inspection config: {0}")]
    InvalidConfig(String),

    /// I/O error reading content from disk
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Service rejected the request or failed
    #[error("service error ({service}): status {status}, {message}")]
    ApiError {
        /// Service identifier
        service: String,
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Invalid credentials or missing permission
    #[error("authentication failed for {service}: {message}")]
    AuthenticationFailed {
        /// Service identifier
        service: String,
        /// Error message
        message: String,
    },

    /// Request quota exhausted
    #[error("quota exceeded for {service}: {message}")]
    QuotaExceeded {
        /// Service identifier
        service: String,
        /// Error message
        message: String,
    },

    /// Response body could not be decoded
    #[error("failed to parse response from {service}: {message}")]
    ParseError {
        /// Service identifier
        service: String,
        /// Error message
        message: String,
    },

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type alias for inspection operations.
pub type Result<T> = std::result::Result<T, InspectError>;
