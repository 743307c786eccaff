//! Error types for the content API client.

use thiserror::Error;

/// Errors that can occur when talking to the content API.
#[derive(Error, Debug)]
pub enum ApiClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream error ({status}): {message}")]
    Status { status: u16, message: String },

    /// Success status, but the expected envelope field is missing
    #[error("Malformed {resource} response: missing field `{field}`")]
    MalformedResponse {
        resource: &'static str,
        field: &'static str,
    },

    /// Body is not JSON, or the records have the wrong shape
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Invalid base URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Upstream is offline or unreachable
    #[error("API unreachable: {0}")]
    ServerUnreachable(String),
}

impl ApiClientError {
    /// Whether this is the "success status, missing field" condition
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedResponse { .. })
    }
}

/// Result type for content API operations.
pub type Result<T> = std::result::Result<T, ApiClientError>;
