//! Error types for the dropctl client

use thiserror::Error;

/// Errors that can occur when talking to the DigitalOcean API
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// API returned an error status
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// No droplet with the requested name exists
    #[error("droplet not found: {name}")]
    DropletNotFound {
        /// Name that was looked up
        name: String,
    },
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
