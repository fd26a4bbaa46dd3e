//! Client error types.

use dataexplorer_core::arm::ApiError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {message}")]
    ServerError { status: u16, message: String },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ClientError> for ApiError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::NotFound { resource } => ApiError::NotFound { resource },
            ClientError::ServerError { status, message } => ApiError::Server { status, message },
            ClientError::InvalidResponse(message) => ApiError::InvalidResponse(message),
            ClientError::Json(e) => ApiError::InvalidResponse(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

/// Why a throughput save did not complete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    #[error("Throughput changes are not saveable")]
    NotSaveable,

    #[error("Throughput above the spend threshold must be acknowledged before saving")]
    AcknowledgementRequired,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Invalid configuration values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be an unsigned integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must not be empty")]
    Empty { name: &'static str },
}
