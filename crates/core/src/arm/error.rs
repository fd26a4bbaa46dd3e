use thiserror::Error;

/// Errors returned by control-plane implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },
    #[error("Server returned {status}: {message}")]
    Server { status: u16, message: String },
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

/// Result type for control-plane operations.
pub type Result<T> = std::result::Result<T, ApiError>;
