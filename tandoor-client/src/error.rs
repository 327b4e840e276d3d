//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Missing or rejected session
    #[error("Authentication required")]
    Unauthorized,

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (400 with a human-readable message)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Requested portion not offered by the item
    #[error("Portion '{portion}' is not offered for '{item}'")]
    PortionNotOffered {
        item: String,
        portion: shared::models::Portion,
    },

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Cart persistence I/O failure
    #[error("Store error: {0}")]
    Store(#[from] std::io::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
