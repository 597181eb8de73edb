//! Error types for Bookr
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur in Bookr
#[derive(Debug, Error)]
pub enum BookrError {
    /// Configuration loading or parsing error
    #[error("Config error: {0}")]
    Config(String),

    /// Remote catalog call error
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Tool execution error
    #[error("Tool error: {0}")]
    Tool(String),

    /// Transport (stdio) error
    #[error("Transport error: {0}")]
    Transport(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Bookr operations
pub type Result<T> = std::result::Result<T, BookrError>;
