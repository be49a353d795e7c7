//! MindMate error type.

use thiserror::Error;

/// Convenience result alias used across all MindMate crates.
pub type Result<T> = std::result::Result<T, MindmateError>;

/// Errors produced anywhere in the MindMate stack.
#[derive(Debug, Error)]
pub enum MindmateError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("API key missing for provider '{0}'")]
    ApiKeyMissing(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
