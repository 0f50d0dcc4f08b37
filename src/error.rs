//! Error types for menutree
//!
//! The tree engine itself never fails. These errors belong to the outer
//! layers: reading payload snapshots and configuration files.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for menutree operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for menutree operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload is not valid JSON
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// Payload is valid JSON but not a menu
    #[error("invalid menu payload: {message}")]
    InvalidPayload { message: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Requested menu identifier is not in the payload
    #[error("menu '{identifier}' not found (available: {})", .available.join(", "))]
    MenuNotFound {
        identifier: String,
        available: Vec<String>,
    },
}
