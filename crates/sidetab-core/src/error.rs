//! Error types for sidetab

use thiserror::Error;

/// Main error type for sidetab operations
#[derive(Error, Debug)]
pub enum SideTabError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings error (serialization, malformed stored options)
    #[error("Settings error: {0}")]
    Settings(String),
}

/// Result type alias for sidetab operations
pub type Result<T> = std::result::Result<T, SideTabError>;
