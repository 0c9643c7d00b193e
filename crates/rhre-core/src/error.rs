//! Error types for RHRE

use thiserror::Error;

/// Main error type for RHRE operations
#[derive(Debug, Error)]
pub enum RhreError {
    /// A range rule whose start lies after its end
    #[error("Invalid range: {0}")]
    InvalidRange(String),

    /// A thumbnail could not be requested or loaded
    #[error("Thumbnail error: {0}")]
    Thumbnail(String),

    /// Persisted preferences could not be read or written
    #[error("Preferences error: {0}")]
    Preferences(String),
}

/// Result type alias for RHRE operations
pub type Result<T> = std::result::Result<T, RhreError>;
