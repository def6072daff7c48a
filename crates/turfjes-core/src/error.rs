// Rust guideline compliant 2026-10-19

//! Error types for the Turfjes core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Turfjes operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Turfjes operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A store file exists but its content cannot be used.
    #[error("Corrupt store at {}: {reason}", path.display())]
    CorruptStore {
        /// Path of the offending file.
        path: PathBuf,
        /// What was wrong with the content.
        reason: String,
    },

    /// Person not found.
    #[error("Person with id {0} does not exist")]
    PersonNotFound(i64),

    /// Mark not found.
    #[error("Mark with id {0} does not exist")]
    MarkNotFound(i64),

    /// A reason with this abbreviation is already registered in its collection.
    #[error("A reason with this abbreviation already exists: {0}")]
    ReasonAlreadyExists(String),

    /// No reason (or removal reason) with this abbreviation.
    #[error("No reason with this abbreviation found: {0}")]
    ReasonNotFound(String),

    /// Caller supplied an argument outside its valid range.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration file or environment override is invalid.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
