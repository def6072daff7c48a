// Rust guideline compliant 2026-10-19

//! Error handling for Turfjes application services.

use serde::Serialize;
use thiserror::Error;
use turfjes_core::Error as CoreError;

/// Result type alias for application-level operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Stable error codes for callers that render or forward failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The requested person, mark or reason was not found.
    NotFound,
    /// A reason with the same abbreviation already exists.
    AlreadyExists,
    /// A store file could not be parsed or validated.
    CorruptStore,
    /// The request included invalid inputs.
    InvalidInput,
    /// Configuration could not be loaded.
    ConfigError,
    /// IO failure while reading or writing store data.
    IoError,
    /// JSON serialization failed.
    JsonError,
    /// Logging could not be set up.
    LoggingError,
}

/// Application-level errors with stable mapping to error codes.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid input was provided by the caller.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unsupported tracing level.
    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    /// Error from core library operations.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error not represented by core errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Returns a stable error code for the error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::InvalidInput(_) => ErrorCode::InvalidInput,
            AppError::InvalidLogLevel(_) => ErrorCode::LoggingError,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Core(core) => match core {
                CoreError::PersonNotFound(_)
                | CoreError::MarkNotFound(_)
                | CoreError::ReasonNotFound(_) => ErrorCode::NotFound,
                CoreError::ReasonAlreadyExists(_) => ErrorCode::AlreadyExists,
                CoreError::CorruptStore { .. } => ErrorCode::CorruptStore,
                CoreError::InvalidInput(_) => ErrorCode::InvalidInput,
                CoreError::InvalidConfig(_) => ErrorCode::ConfigError,
                CoreError::Io(_) => ErrorCode::IoError,
                CoreError::Json(_) => ErrorCode::JsonError,
            },
        }
    }

    /// Returns structured details for errors that benefit from extra context.
    #[must_use]
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            AppError::Core(core) => match core {
                CoreError::PersonNotFound(id) => Some(serde_json::json!({ "person_id": id })),
                CoreError::MarkNotFound(id) => Some(serde_json::json!({ "mark_id": id })),
                CoreError::ReasonNotFound(abbreviation)
                | CoreError::ReasonAlreadyExists(abbreviation) => {
                    Some(serde_json::json!({ "abbreviation": abbreviation }))
                }
                CoreError::CorruptStore { path, reason } => Some(serde_json::json!({
                    "path": path,
                    "reason": reason,
                })),
                _ => None,
            },
            _ => None,
        }
    }
}
