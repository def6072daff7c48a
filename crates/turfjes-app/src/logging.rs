// Rust guideline compliant 2026-10-19

//! Tracing subscriber setup.

use crate::error::{AppError, Result};
use std::fs::OpenOptions;
use std::path::Path;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;

/// Installs a JSON tracing subscriber as the global default.
///
/// With a `log_file`, events are appended to that file through a
/// non-blocking writer; keep the returned guard alive until shutdown so
/// buffered events are flushed. Without one, events go to stdout.
/// A subscriber that is already installed is left in place.
///
/// # Errors
///
/// Returns an error if the level is unsupported or the file cannot be opened.
pub fn init_tracing(level: &str, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = parse_log_level(level)?;

    if let Some(path) = log_file {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let (writer, guard) = tracing_appender::non_blocking(file);
        let subscriber = fmt()
            .with_max_level(level)
            .with_target(false)
            .json()
            .with_writer(writer)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
        return Ok(Some(guard));
    }

    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .json()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(None)
}

fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => Err(AppError::InvalidLogLevel(other.to_string())),
    }
}
