// Rust guideline compliant 2026-10-19

//! Timestamp helpers for Turfjes.

use crate::error::{AppError, Result};
use std::time::{SystemTime, UNIX_EPOCH};

/// Returns the current Unix timestamp in fractional seconds.
///
/// # Errors
///
/// Returns an error if the system clock is before the Unix epoch.
pub fn unix_timestamp() -> Result<f64> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|err| AppError::InvalidInput(format!("System time before epoch: {err}")))?
        .as_secs_f64();
    Ok(now)
}
