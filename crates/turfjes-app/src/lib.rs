// Rust guideline compliant 2026-10-19

//! Application services for Turfjes.
//!
//! This crate provides the single entry point external callers use: the
//! [`Database`] facade, which validates references across people, reasons
//! and marks before delegating to the core registries. It also carries the
//! data directory bootstrap, stable error codes and tracing setup.

pub mod data_dir;
pub mod database;
pub mod error;
pub mod logging;
pub mod time;

pub use data_dir::DataDir;
pub use database::{Database, RemovalTarget};
pub use error::{AppError, ErrorCode, Result};
pub use logging::init_tracing;
pub use time::unix_timestamp;
