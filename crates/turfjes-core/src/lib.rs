// Rust guideline compliant 2026-10-19

//! Turfjes Core Library
//!
//! This crate provides the persistence and integrity layer for the Turfjes
//! tally tracker:
//! - Data models (Person, Reason, RemovalReason, Mark, IdCounters)
//! - Generic versioned JSON document storage
//! - Persisted ID counters
//! - Registries for reasons, people and marks
//! - Configuration and error types

pub mod config;
pub mod error;
pub mod ids;
pub mod marks;
pub mod models;
pub mod people;
pub mod reasons;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
pub use ids::IdAllocator;
pub use marks::MarkRegistry;
pub use models::{IdCounters, Mark, MarkId, Person, PersonId, Reason, ReasonBook, RemovalReason};
pub use people::PersonRegistry;
pub use reasons::ReasonRegistry;
pub use storage::{Document, Store, SCHEMA_VERSION};
