// Rust guideline compliant 2026-10-19

//! Persisted monotonic ID counters for people and marks.

use crate::models::{IdCounters, MarkId, PersonId};
use crate::storage::Store;
use crate::Result;
use tracing::debug;

/// Hands out person and mark IDs, persisting after every allocation.
///
/// IDs are never reused, even after the entity they named is deleted.
#[derive(Debug)]
pub struct IdAllocator {
    store: Store<IdCounters>,
    counters: IdCounters,
}

impl IdAllocator {
    /// Opens the allocator, initializing the backing file if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the counters cannot be loaded.
    pub fn open(store: Store<IdCounters>) -> Result<Self> {
        let counters = store.load()?;
        Ok(Self { store, counters })
    }

    /// Returns the last allocated IDs without allocating.
    pub fn peek(&self) -> IdCounters {
        self.counters
    }

    /// Allocates the next person ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the counters cannot be persisted.
    pub fn next_person_id(&mut self) -> Result<PersonId> {
        let mut counters = self.counters;
        counters.current_person_id += 1;
        self.store.save(&counters)?;
        self.counters = counters;
        debug!(id = counters.current_person_id, "allocated person id");
        Ok(counters.current_person_id)
    }

    /// Allocates the next mark ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the counters cannot be persisted.
    pub fn next_mark_id(&mut self) -> Result<MarkId> {
        let mut counters = self.counters;
        counters.current_mark_id += 1;
        self.store.save(&counters)?;
        self.counters = counters;
        debug!(id = counters.current_mark_id, "allocated mark id");
        Ok(counters.current_mark_id)
    }

    /// Sets both counters back to -1 so the next IDs start at 0.
    ///
    /// Only safe when the people and marks are reset as well.
    ///
    /// # Errors
    ///
    /// Returns an error if the counters cannot be persisted.
    pub fn reset(&mut self) -> Result<()> {
        self.counters = self.store.reset()?;
        Ok(())
    }
}
