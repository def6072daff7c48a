// Rust guideline compliant 2026-10-19

//! Registry for reasons and removal reasons.
//!
//! Both collections live in one document. Abbreviations are unique within
//! each collection, but a reason and a removal reason may share one.

use crate::models::{Reason, ReasonBook, RemovalReason};
use crate::storage::Store;
use crate::{Error, Result};
use tracing::info;

/// In-memory reasons document backed by a store file.
#[derive(Debug)]
pub struct ReasonRegistry {
    store: Store<ReasonBook>,
    book: ReasonBook,
}

impl ReasonRegistry {
    /// Opens the registry, initializing the backing file if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be loaded.
    pub fn open(store: Store<ReasonBook>) -> Result<Self> {
        let book = store.load()?;
        Ok(Self { store, book })
    }

    /// Returns all reasons in storage order.
    pub fn reasons(&self) -> &[Reason] {
        &self.book.reasons
    }

    /// Returns all removal reasons in storage order.
    pub fn removal_reasons(&self) -> &[RemovalReason] {
        &self.book.removal_reasons
    }

    /// Gets a reason by abbreviation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReasonNotFound`] if no reason has this abbreviation.
    pub fn get_reason(&self, abbreviation: &str) -> Result<&Reason> {
        self.book
            .reasons
            .iter()
            .find(|r| r.abbreviation == abbreviation)
            .ok_or_else(|| Error::ReasonNotFound(abbreviation.to_string()))
    }

    /// Creates a new reason and persists it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A reason with this abbreviation already exists
    /// - The document cannot be saved
    pub fn create_reason(&mut self, abbreviation: &str, description: &str) -> Result<Reason> {
        if self.get_reason(abbreviation).is_ok() {
            return Err(Error::ReasonAlreadyExists(abbreviation.to_string()));
        }

        let reason = Reason {
            abbreviation: abbreviation.to_string(),
            description: description.to_string(),
        };
        let mut book = self.book.clone();
        book.reasons.push(reason.clone());
        self.commit(book)?;

        info!(abbreviation, "reason created");
        Ok(reason)
    }

    /// Deletes a reason and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No reason has this abbreviation
    /// - The document cannot be saved
    pub fn delete_reason(&mut self, abbreviation: &str) -> Result<Reason> {
        let pos = self
            .book
            .reasons
            .iter()
            .position(|r| r.abbreviation == abbreviation)
            .ok_or_else(|| Error::ReasonNotFound(abbreviation.to_string()))?;

        let mut book = self.book.clone();
        let reason = book.reasons.remove(pos);
        self.commit(book)?;

        info!(abbreviation, "reason deleted");
        Ok(reason)
    }

    /// Gets a removal reason by abbreviation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReasonNotFound`] if no removal reason has this
    /// abbreviation.
    pub fn get_removal_reason(&self, abbreviation: &str) -> Result<&RemovalReason> {
        self.book
            .removal_reasons
            .iter()
            .find(|r| r.abbreviation == abbreviation)
            .ok_or_else(|| Error::ReasonNotFound(abbreviation.to_string()))
    }

    /// Creates a new removal reason and persists it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `removal_count` is zero
    /// - A removal reason with this abbreviation already exists
    /// - The document cannot be saved
    pub fn create_removal_reason(
        &mut self,
        abbreviation: &str,
        description: &str,
        removal_count: u32,
    ) -> Result<RemovalReason> {
        if removal_count == 0 {
            return Err(Error::InvalidInput(format!(
                "removal reason `{abbreviation}` must remove at least one mark"
            )));
        }

        if self.get_removal_reason(abbreviation).is_ok() {
            return Err(Error::ReasonAlreadyExists(abbreviation.to_string()));
        }

        let reason = RemovalReason {
            abbreviation: abbreviation.to_string(),
            description: description.to_string(),
            removal_count,
        };
        let mut book = self.book.clone();
        book.removal_reasons.push(reason.clone());
        self.commit(book)?;

        info!(abbreviation, removal_count, "removal reason created");
        Ok(reason)
    }

    /// Deletes a removal reason and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No removal reason has this abbreviation
    /// - The document cannot be saved
    pub fn delete_removal_reason(&mut self, abbreviation: &str) -> Result<RemovalReason> {
        let pos = self
            .book
            .removal_reasons
            .iter()
            .position(|r| r.abbreviation == abbreviation)
            .ok_or_else(|| Error::ReasonNotFound(abbreviation.to_string()))?;

        let mut book = self.book.clone();
        let reason = book.removal_reasons.remove(pos);
        self.commit(book)?;

        info!(abbreviation, "removal reason deleted");
        Ok(reason)
    }

    /// Saves `book` and only then makes it the in-memory document.
    fn commit(&mut self, book: ReasonBook) -> Result<()> {
        self.store.save(&book)?;
        self.book = book;
        Ok(())
    }

    /// Empties both collections.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be saved.
    pub fn reset(&mut self) -> Result<()> {
        self.book = self.store.reset()?;
        Ok(())
    }
}
