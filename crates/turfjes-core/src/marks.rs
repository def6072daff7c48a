// Rust guideline compliant 2026-10-19

//! Registry for marks and the oldest-first removal algorithm.
//!
//! The registry does no cross-entity validation: person and reason
//! existence is checked by the caller before marks are created or removed.

use crate::models::{Mark, MarkId, PersonId, RemovalReason};
use crate::storage::Store;
use crate::{Error, Result};
use tracing::info;

/// In-memory list of marks backed by a store file.
#[derive(Debug)]
pub struct MarkRegistry {
    store: Store<Vec<Mark>>,
    marks: Vec<Mark>,
}

impl MarkRegistry {
    /// Opens the registry, initializing the backing file if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be loaded.
    pub fn open(store: Store<Vec<Mark>>) -> Result<Self> {
        let marks = store.load()?;
        Ok(Self { store, marks })
    }

    /// Returns all marks in storage order.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Gets a mark by ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MarkNotFound`] if no mark has this ID.
    pub fn get_mark(&self, id: MarkId) -> Result<&Mark> {
        self.marks
            .iter()
            .find(|m| m.id == id)
            .ok_or(Error::MarkNotFound(id))
    }

    /// Returns every mark of a person, active and removed, in storage order.
    pub fn get_marks_for_person(&self, person_id: PersonId) -> Vec<Mark> {
        self.marks
            .iter()
            .filter(|m| m.person_id == person_id)
            .cloned()
            .collect()
    }

    /// Returns the marks of a person that have not been removed.
    pub fn active_marks_for_person(&self, person_id: PersonId) -> Vec<Mark> {
        self.marks
            .iter()
            .filter(|m| m.person_id == person_id && m.is_active())
            .cloned()
            .collect()
    }

    /// Appends a new active mark and persists the list.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `creation_date` is NaN or infinite
    /// - The list cannot be saved
    pub fn create_mark(
        &mut self,
        id: MarkId,
        person_id: PersonId,
        reason_abbreviation: &str,
        creation_date: f64,
    ) -> Result<Mark> {
        // JSON has no encoding for these; they would be written as null.
        if !creation_date.is_finite() {
            return Err(Error::InvalidInput(format!(
                "creation date of mark {id} must be finite, got {creation_date}"
            )));
        }

        let mark = Mark::new(id, person_id, reason_abbreviation.to_string(), creation_date);
        let mut marks = self.marks.clone();
        marks.push(mark.clone());
        self.commit(marks)?;

        info!(id, person_id, reason = reason_abbreviation, "mark created");
        Ok(mark)
    }

    /// Marks a single mark as removed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No mark has this ID
    /// - The list cannot be saved
    pub fn remove_mark_by_id(
        &mut self,
        id: MarkId,
        removal_reason_abbreviation: &str,
    ) -> Result<Mark> {
        let pos = self
            .marks
            .iter()
            .position(|m| m.id == id)
            .ok_or(Error::MarkNotFound(id))?;

        let mut marks = self.marks.clone();
        let mark = &mut marks[pos];
        mark.removed = true;
        mark.removal_reason_abbreviation = removal_reason_abbreviation.to_string();
        let removed = mark.clone();
        self.commit(marks)?;

        info!(id, removal_reason = removal_reason_abbreviation, "mark removed");
        Ok(removed)
    }

    /// Removes up to `reason.removal_count` of the person's oldest active
    /// marks and returns them in removal order.
    ///
    /// Having fewer active marks than the count is not an error; all of
    /// them are removed. Among marks with the same creation date the one
    /// stored last goes first.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be saved.
    pub fn remove_marks(
        &mut self,
        person_id: PersonId,
        reason: &RemovalReason,
    ) -> Result<Vec<Mark>> {
        let mut candidates: Vec<(MarkId, f64)> = self
            .marks
            .iter()
            .filter(|m| m.person_id == person_id && m.is_active())
            .map(|m| (m.id, m.creation_date))
            .collect();

        // Newest first, so popping from the back yields the oldest.
        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut removed = Vec::new();
        for _ in 0..reason.removal_count {
            let Some((id, _)) = candidates.pop() else {
                break;
            };
            removed.push(self.remove_mark_by_id(id, &reason.abbreviation)?);
        }

        info!(
            person_id,
            removal_reason = %reason.abbreviation,
            requested = reason.removal_count,
            removed = removed.len(),
            "marks removed"
        );
        Ok(removed)
    }

    /// Saves `marks` and only then makes it the in-memory list.
    fn commit(&mut self, marks: Vec<Mark>) -> Result<()> {
        self.store.save(&marks)?;
        self.marks = marks;
        Ok(())
    }

    /// Removes every mark.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be saved.
    pub fn reset(&mut self) -> Result<()> {
        self.marks = self.store.reset()?;
        Ok(())
    }
}
