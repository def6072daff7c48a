// Rust guideline compliant 2026-10-19

//! Core data models for Turfjes.
//!
//! Field names on disk follow the established file layout (`personId`,
//! `remReasonAbbreviation`, `turfjeCount`, ...), so every struct carries
//! explicit serde renames.

use crate::storage::Document;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Identifier of a person.
pub type PersonId = i64;

/// Identifier of a mark.
pub type MarkId = i64;

/// A committee member who can collect marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier handed out by the ID allocator.
    pub id: PersonId,
    /// Display name.
    pub name: String,
    /// Position within the committee.
    pub position: String,
}

/// A labeled justification for handing out a mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    /// Short unique key, e.g. `late`.
    pub abbreviation: String,
    /// Human readable description.
    pub description: String,
}

/// A labeled justification for removing a person's oldest active marks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalReason {
    /// Short unique key within the removal reasons.
    pub abbreviation: String,
    /// Human readable description.
    pub description: String,
    /// Number of marks removed per invocation (at least 1).
    #[serde(rename = "turfjeCount")]
    pub removal_count: u32,
}

/// A single tally unit recorded against a person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mark {
    /// Unique identifier handed out by the ID allocator.
    pub id: MarkId,
    /// Owning person. May dangle after the person is deleted.
    #[serde(rename = "personId")]
    pub person_id: PersonId,
    /// Reason the mark was handed out, fixed at creation.
    #[serde(rename = "reasonAbbreviation")]
    pub reason_abbreviation: String,
    /// Removal reason, empty until the mark is removed.
    #[serde(rename = "remReasonAbbreviation")]
    pub removal_reason_abbreviation: String,
    /// Seconds since the Unix epoch.
    #[serde(rename = "creationDate")]
    pub creation_date: f64,
    /// Whether the mark has been removed.
    pub removed: bool,
}

impl Mark {
    /// Creates a new active mark.
    pub fn new(
        id: MarkId,
        person_id: PersonId,
        reason_abbreviation: String,
        creation_date: f64,
    ) -> Self {
        Self {
            id,
            person_id,
            reason_abbreviation,
            removal_reason_abbreviation: String::new(),
            creation_date,
            removed: false,
        }
    }

    /// Returns true if the mark still counts against its person.
    pub fn is_active(&self) -> bool {
        !self.removed
    }
}

/// Last handed out IDs for people and marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCounters {
    /// Last allocated mark ID, -1 before the first allocation.
    #[serde(rename = "currentTurfjeID")]
    pub current_mark_id: MarkId,
    /// Last allocated person ID, -1 before the first allocation.
    #[serde(rename = "currentPersonID")]
    pub current_person_id: PersonId,
}

impl Default for IdCounters {
    fn default() -> Self {
        Self {
            current_mark_id: -1,
            current_person_id: -1,
        }
    }
}

/// The reasons document: plain reasons and removal reasons side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasonBook {
    /// Reasons usable when creating marks.
    pub reasons: Vec<Reason>,
    /// Reasons usable when removing marks.
    #[serde(rename = "removalReasons")]
    pub removal_reasons: Vec<RemovalReason>,
}

fn first_duplicate<'a, T, I>(keys: I) -> Option<T>
where
    T: std::hash::Hash + Eq + Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut seen = HashSet::new();
    keys.into_iter().find(|key| !seen.insert(*key)).cloned()
}

impl Document for IdCounters {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.current_mark_id < -1 || self.current_person_id < -1 {
            return Err(format!(
                "ID counters must be at least -1, got mark={} person={}",
                self.current_mark_id, self.current_person_id
            ));
        }
        Ok(())
    }
}

impl Document for Vec<Person> {
    fn validate(&self) -> std::result::Result<(), String> {
        match first_duplicate(self.iter().map(|person| &person.id)) {
            Some(id) => Err(format!("duplicate person id {id}")),
            None => Ok(()),
        }
    }
}

impl Document for Vec<Mark> {
    fn validate(&self) -> std::result::Result<(), String> {
        match first_duplicate(self.iter().map(|mark| &mark.id)) {
            Some(id) => Err(format!("duplicate mark id {id}")),
            None => Ok(()),
        }
    }
}

impl Document for ReasonBook {
    fn validate(&self) -> std::result::Result<(), String> {
        if let Some(abbr) = first_duplicate(self.reasons.iter().map(|r| &r.abbreviation)) {
            return Err(format!("duplicate reason abbreviation `{abbr}`"));
        }

        if let Some(abbr) = first_duplicate(self.removal_reasons.iter().map(|r| &r.abbreviation))
        {
            return Err(format!("duplicate removal reason abbreviation `{abbr}`"));
        }

        if let Some(reason) = self.removal_reasons.iter().find(|r| r.removal_count == 0) {
            return Err(format!(
                "removal reason `{}` must remove at least one mark",
                reason.abbreviation
            ));
        }

        Ok(())
    }
}
