// Rust guideline compliant 2026-10-19

//! The `Database` facade.
//!
//! Composes the ID allocator and the reason, person and mark registries,
//! checks references across them and exposes one API to callers. Failures
//! from the registries are passed through unchanged.

use crate::data_dir::DataDir;
use crate::error::Result;
use crate::time::unix_timestamp;
use std::path::Path;
use tracing::{info, warn};
use turfjes_core::{
    Config, IdAllocator, Mark, MarkId, MarkRegistry, Person, PersonId, PersonRegistry, Reason,
    ReasonRegistry, RemovalReason,
};

/// What to remove marks by: an abbreviation still to be looked up, or a
/// removal reason the caller already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalTarget<'a> {
    /// Abbreviation of a registered removal reason.
    Abbreviation(&'a str),
    /// An already resolved removal reason; its own count is used.
    Reason(&'a RemovalReason),
}

impl<'a> From<&'a str> for RemovalTarget<'a> {
    fn from(abbreviation: &'a str) -> Self {
        RemovalTarget::Abbreviation(abbreviation)
    }
}

impl<'a> From<&'a String> for RemovalTarget<'a> {
    fn from(abbreviation: &'a String) -> Self {
        RemovalTarget::Abbreviation(abbreviation.as_str())
    }
}

impl<'a> From<&'a RemovalReason> for RemovalTarget<'a> {
    fn from(reason: &'a RemovalReason) -> Self {
        RemovalTarget::Reason(reason)
    }
}

/// Central entry point for all record keeping operations.
#[derive(Debug)]
pub struct Database {
    config: Config,
    data_dir: DataDir,
    ids: IdAllocator,
    reasons: ReasonRegistry,
    people: PersonRegistry,
    marks: MarkRegistry,
}

impl Database {
    /// Opens the database rooted at `root` with the given configuration.
    ///
    /// Creates the data directory and any missing store files.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The data directory cannot be created
    /// - A store file cannot be read, initialized or parsed
    pub fn open(root: &Path, config: Config) -> Result<Self> {
        let data_dir = DataDir::prepare(root, &config)?;

        let ids = IdAllocator::open(data_dir.settings_store()?)?;
        let reasons = ReasonRegistry::open(data_dir.reasons_store()?)?;
        let marks = MarkRegistry::open(data_dir.marks_store()?)?;
        let people = PersonRegistry::open(data_dir.people_store()?)?;

        info!(
            path = %data_dir.path().display(),
            people = people.people().len(),
            marks = marks.marks().len(),
            "database opened"
        );

        Ok(Self {
            config,
            data_dir,
            ids,
            reasons,
            people,
            marks,
        })
    }

    /// Loads `<root>/turfjes.toml` (plus environment overrides) and opens
    /// the database with it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or opening fails.
    pub fn open_with_config_file(root: &Path) -> Result<Self> {
        let config = Config::load(root)?;
        Self::open(root, config)
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the store file locations.
    #[must_use]
    pub fn data_dir(&self) -> &DataDir {
        &self.data_dir
    }

    // ----------- Reasons -----------

    /// Returns all reasons in storage order.
    #[must_use]
    pub fn reasons(&self) -> &[Reason] {
        self.reasons.reasons()
    }

    /// Gets a reason by abbreviation.
    ///
    /// # Errors
    ///
    /// Returns an error if no reason has this abbreviation.
    pub fn get_reason(&self, abbreviation: &str) -> Result<Reason> {
        Ok(self.reasons.get_reason(abbreviation)?.clone())
    }

    /// Creates a new reason.
    ///
    /// # Errors
    ///
    /// Returns an error if the abbreviation is taken or saving fails.
    pub fn create_reason(&mut self, abbreviation: &str, description: &str) -> Result<Reason> {
        Ok(self.reasons.create_reason(abbreviation, description)?)
    }

    /// Deletes a reason. Marks already handed out for it keep the abbreviation.
    ///
    /// # Errors
    ///
    /// Returns an error if no reason has this abbreviation or saving fails.
    pub fn delete_reason(&mut self, abbreviation: &str) -> Result<Reason> {
        Ok(self.reasons.delete_reason(abbreviation)?)
    }

    // ----------- Removal reasons -----------

    /// Returns all removal reasons in storage order.
    #[must_use]
    pub fn removal_reasons(&self) -> &[RemovalReason] {
        self.reasons.removal_reasons()
    }

    /// Gets a removal reason by abbreviation.
    ///
    /// # Errors
    ///
    /// Returns an error if no removal reason has this abbreviation.
    pub fn get_removal_reason(&self, abbreviation: &str) -> Result<RemovalReason> {
        Ok(self.reasons.get_removal_reason(abbreviation)?.clone())
    }

    /// Creates a removal reason that removes the configured default number
    /// of marks (1 unless configured otherwise).
    ///
    /// # Errors
    ///
    /// Returns an error if the abbreviation is taken or saving fails.
    pub fn create_removal_reason(
        &mut self,
        abbreviation: &str,
        description: &str,
    ) -> Result<RemovalReason> {
        let count = self.config.default_removal_count;
        self.create_removal_reason_with_count(abbreviation, description, count)
    }

    /// Creates a removal reason that removes `removal_count` marks.
    ///
    /// # Errors
    ///
    /// Returns an error if the count is zero, the abbreviation is taken or
    /// saving fails.
    pub fn create_removal_reason_with_count(
        &mut self,
        abbreviation: &str,
        description: &str,
        removal_count: u32,
    ) -> Result<RemovalReason> {
        Ok(self
            .reasons
            .create_removal_reason(abbreviation, description, removal_count)?)
    }

    /// Deletes a removal reason.
    ///
    /// # Errors
    ///
    /// Returns an error if no removal reason has this abbreviation or saving
    /// fails.
    pub fn delete_removal_reason(&mut self, abbreviation: &str) -> Result<RemovalReason> {
        Ok(self.reasons.delete_removal_reason(abbreviation)?)
    }

    // ----------- Marks -----------

    /// Gets a mark by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if no mark has this ID.
    pub fn get_mark(&self, id: MarkId) -> Result<Mark> {
        Ok(self.marks.get_mark(id)?.clone())
    }

    /// Returns every mark of a person, active and removed.
    #[must_use]
    pub fn get_marks(&self, person_id: PersonId) -> Vec<Mark> {
        self.marks.get_marks_for_person(person_id)
    }

    /// Returns the marks of a person that still count.
    #[must_use]
    pub fn get_active_marks(&self, person_id: PersonId) -> Vec<Mark> {
        self.marks.active_marks_for_person(person_id)
    }

    /// Hands out a mark timestamped now.
    ///
    /// # Errors
    ///
    /// See [`Database::create_mark_at`].
    pub fn create_mark(&mut self, person_id: PersonId, reason_abbreviation: &str) -> Result<Mark> {
        let now = unix_timestamp()?;
        self.create_mark_at(person_id, reason_abbreviation, now)
    }

    /// Hands out a mark with an explicit creation date (seconds since epoch).
    ///
    /// The mark ID is allocated before the person and reason are checked, so
    /// a failed call still consumes an ID.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The person does not exist
    /// - The reason does not exist
    /// - `creation_date` is NaN or infinite
    /// - Saving fails
    pub fn create_mark_at(
        &mut self,
        person_id: PersonId,
        reason_abbreviation: &str,
        creation_date: f64,
    ) -> Result<Mark> {
        let id = self.ids.next_mark_id()?;

        self.people.get_person(person_id)?;
        self.reasons.get_reason(reason_abbreviation)?;

        Ok(self
            .marks
            .create_mark(id, person_id, reason_abbreviation, creation_date)?)
    }

    /// Removes a person's oldest active marks under a removal reason and
    /// returns the removed marks, oldest first.
    ///
    /// `removal` is either an abbreviation or an already resolved
    /// [`RemovalReason`]; a resolved value must still be registered.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The person does not exist
    /// - The removal reason does not exist
    /// - Saving fails
    pub fn remove_marks<'a>(
        &mut self,
        person_id: PersonId,
        removal: impl Into<RemovalTarget<'a>>,
    ) -> Result<Vec<Mark>> {
        self.people.get_person(person_id)?;

        let reason = match removal.into() {
            RemovalTarget::Abbreviation(abbreviation) => {
                self.reasons.get_removal_reason(abbreviation)?
            }
            RemovalTarget::Reason(reason) => {
                self.reasons.get_removal_reason(&reason.abbreviation)?;
                reason
            }
        };

        Ok(self.marks.remove_marks(person_id, reason)?)
    }

    // ----------- People -----------

    /// Returns all people in storage order.
    #[must_use]
    pub fn people(&self) -> &[Person] {
        self.people.people()
    }

    /// Gets a person by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if no person has this ID.
    pub fn get_person(&self, id: PersonId) -> Result<Person> {
        Ok(self.people.get_person(id)?.clone())
    }

    /// Registers a new person under the next free person ID.
    ///
    /// # Errors
    ///
    /// Returns an error if saving fails.
    pub fn create_person(&mut self, name: &str, position: &str) -> Result<Person> {
        let id = self.ids.next_person_id()?;
        Ok(self.people.create_person(id, name, position)?)
    }

    /// Updates a person. Empty strings keep the current value.
    ///
    /// # Errors
    ///
    /// Returns an error if no person has this ID or saving fails.
    pub fn update_person(&mut self, id: PersonId, name: &str, position: &str) -> Result<Person> {
        Ok(self.people.update_person(id, name, position)?)
    }

    /// Deletes a person. Their marks stay behind with a dangling person ID.
    ///
    /// # Errors
    ///
    /// Returns an error if no person has this ID or saving fails.
    pub fn delete_person(&mut self, id: PersonId) -> Result<Person> {
        Ok(self.people.delete_person(id)?)
    }

    // ----------- General -----------

    /// Empties every store and restarts ID allocation at 0. Irreversible.
    ///
    /// # Errors
    ///
    /// Returns an error if any store cannot be written.
    pub fn reset(&mut self) -> Result<()> {
        warn!(path = %self.data_dir.path().display(), "resetting all stores");
        self.ids.reset()?;
        self.reasons.reset()?;
        self.marks.reset()?;
        self.people.reset()?;
        Ok(())
    }
}
