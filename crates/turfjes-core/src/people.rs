// Rust guideline compliant 2026-10-19

//! Registry for committee members.

use crate::models::{Person, PersonId};
use crate::storage::Store;
use crate::{Error, Result};
use tracing::info;

/// In-memory list of people backed by a store file.
#[derive(Debug)]
pub struct PersonRegistry {
    store: Store<Vec<Person>>,
    people: Vec<Person>,
}

impl PersonRegistry {
    /// Opens the registry, initializing the backing file if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be loaded.
    pub fn open(store: Store<Vec<Person>>) -> Result<Self> {
        let people = store.load()?;
        Ok(Self { store, people })
    }

    /// Returns all people in storage order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    fn position(&self, id: PersonId) -> Result<usize> {
        self.people
            .iter()
            .position(|p| p.id == id)
            .ok_or(Error::PersonNotFound(id))
    }

    /// Gets a person by ID.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PersonNotFound`] if no person has this ID.
    pub fn get_person(&self, id: PersonId) -> Result<&Person> {
        let pos = self.position(id)?;
        Ok(&self.people[pos])
    }

    /// Appends a new person and persists the list.
    ///
    /// The ID is not checked for uniqueness; callers obtain it from the
    /// [`IdAllocator`](crate::IdAllocator).
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be saved.
    pub fn create_person(&mut self, id: PersonId, name: &str, position: &str) -> Result<Person> {
        let person = Person {
            id,
            name: name.to_string(),
            position: position.to_string(),
        };
        let mut people = self.people.clone();
        people.push(person.clone());
        self.commit(people)?;

        info!(id, "person created");
        Ok(person)
    }

    /// Updates a person in place. An empty `name` or `position` keeps the
    /// current value.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No person has this ID
    /// - The list cannot be saved
    pub fn update_person(&mut self, id: PersonId, name: &str, position: &str) -> Result<Person> {
        let pos = self.position(id)?;

        let mut people = self.people.clone();
        let person = &mut people[pos];
        if !name.is_empty() {
            person.name = name.to_string();
        }
        if !position.is_empty() {
            person.position = position.to_string();
        }
        let updated = person.clone();
        self.commit(people)?;

        info!(id, "person updated");
        Ok(updated)
    }

    /// Deletes a person and returns it. Their marks are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No person has this ID
    /// - The list cannot be saved
    pub fn delete_person(&mut self, id: PersonId) -> Result<Person> {
        let pos = self.position(id)?;
        let mut people = self.people.clone();
        let person = people.remove(pos);
        self.commit(people)?;

        info!(id, "person deleted");
        Ok(person)
    }

    /// Saves `people` and only then makes it the in-memory list.
    fn commit(&mut self, people: Vec<Person>) -> Result<()> {
        self.store.save(&people)?;
        self.people = people;
        Ok(())
    }

    /// Removes every person.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be saved.
    pub fn reset(&mut self) -> Result<()> {
        self.people = self.store.reset()?;
        Ok(())
    }
}
