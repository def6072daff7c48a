// Rust guideline compliant 2026-10-19

//! Data directory bootstrap and store file paths.

use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::info;
use turfjes_core::{Config, IdCounters, Mark, Person, ReasonBook, Store};

const SETTINGS_FILE: &str = "settings.json";
const PEOPLE_FILE: &str = "people.json";
const REASONS_FILE: &str = "usersettings.json";
const MARKS_FILE: &str = "turfjes.json";

/// Resolved paths for the store files of one data directory.
#[derive(Debug, Clone)]
pub struct DataDir {
    dir: PathBuf,
    settings_path: PathBuf,
    people_path: PathBuf,
    reasons_path: PathBuf,
    marks_path: PathBuf,
    pretty: bool,
}

impl DataDir {
    /// Resolves the configured data directory against `root` and creates it
    /// if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn prepare(root: &Path, config: &Config) -> Result<Self> {
        let dir = config.data_path(root);
        if !dir.exists() {
            std::fs::create_dir_all(&dir)?;
            info!(path = %dir.display(), "created data directory");
        }

        Ok(Self {
            settings_path: dir.join(SETTINGS_FILE),
            people_path: dir.join(PEOPLE_FILE),
            reasons_path: dir.join(REASONS_FILE),
            marks_path: dir.join(MARKS_FILE),
            pretty: config.pretty_json,
            dir,
        })
    }

    /// Returns the data directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.as_path()
    }

    /// Returns the ID counters path.
    #[must_use]
    pub fn settings_path(&self) -> &Path {
        self.settings_path.as_path()
    }

    /// Returns the people path.
    #[must_use]
    pub fn people_path(&self) -> &Path {
        self.people_path.as_path()
    }

    /// Returns the reasons path.
    #[must_use]
    pub fn reasons_path(&self) -> &Path {
        self.reasons_path.as_path()
    }

    /// Returns the marks path.
    #[must_use]
    pub fn marks_path(&self) -> &Path {
        self.marks_path.as_path()
    }

    /// Opens the ID counters store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be created.
    pub fn settings_store(&self) -> Result<Store<IdCounters>> {
        Ok(Store::new(self.settings_path.clone())?.with_pretty(self.pretty))
    }

    /// Opens the people store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be created.
    pub fn people_store(&self) -> Result<Store<Vec<Person>>> {
        Ok(Store::new(self.people_path.clone())?.with_pretty(self.pretty))
    }

    /// Opens the reasons store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be created.
    pub fn reasons_store(&self) -> Result<Store<ReasonBook>> {
        Ok(Store::new(self.reasons_path.clone())?.with_pretty(self.pretty))
    }

    /// Opens the marks store.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be created.
    pub fn marks_store(&self) -> Result<Store<Vec<Mark>>> {
        Ok(Store::new(self.marks_path.clone())?.with_pretty(self.pretty))
    }
}
