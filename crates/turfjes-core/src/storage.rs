// Rust guideline compliant 2026-10-19

//! Storage module for whole-document JSON files.
//!
//! Each file holds one document wrapped in a versioned envelope:
//!
//! ```text
//! {"schemaVersion": 1, "data": <document>}
//! ```
//!
//! Files written before versioning (a bare document) are still readable.
//! Every save rewrites the file in full through a temp file and a rename.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Current on-disk schema version.
pub const SCHEMA_VERSION: u32 = 1;

const SCHEMA_KEY: &str = "schemaVersion";
const DATA_KEY: &str = "data";

/// A value that can be persisted as a single store document.
pub trait Document: Serialize + DeserializeOwned + Default {
    /// Checks invariants serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violated invariant.
    fn validate(&self) -> std::result::Result<(), String> {
        Ok(())
    }
}

#[derive(Serialize)]
struct Envelope<'a, T> {
    #[serde(rename = "schemaVersion")]
    schema_version: u32,
    data: &'a T,
}

/// Persistence helper for one JSON document of type `T`.
#[derive(Debug)]
pub struct Store<T> {
    /// Path to the JSON file.
    path: PathBuf,
    /// Whether to pretty-print on save.
    pretty: bool,
    _doc: PhantomData<T>,
}

impl<T: Document> Store<T> {
    /// Creates a new Store instance. Nothing is read or written yet.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self {
            path,
            pretty: false,
            _doc: PhantomData,
        })
    }

    /// Switches pretty-printed output on or off.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Returns a reference to the JSON file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the document, initializing the file with `T::default()` if it
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read or initialized
    /// - The content is not valid JSON, has the wrong shape, uses an
    ///   unsupported schema version or fails [`Document::validate`]
    pub fn load(&self) -> Result<T> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store file missing, initializing");
            return self.reset();
        }

        let content = std::fs::read_to_string(&self.path)?;
        let doc = decode::<T>(&content).map_err(|reason| {
            warn!(path = %self.path.display(), %reason, "store file is corrupt");
            Error::CorruptStore {
                path: self.path.clone(),
                reason,
            }
        })?;
        debug!(path = %self.path.display(), "store loaded");
        Ok(doc)
    }

    /// Replaces the file content with `doc`.
    ///
    /// Writes to a sibling temp file, syncs it and renames it over the
    /// target so readers never observe a partial document.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any file operation fails.
    pub fn save(&self, doc: &T) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        let envelope = Envelope {
            schema_version: SCHEMA_VERSION,
            data: doc,
        };
        let json = if self.pretty {
            serde_json::to_vec_pretty(&envelope)?
        } else {
            serde_json::to_vec(&envelope)?
        };

        let temp_path = self.path.with_extension("json.tmp");
        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&json)?;
            file.sync_all()?;
        }
        std::fs::rename(&temp_path, &self.path)?;

        debug!(path = %self.path.display(), bytes = json.len(), "store saved");
        Ok(())
    }

    /// Overwrites the file with `T::default()` and returns that value.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn reset(&self) -> Result<T> {
        let doc = T::default();
        self.save(&doc)?;
        Ok(doc)
    }
}

/// Parses file content, accepting both the versioned and the bare layout.
fn decode<T: Document>(content: &str) -> std::result::Result<T, String> {
    let value: Value = serde_json::from_str(content).map_err(|e| e.to_string())?;

    let data = match value {
        Value::Object(mut map) if map.contains_key(SCHEMA_KEY) => {
            let version = map
                .get(SCHEMA_KEY)
                .and_then(Value::as_u64)
                .ok_or_else(|| format!("`{SCHEMA_KEY}` must be a non-negative integer"))?;
            if version > u64::from(SCHEMA_VERSION) {
                return Err(format!(
                    "unsupported schema version {version}, newest known is {SCHEMA_VERSION}"
                ));
            }
            map.remove(DATA_KEY)
                .ok_or_else(|| format!("versioned document is missing `{DATA_KEY}`"))?
        }
        legacy => legacy,
    };

    let doc: T = serde_json::from_value(data).map_err(|e| e.to_string())?;
    doc.validate()?;
    Ok(doc)
}
