//! The durable slot that persists the expense collection between sessions.
//!
//! The whole collection is written as one JSON document. There is no
//! incremental update: every save replaces the slot with the current
//! in-memory state.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{Error, expense::Expense};

/// The file name of the durable slot within the data directory.
pub const EXPENSES_SLOT: &str = "expenses.json";

/// Reads and writes the full expense collection as a single JSON file.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    slot_path: PathBuf,
}

impl ExpenseStore {
    /// Create a store whose durable slot lives inside `data_dir`,
    /// creating the directory if it does not exist yet.
    ///
    /// # Errors
    /// Returns [Error::StoreIo] if the data directory cannot be created.
    pub fn open(data_dir: impl AsRef<Path>) -> Result<Self, Error> {
        let data_dir = data_dir.as_ref();
        fs::create_dir_all(data_dir).map_err(|error| Error::StoreIo(error.to_string()))?;

        Ok(Self {
            slot_path: data_dir.join(EXPENSES_SLOT),
        })
    }

    /// Read the expense collection from the durable slot, preserving the
    /// stored order.
    ///
    /// An absent or empty slot is a first run and yields an empty
    /// collection.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::MalformedStoredData] if the slot content cannot be parsed,
    /// - or [Error::StoreIo] if the slot exists but cannot be read.
    pub fn load(&self) -> Result<Vec<Expense>, Error> {
        let text = match fs::read_to_string(&self.slot_path) {
            Ok(text) => text,
            Err(error) if error.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(error) => return Err(Error::StoreIo(error.to_string())),
        };

        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&text).map_err(|error| Error::MalformedStoredData(error.to_string()))
    }

    /// Overwrite the durable slot with the full collection.
    ///
    /// The new content is written to a temporary file and renamed over the
    /// slot, so a crashed save leaves the previous content readable rather
    /// than a partial write.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::JSONSerializationError] if the collection cannot be serialized,
    /// - or [Error::StoreIo] if the slot cannot be written.
    pub fn save(&self, expenses: &[Expense]) -> Result<(), Error> {
        let text = serde_json::to_string_pretty(expenses)
            .map_err(|error| Error::JSONSerializationError(error.to_string()))?;

        let temp_path = self.slot_path.with_extension("json.tmp");
        fs::write(&temp_path, text).map_err(|error| Error::StoreIo(error.to_string()))?;
        fs::rename(&temp_path, &self.slot_path).map_err(|error| Error::StoreIo(error.to_string()))
    }
}
