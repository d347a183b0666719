//! Persistence: key-value capability seam and the board save/load layer.
//!
//! DESIGN
//! ======
//! The board persists as one JSON array of descriptors under a fixed key.
//! Save and load return explicit results rather than swallowing failures;
//! the interactive call sites in [`crate::engine`] log and carry on, so a
//! broken store never takes down the session. A missing key is an empty
//! board, and a corrupt payload reads as "no saved state" at the engine
//! boundary.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use crate::codec::Descriptor;
use crate::consts::STORAGE_KEY;

/// Error from the persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing store failed to read or write.
    #[error("state backend error: {0}")]
    Backend(#[from] io::Error),
    /// The live board state could not be serialized.
    #[error("failed to serialize board state: {0}")]
    Serialize(serde_json::Error),
    /// The persisted payload is not a valid descriptor list.
    #[error("persisted board state is corrupt: {0}")]
    Corrupt(serde_json::Error),
}

/// Durable key-value storage provided by the host.
pub trait StateStore {
    /// Value stored under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Delete `key`. Deleting an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Volatile in-memory store for tests and hosts without durable storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// File-backed store: each key is one JSON file inside a root directory.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`. The directory is created on first
    /// write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StateStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Backend(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Backend(e)),
        }
    }
}

/// Serialize `descriptors` and store them under [`STORAGE_KEY`].
///
/// # Errors
///
/// Returns an error if serialization or the backing store fails.
pub fn save_board(store: &mut dyn StateStore, descriptors: &[Descriptor]) -> Result<(), StoreError> {
    let raw = serde_json::to_string(descriptors).map_err(StoreError::Serialize)?;
    store.set(STORAGE_KEY, &raw)
}

/// Load the descriptor list stored under [`STORAGE_KEY`]. A missing key is
/// an empty board, not an error.
///
/// # Errors
///
/// Returns `Corrupt` if the stored payload does not parse as a descriptor
/// list, or a backend error if the store cannot be read.
pub fn load_board(store: &dyn StateStore) -> Result<Vec<Descriptor>, StoreError> {
    match store.get(STORAGE_KEY)? {
        None => Ok(Vec::new()),
        Some(raw) => serde_json::from_str(&raw).map_err(StoreError::Corrupt),
    }
}

/// Delete the persisted board state entirely.
///
/// # Errors
///
/// Returns an error if the backing store cannot be written.
pub fn delete_board(store: &mut dyn StateStore) -> Result<(), StoreError> {
    store.remove(STORAGE_KEY)
}
