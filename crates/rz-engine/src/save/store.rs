//! Persistence providers.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use thiserror::Error;
use tracing::debug;

use super::document::SaveDocument;

/// Result type for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Failures reading or writing a save.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Nothing has been saved in the slot.
    #[error("no save in slot '{0}'")]
    NotFound(String),

    /// The slot holds something that is not a save document.
    #[error("save in slot '{slot}' is unreadable: {reason}")]
    Corrupt {
        /// Slot name.
        slot: String,
        /// Parser message.
        reason: String,
    },

    /// The document could not be encoded.
    #[error("could not encode save: {0}")]
    Encode(#[from] serde_json::Error),

    /// The underlying storage failed.
    #[error("{0}")]
    Io(#[from] io::Error),
}

/// Where save documents are kept.
pub trait SaveStore {
    /// Store a document under `slot`, replacing what was there.
    fn write(&mut self, slot: &str, document: &SaveDocument) -> PersistResult<()>;

    /// Fetch the document stored under `slot`.
    fn read(&self, slot: &str) -> PersistResult<SaveDocument>;
}

fn decode(slot: &str, text: &str) -> PersistResult<SaveDocument> {
    serde_json::from_str(text).map_err(|e| PersistError::Corrupt {
        slot: slot.to_string(),
        reason: e.to_string(),
    })
}

/// Saves as JSON files named `razukan_<slot>.json` in a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// A store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The file backing a slot.
    pub fn path_for(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("razukan_{slot}.json"))
    }
}

impl SaveStore for FileStore {
    fn write(&mut self, slot: &str, document: &SaveDocument) -> PersistResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(slot);
        let text = serde_json::to_string_pretty(document)?;
        fs::write(&path, text)?;
        debug!(path = %path.display(), "wrote save");
        Ok(())
    }

    fn read(&self, slot: &str) -> PersistResult<SaveDocument> {
        let path = self.path_for(slot);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(PersistError::NotFound(slot.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), "read save");
        decode(slot, &text)
    }
}

/// Keeps saves in memory as encoded text.
///
/// Clones share the same slots, so a test can keep a handle while a session
/// owns the store, and can plant raw text to simulate damaged saves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Put raw text in a slot.
    pub fn insert_raw(&self, slot: &str, text: impl Into<String>) {
        self.slots.borrow_mut().insert(slot.to_string(), text.into());
    }

    /// The raw text in a slot.
    pub fn raw(&self, slot: &str) -> Option<String> {
        self.slots.borrow().get(slot).cloned()
    }
}

impl SaveStore for MemoryStore {
    fn write(&mut self, slot: &str, document: &SaveDocument) -> PersistResult<()> {
        let text = serde_json::to_string(document)?;
        self.insert_raw(slot, text);
        Ok(())
    }

    fn read(&self, slot: &str) -> PersistResult<SaveDocument> {
        let text = self
            .raw(slot)
            .ok_or_else(|| PersistError::NotFound(slot.to_string()))?;
        decode(slot, &text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rz_core::{Difficulty, Player, initialize_world};
    use tempfile::TempDir;

    fn sample() -> SaveDocument {
        let (world, start) = initialize_world();
        let player = Player::new(start, Difficulty::Hard);
        SaveDocument::capture(&world, &player)
    }

    #[test]
    fn file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("saves"));
        let doc = sample();
        store.write("3", &doc).unwrap();
        assert!(dir.path().join("saves/razukan_3.json").exists());
        assert_eq!(store.read("3").unwrap(), doc);
    }

    #[test]
    fn file_store_missing_slot() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert!(matches!(store.read("9"), Err(PersistError::NotFound(_))));
    }

    #[test]
    fn file_store_corrupt_slot() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        fs::write(store.path_for("1"), "{ not json").unwrap();
        assert!(matches!(store.read("1"), Err(PersistError::Corrupt { .. })));
    }

    #[test]
    fn memory_store_shares_slots_between_clones() {
        let handle = MemoryStore::new();
        let mut store = handle.clone();
        store.write("a", &sample()).unwrap();
        assert!(handle.raw("a").is_some());
        handle.insert_raw("b", "[1, 2");
        assert!(matches!(store.read("b"), Err(PersistError::Corrupt { .. })));
    }
}
