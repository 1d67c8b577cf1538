//! Save documents and persistence providers.
//!
//! A [`SaveDocument`] is a plain serde tree with a `player` object and a
//! `rooms` object keyed by location id. Every field is optional on the way in,
//! so documents written by older builds still load. Where the bytes live is up
//! to a [`SaveStore`].

pub mod document;
pub mod store;

pub use document::{PlayerRecord, RoomRecord, SAVE_VERSION, SaveDocument};
pub use store::{FileStore, MemoryStore, PersistError, PersistResult, SaveStore};

use crate::error::{GameError, GameResult};

/// Slot used when `save` or `load` is given no name.
pub const DEFAULT_SLOT: &str = "1";

/// Resolve an optional slot argument to a usable slot name.
pub fn slot_name(slot: Option<&str>) -> GameResult<String> {
    let slot = slot.map(str::trim).unwrap_or(DEFAULT_SLOT);
    let valid = !slot.is_empty()
        && slot
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(slot.to_string())
    } else {
        Err(GameError::InvalidSlot(slot.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_defaults_to_one() {
        assert_eq!(slot_name(None).unwrap(), "1");
        assert_eq!(slot_name(Some("quest_2")).unwrap(), "quest_2");
    }

    #[test]
    fn slot_rejects_path_characters() {
        assert!(matches!(
            slot_name(Some("../etc")),
            Err(GameError::InvalidSlot(_))
        ));
        assert!(slot_name(Some("a b")).is_err());
    }
}
