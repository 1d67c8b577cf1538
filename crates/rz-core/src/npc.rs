//! Non-player characters.

use serde::{Deserialize, Serialize};

/// A townsperson the player can talk to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Npc {
    /// Display name.
    pub name: String,
    /// The line spoken on an uneventful conversation.
    #[serde(default)]
    pub dialogue: String,
}

impl Npc {
    /// Create an NPC.
    pub fn new(name: impl Into<String>, dialogue: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dialogue: dialogue.into(),
        }
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}
