//! Player state.

use std::collections::BTreeSet;

use crate::difficulty::Difficulty;
use crate::item::Item;
use crate::location::LocationId;

/// Health at the start of a game.
pub const STARTING_HEALTH: u32 = 100;
/// Mana at the start of a game and the ceiling restored after a victory.
pub const MAX_MANA: u32 = 100;
/// Gold at the start of a game.
pub const STARTING_GOLD: u32 = 100;

/// The single player of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Current health; never negative.
    pub health: u32,
    /// Current mana; never negative.
    pub mana: u32,
    /// Gold carried.
    pub gold: u32,
    /// Learned spell names.
    pub spells: Vec<String>,
    /// Carried items.
    pub inventory: Vec<Item>,
    /// Key of the location the player stands in.
    pub location: LocationId,
    /// Fast-travel destinations the player may pick.
    pub unlocked_destinations: BTreeSet<String>,
    /// Names of bosses already defeated, in order.
    pub defeated_bosses: Vec<String>,
    /// Active difficulty.
    pub difficulty: Difficulty,
}

impl Player {
    /// A fresh player at `location`, with the starting kit.
    pub fn new(location: LocationId, difficulty: Difficulty) -> Self {
        Self {
            health: STARTING_HEALTH,
            mana: MAX_MANA,
            gold: STARTING_GOLD,
            spells: Vec::new(),
            inventory: starting_inventory(),
            location,
            unlocked_destinations: ["dock", "lokendar_se"]
                .into_iter()
                .map(String::from)
                .collect(),
            defeated_bosses: Vec::new(),
            difficulty,
        }
    }

    /// Whether the player is still standing.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Reduce health, stopping at zero. Returns the health left.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    /// Add health.
    pub fn heal(&mut self, amount: u32) {
        self.health = self.health.saturating_add(amount);
    }

    /// Add mana.
    pub fn restore_mana(&mut self, amount: u32) {
        self.mana = self.mana.saturating_add(amount);
    }

    /// Spend mana if enough is available.
    pub fn spend_mana(&mut self, amount: u32) -> bool {
        if self.mana >= amount {
            self.mana -= amount;
            true
        } else {
            false
        }
    }

    /// Spend gold if enough is available.
    pub fn spend_gold(&mut self, amount: u32) -> bool {
        if self.gold >= amount {
            self.gold -= amount;
            true
        } else {
            false
        }
    }

    /// Whether an item with this name is carried.
    pub fn has_item(&self, name: &str) -> bool {
        self.inventory.iter().any(|i| i.is_named(name))
    }

    /// Find a carried item by name.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.inventory.iter().find(|i| i.is_named(name))
    }

    /// Remove and return the first carried item with this name.
    pub fn take_item(&mut self, name: &str) -> Option<Item> {
        let pos = self.inventory.iter().position(|i| i.is_named(name))?;
        Some(self.inventory.remove(pos))
    }

    /// Learn a spell. Returns false when it was already known.
    pub fn learn_spell(&mut self, spell: &str) -> bool {
        if self.knows_spell(spell) {
            return false;
        }
        self.spells.push(spell.to_lowercase());
        true
    }

    /// Whether a spell is known.
    pub fn knows_spell(&self, spell: &str) -> bool {
        self.spells.iter().any(|s| s.eq_ignore_ascii_case(spell.trim()))
    }

    /// Whether a boss is on the defeated list.
    pub fn has_defeated(&self, boss: &str) -> bool {
        self.defeated_bosses.iter().any(|b| b == boss)
    }

    /// Whether a fast-travel destination is available.
    pub fn can_travel_to(&self, destination: &str) -> bool {
        self.unlocked_destinations.contains(destination)
    }
}

/// The clothes the hero wakes up in.
pub fn starting_inventory() -> Vec<Item> {
    vec![
        Item::new("leather tunic", "Basic leather tunic for protection."),
        Item::new("old torn leather boots", "Worn boots for walking."),
        Item::new("leather helmet", "A simple helmet."),
        Item::new(
            "strange symbol",
            "A circle inside another circle. It doesn't seem to do anything.",
        )
        .usable(),
    ]
}
