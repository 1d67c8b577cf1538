//! Locations and their exits.

use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::enemy::Enemy;
use crate::item::Item;
use crate::npc::Npc;

/// Stable key of a location, e.g. `castle_start`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(String);

impl LocationId {
    /// Wrap a key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LocationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocationId {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for LocationId {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// What happened when asking a location to open an exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unlock {
    /// The exit moved from locked to open.
    Opened,
    /// The exit was already open.
    AlreadyOpen,
    /// No exit in that direction at all.
    NoSuchExit,
}

/// One explorable place.
///
/// A direction is either open or locked, never both: the exit maps are
/// private and every mutator keeps them disjoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Stable key.
    pub id: LocationId,
    /// Display name.
    pub name: String,
    /// Description printed on arrival.
    pub description: String,
    /// Items lying here (including shop stock on display).
    pub items: Vec<Item>,
    /// Enemies present.
    pub enemies: Vec<Enemy>,
    /// NPCs present.
    pub npcs: Vec<Npc>,
    /// `Some(solved)` for puzzle-gated locations, `None` elsewhere.
    pub puzzle_solved: Option<bool>,
    exits: BTreeMap<String, LocationId>,
    locked_exits: BTreeMap<String, LocationId>,
    shop_stock: Option<Vec<Item>>,
}

impl Location {
    /// Create an empty location.
    pub fn new(
        id: impl Into<LocationId>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            items: Vec::new(),
            enemies: Vec::new(),
            npcs: Vec::new(),
            puzzle_solved: None,
            exits: BTreeMap::new(),
            locked_exits: BTreeMap::new(),
            shop_stock: None,
        }
    }

    /// Add an open exit.
    pub fn with_exit(mut self, direction: &str, to: &str) -> Self {
        self.open_exit(direction, LocationId::new(to));
        self
    }

    /// Add a locked exit.
    pub fn with_locked_exit(mut self, direction: &str, to: &str) -> Self {
        self.lock_exit(direction, LocationId::new(to));
        self
    }

    /// Place an item.
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Place an enemy.
    pub fn with_enemy(mut self, enemy: Enemy) -> Self {
        self.enemies.push(enemy);
        self
    }

    /// Place an NPC.
    pub fn with_npc(mut self, npc: Npc) -> Self {
        self.npcs.push(npc);
        self
    }

    /// Gate this location behind an unsolved puzzle.
    pub fn with_puzzle(mut self) -> Self {
        self.puzzle_solved = Some(false);
        self
    }

    /// Turn this location into a shop selling `stock`.
    ///
    /// The stock is displayed as items and also kept as an immutable template.
    pub fn with_shop(mut self, stock: Vec<Item>) -> Self {
        self.items.extend(stock.iter().cloned());
        self.shop_stock = Some(stock);
        self
    }

    /// Open exits, direction to destination.
    pub fn exits(&self) -> &BTreeMap<String, LocationId> {
        &self.exits
    }

    /// Locked exits, direction to destination.
    pub fn locked_exits(&self) -> &BTreeMap<String, LocationId> {
        &self.locked_exits
    }

    /// Insert an open exit, replacing any locked exit in that direction.
    pub fn open_exit(&mut self, direction: &str, to: LocationId) {
        let direction = direction.to_lowercase();
        self.locked_exits.remove(&direction);
        self.exits.insert(direction, to);
    }

    /// Insert a locked exit, replacing any open exit in that direction.
    pub fn lock_exit(&mut self, direction: &str, to: LocationId) {
        let direction = direction.to_lowercase();
        self.exits.remove(&direction);
        self.locked_exits.insert(direction, to);
    }

    /// Move a locked exit to the open set.
    pub fn unlock(&mut self, direction: &str) -> Unlock {
        let direction = direction.to_lowercase();
        match self.locked_exits.remove(&direction) {
            Some(to) => {
                self.exits.insert(direction, to);
                Unlock::Opened
            }
            None if self.exits.contains_key(&direction) => Unlock::AlreadyOpen,
            None => Unlock::NoSuchExit,
        }
    }

    /// Replace both exit maps, as when overlaying saved state.
    ///
    /// Directions present in both maps stay open. Returns the directions that
    /// had to be dropped from the locked map.
    pub fn replace_exits(
        &mut self,
        exits: BTreeMap<String, LocationId>,
        locked_exits: BTreeMap<String, LocationId>,
    ) -> Vec<String> {
        self.exits.clear();
        self.locked_exits.clear();
        for (direction, to) in locked_exits {
            self.lock_exit(&direction, to);
        }
        let mut conflicts = Vec::new();
        for (direction, to) in exits {
            if self.locked_exits.contains_key(&direction.to_lowercase()) {
                conflicts.push(direction.clone());
            }
            self.open_exit(&direction, to);
        }
        conflicts
    }

    /// Whether this location is a shop.
    pub fn is_shop(&self) -> bool {
        self.shop_stock.is_some()
    }

    /// The immutable for-sale template, for shops.
    pub fn shop_stock(&self) -> Option<&[Item]> {
        self.shop_stock.as_deref()
    }

    /// Put the shop's shelves back to the template. No-op elsewhere.
    pub fn restock(&mut self) {
        if let Some(stock) = &self.shop_stock {
            self.items = stock.clone();
        }
    }

    /// Whether this location has an unsolved puzzle.
    pub fn puzzle_pending(&self) -> bool {
        self.puzzle_solved == Some(false)
    }

    /// Find an item by name.
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.is_named(name))
    }

    /// Remove and return the first item with this name.
    pub fn take_item(&mut self, name: &str) -> Option<Item> {
        let pos = self.items.iter().position(|i| i.is_named(name))?;
        Some(self.items.remove(pos))
    }

    /// Index of the first enemy with this name.
    pub fn enemy_index(&self, name: &str) -> Option<usize> {
        self.enemies.iter().position(|e| e.is_named(name))
    }

    /// Remove and return the first enemy with this name.
    pub fn remove_enemy(&mut self, name: &str) -> Option<Enemy> {
        let pos = self.enemy_index(name)?;
        Some(self.enemies.remove(pos))
    }

    /// Index of the first NPC with this name.
    pub fn npc_index(&self, name: &str) -> Option<usize> {
        self.npcs.iter().position(|n| n.is_named(name))
    }

    /// Render the text block shown on arrival and on `look`.
    ///
    /// Description first, then items, enemies, NPCs, open exits and locked
    /// exits, each line only when the list is non-empty.
    pub fn describe(&self) -> String {
        let mut out = format!("{}\n", self.description);
        let mut line = |label: &str, names: Vec<&str>| {
            if !names.is_empty() {
                out.push_str(&format!("{label}: {}\n", names.join(", ")));
            }
        };
        line("Items here", self.items.iter().map(|i| i.name.as_str()).collect());
        line("Enemies here", self.enemies.iter().map(|e| e.name.as_str()).collect());
        line("NPCs here", self.npcs.iter().map(|n| n.name.as_str()).collect());
        line("Available directions", self.exits.keys().map(String::as_str).collect());
        line("Locked directions", self.locked_exits.keys().map(String::as_str).collect());
        out
    }
}
