//! Items.

use serde::{Deserialize, Serialize};

/// A portable object.
///
/// Items are value objects: two health potions are two separate `Item`s with
/// the same name. An item lives in exactly one container at a time, either a
/// location's item list or the player's inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Display name, also the key the player types.
    pub name: String,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
    /// Whether `use <item>` does anything.
    #[serde(default)]
    pub usable: bool,
    /// Purchase price in gold; 0 when not for sale.
    #[serde(default)]
    pub price: u32,
}

impl Item {
    /// Create an unusable, unpriced item.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            usable: false,
            price: 0,
        }
    }

    /// Mark the item as usable.
    pub fn usable(mut self) -> Self {
        self.usable = true;
        self
    }

    /// Put a price on the item.
    pub fn priced(mut self, price: u32) -> Self {
        self.price = price;
        self
    }

    /// Whether the item must be bought rather than taken.
    pub fn is_for_sale(&self) -> bool {
        self.price > 0
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}
