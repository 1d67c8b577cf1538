use std::collections::BTreeMap;

use crate::difficulty::Difficulty;
use crate::error::{CoreError, CoreResult};
use crate::location::{Location, LocationId};

/// Every location of the game, keyed by stable identifier.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct World {
    locations: BTreeMap<LocationId, Location>,
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location, replacing one with the same key.
    pub fn insert(&mut self, location: Location) {
        self.locations.insert(location.id.clone(), location);
    }

    /// Look up a location by key.
    pub fn get(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Look up a location by key for mutation.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Location> {
        self.locations.get_mut(id)
    }

    /// Look up a location by key or fail.
    pub fn location(&self, id: &str) -> CoreResult<&Location> {
        self.get(id)
            .ok_or_else(|| CoreError::UnknownLocation(id.to_string()))
    }

    /// Look up a location by key for mutation or fail.
    pub fn location_mut(&mut self, id: &str) -> CoreResult<&mut Location> {
        self.get_mut(id)
            .ok_or_else(|| CoreError::UnknownLocation(id.to_string()))
    }

    /// Whether a key is part of the world.
    pub fn contains(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    /// Find a location by its display name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Location> {
        self.locations
            .values()
            .find(|l| l.name.eq_ignore_ascii_case(name))
    }

    /// Iterate over all locations in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Iterate mutably over all locations in key order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Location> {
        self.locations.values_mut()
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the world has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Rescale every enemy in the world from its base stats.
    pub fn apply_difficulty(&mut self, difficulty: Difficulty) {
        for enemy in self.iter_mut().flat_map(|l| l.enemies.iter_mut()) {
            enemy.apply_difficulty(difficulty);
        }
    }

    /// Put every shop's shelves back to its template.
    pub fn restock_shops(&mut self) {
        for location in self.iter_mut() {
            location.restock();
        }
    }
}
