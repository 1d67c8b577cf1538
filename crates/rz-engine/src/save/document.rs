//! The persisted shape of a game.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use rz_core::{
    Difficulty, Enemy, EnemyRecord, Item, Location, LocationId, Npc, Player, World,
    initialize_world,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::progression;

/// Format version written into new saves.
pub const SAVE_VERSION: u32 = 1;

/// A complete snapshot of the player and every room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveDocument {
    /// Format version; 0 for documents that predate versioning.
    #[serde(default)]
    pub version: u32,
    /// When the snapshot was taken.
    #[serde(default)]
    pub saved_at: Option<DateTime<Utc>>,
    /// Player state.
    pub player: PlayerRecord,
    /// Mutable room state, keyed by location id.
    pub rooms: BTreeMap<String, RoomRecord>,
}

/// Saved player fields. Absent fields keep a new player's values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerRecord {
    /// Health.
    pub health: Option<u32>,
    /// Mana.
    pub mana: Option<u32>,
    /// Gold.
    pub gold: Option<u32>,
    /// Learned spells.
    pub spells: Option<Vec<String>>,
    /// Carried items.
    pub inventory: Option<Vec<Item>>,
    /// Current location id.
    pub location: Option<LocationId>,
    /// Display name of the current location, matched first on restore.
    pub current_room_name: Option<String>,
    /// Fast-travel destinations reached so far.
    pub unlocked_destinations: Option<BTreeSet<String>>,
    /// Bosses defeated, in order.
    pub defeated_bosses: Option<Vec<String>>,
    /// Active difficulty.
    pub difficulty: Option<Difficulty>,
}

/// Saved room fields. Absent fields keep the pristine world's values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomRecord {
    /// Display name, informational.
    pub name: Option<String>,
    /// Items on the floor or shelves.
    pub items: Option<Vec<Item>>,
    /// Enemies, with base and current stats.
    pub enemies: Option<Vec<EnemyRecord>>,
    /// NPCs.
    pub npcs: Option<Vec<Npc>>,
    /// Open exits.
    pub exits: Option<BTreeMap<String, LocationId>>,
    /// Locked exits.
    pub locked_exits: Option<BTreeMap<String, LocationId>>,
    /// Puzzle state, for puzzle rooms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub puzzle_solved: Option<bool>,
    /// Whether the room is a shop, informational.
    pub is_shop: Option<bool>,
}

impl SaveDocument {
    /// Snapshot the world and the player.
    pub fn capture(world: &World, player: &Player) -> Self {
        let current_room_name = world
            .get(player.location.as_str())
            .map(|l| l.name.clone());
        let player = PlayerRecord {
            health: Some(player.health),
            mana: Some(player.mana),
            gold: Some(player.gold),
            spells: Some(player.spells.clone()),
            inventory: Some(player.inventory.clone()),
            location: Some(player.location.clone()),
            current_room_name,
            unlocked_destinations: Some(player.unlocked_destinations.clone()),
            defeated_bosses: Some(player.defeated_bosses.clone()),
            difficulty: Some(player.difficulty),
        };
        let rooms = world
            .iter()
            .map(|l| (l.id.as_str().to_string(), RoomRecord::capture(l)))
            .collect();
        Self {
            version: SAVE_VERSION,
            saved_at: Some(Utc::now()),
            player,
            rooms,
        }
    }

    /// Rebuild a world and player from this snapshot.
    ///
    /// Starts from a pristine world, overlays every saved room, restores the
    /// player, then re-applies boss defeats and restocks shops from their
    /// templates. `fallback` is used when the save records no difficulty.
    pub fn restore(&self, fallback: Difficulty) -> (World, Player) {
        let (mut world, start) = initialize_world();
        let difficulty = self.player.difficulty.unwrap_or(fallback);
        world.apply_difficulty(difficulty);

        let known: BTreeSet<LocationId> = world.iter().map(|l| l.id.clone()).collect();
        for (key, room) in &self.rooms {
            match world.get_mut(key) {
                Some(location) => room.overlay(location, difficulty, &known),
                None => warn!(room = %key, "save names an unknown room; skipped"),
            }
        }

        let mut player = self.player.overlay(&world, start, difficulty);
        progression::resync(&mut world, &mut player);
        world.restock_shops();
        debug!(version = self.version, location = %player.location, "restored save");
        (world, player)
    }
}

impl PlayerRecord {
    fn overlay(&self, world: &World, start: LocationId, difficulty: Difficulty) -> Player {
        let mut player = Player::new(start, difficulty);
        if let Some(health) = self.health {
            player.health = health;
        }
        if let Some(mana) = self.mana {
            player.mana = mana;
        }
        if let Some(gold) = self.gold {
            player.gold = gold;
        }
        if let Some(spells) = &self.spells {
            player.spells = spells.clone();
        }
        if let Some(inventory) = &self.inventory {
            player.inventory = inventory.clone();
        }
        if let Some(destinations) = &self.unlocked_destinations {
            player.unlocked_destinations = destinations.clone();
        }
        if let Some(bosses) = &self.defeated_bosses {
            player.defeated_bosses = bosses.clone();
        }

        let by_name = self
            .current_room_name
            .as_deref()
            .and_then(|name| world.find_by_name(name))
            .map(|l| l.id.clone());
        let by_id = self
            .location
            .as_ref()
            .filter(|id| world.contains(id.as_str()))
            .cloned();
        match by_name.or(by_id) {
            Some(location) => player.location = location,
            None => warn!(
                name = ?self.current_room_name,
                id = ?self.location,
                "saved location not found; placing player at the start"
            ),
        }
        player
    }
}

impl RoomRecord {
    fn capture(location: &Location) -> Self {
        Self {
            name: Some(location.name.clone()),
            items: Some(location.items.clone()),
            enemies: Some(location.enemies.iter().map(Enemy::to_record).collect()),
            npcs: Some(location.npcs.clone()),
            exits: Some(location.exits().clone()),
            locked_exits: Some(location.locked_exits().clone()),
            puzzle_solved: location.puzzle_solved,
            is_shop: Some(location.is_shop()),
        }
    }

    fn overlay(
        &self,
        location: &mut Location,
        difficulty: Difficulty,
        known: &BTreeSet<LocationId>,
    ) {
        if let Some(items) = &self.items {
            location.items = items.clone();
        }
        if let Some(enemies) = &self.enemies {
            location.enemies = enemies
                .iter()
                .cloned()
                .map(|record| Enemy::rehydrate(record, difficulty))
                .collect();
        }
        if let Some(npcs) = &self.npcs {
            location.npcs = npcs.clone();
        }
        if self.exits.is_some() || self.locked_exits.is_some() {
            let keep = |map: &BTreeMap<String, LocationId>| -> BTreeMap<String, LocationId> {
                map.iter()
                    .filter(|(direction, to)| {
                        let ok = known.contains(*to);
                        if !ok {
                            warn!(
                                room = %location.id,
                                %direction,
                                to = %to,
                                "dropping exit to unknown room"
                            );
                        }
                        ok
                    })
                    .map(|(d, to)| (d.clone(), to.clone()))
                    .collect()
            };
            let exits = keep(self.exits.as_ref().unwrap_or(location.exits()));
            let locked = keep(self.locked_exits.as_ref().unwrap_or(location.locked_exits()));
            for direction in location.replace_exits(exits, locked) {
                warn!(
                    room = %location.id,
                    %direction,
                    "exit saved as both open and locked; kept open"
                );
            }
        }
        if let (Some(_), Some(solved)) = (location.puzzle_solved, self.puzzle_solved) {
            location.puzzle_solved = Some(solved);
        }
    }
}
