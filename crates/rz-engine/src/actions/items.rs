use rz_core::content::{SCROLL_SPELL, SPELL_SCROLL, START};
use rz_core::location::Unlock;
use rz_core::{Item, Vehicle};
use tracing::debug;

use crate::error::{GameError, GameResult};
use crate::session::GameSession;

/// What using an item did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Used {
    /// The item took effect; the text describes how.
    Done(String),
    /// The item exploded for this much damage to the enemy.
    Blast(u32),
}

/// A locked exit opened by carrying and using a set of items.
struct Lock {
    parts: &'static [&'static str],
    location: &'static str,
    direction: &'static str,
    opened: &'static str,
    already_open: &'static str,
    incomplete: &'static str,
    elsewhere: Option<&'static str>,
}

const LOCKS: &[Lock] = &[
    Lock {
        parts: &["key"],
        location: START,
        direction: "north",
        opened: "You used the key to unlock the door and it vanishes.",
        already_open: "Door already unlocked.",
        incomplete: "",
        elsewhere: None,
    },
    Lock {
        parts: &["sun fragment", "moon fragment"],
        location: "forest",
        direction: "ruins",
        opened: "The fragments lock together into a disc. Roots part, and a path to the ruins opens.",
        already_open: "The path to the ruins is already open.",
        incomplete: "The fragment hums, but something is missing.",
        elsewhere: Some("Nothing here fits the fragment."),
    },
];

const BLAST_DAMAGE: u32 = 50;
const POTION_STRENGTH: u32 = 50;

impl GameSession {
    pub(crate) fn do_get(&mut self, name: &str) -> GameResult<String> {
        let location = self.world.location_mut(self.player.location.as_str())?;
        let item = location
            .find_item(name)
            .ok_or_else(|| GameError::NoSuchItem(name.to_string()))?;
        if location.is_shop() && item.is_for_sale() {
            return Ok(format!("The {} is for sale. Try 'buy {}'.", item.name, item.name));
        }
        let is_scroll = item.is_named(SPELL_SCROLL);
        if is_scroll && location.puzzle_pending() {
            return Ok(
                "You must solve the memorization puzzle first. Use 'memorize' command.".to_string(),
            );
        }
        let item = location
            .take_item(name)
            .ok_or_else(|| GameError::NoSuchItem(name.to_string()))?;
        let response = if is_scroll {
            self.player.learn_spell(SCROLL_SPELL);
            format!("You picked up {} and learned {SCROLL_SPELL} spell!", item.name)
        } else {
            format!("You picked up {}.", item.name)
        };
        self.player.inventory.push(item);
        Ok(response)
    }

    pub(crate) fn do_use(&mut self, name: &str) -> GameResult<String> {
        match self.use_item(name, false)? {
            Used::Done(response) => Ok(response),
            Used::Blast(_) => Err(GameError::CantUse(name.to_string())),
        }
    }

    /// Use a carried item. In combat potions are not used up, the bomb
    /// explodes and vehicles are unavailable.
    pub(crate) fn use_item(&mut self, name: &str, in_combat: bool) -> GameResult<Used> {
        let item = self
            .player
            .find_item(name)
            .filter(|i| i.usable)
            .ok_or_else(|| GameError::CantUse(name.to_string()))?;
        let name = item.name.to_lowercase();
        debug!(item = %name, in_combat, "use");

        if let Some(lock) = LOCKS.iter().find(|l| l.parts.contains(&name.as_str())) {
            return self.use_on_lock(lock, &name).map(Used::Done);
        }
        if let Some(vehicle) = Vehicle::from_item(&name) {
            if in_combat {
                return Err(GameError::CantUse(name));
            }
            return self.travel(vehicle).map(Used::Done);
        }

        let response = match name.as_str() {
            "health potion" => {
                self.player.heal(POTION_STRENGTH);
                self.consume(&name, in_combat);
                "Health restored.".to_string()
            }
            "mana potion" => {
                self.player.restore_mana(POTION_STRENGTH);
                self.consume(&name, in_combat);
                "Mana restored.".to_string()
            }
            "bomb" if in_combat => {
                self.player.take_item(&name);
                return Ok(Used::Blast(BLAST_DAMAGE));
            }
            "bomb" => "It would be wasteful to light that outside of a fight.".to_string(),
            "strange symbol" => "It doesn't seem to do anything.".to_string(),
            _ => format!("Used {name}."),
        };
        Ok(Used::Done(response))
    }

    fn consume(&mut self, name: &str, in_combat: bool) {
        if !in_combat {
            self.player.take_item(name);
        }
    }

    fn use_on_lock(&mut self, lock: &Lock, name: &str) -> GameResult<String> {
        if self.player.location.as_str() != lock.location {
            return lock
                .elsewhere
                .map(str::to_string)
                .ok_or_else(|| GameError::CantUse(name.to_string()));
        }
        let location = self.world.location_mut(lock.location)?;
        if location.exits().contains_key(lock.direction) {
            return Ok(lock.already_open.to_string());
        }
        if !lock.parts.iter().all(|part| self.player.has_item(part)) {
            return Ok(lock.incomplete.to_string());
        }
        match location.unlock(lock.direction) {
            Unlock::Opened => {
                for part in lock.parts {
                    self.player.take_item(part);
                }
                debug!(location = lock.location, direction = lock.direction, "unlocked");
                Ok(lock.opened.to_string())
            }
            Unlock::AlreadyOpen => Ok(lock.already_open.to_string()),
            Unlock::NoSuchExit => Err(GameError::CantUse(name.to_string())),
        }
    }

    pub(crate) fn do_buy(&mut self, name: &str) -> GameResult<String> {
        let location = self.world.location_mut(self.player.location.as_str())?;
        if !location.is_shop() {
            return Err(GameError::NoShop);
        }
        let price = location
            .items
            .iter()
            .find(|i| i.is_named(name) && i.is_for_sale())
            .map(|i| i.price)
            .ok_or_else(|| GameError::NotForSale(name.to_string()))?;
        if !self.player.spend_gold(price) {
            return Err(GameError::NotEnoughGold);
        }
        let index = location
            .items
            .iter()
            .position(|i| i.is_named(name) && i.is_for_sale())
            .ok_or_else(|| GameError::NotForSale(name.to_string()))?;
        let item: Item = location.items.remove(index);
        let response = format!("You bought {} for {} gold.", item.name, item.price);
        self.player.inventory.push(item);
        Ok(response)
    }

    pub(crate) fn do_inventory(&self) -> String {
        let items: Vec<&str> = self.player.inventory.iter().map(|i| i.name.as_str()).collect();
        format!(
            "Inventory: {}\nHealth: {}\nGold: {}\nMana: {}\nSpells: {}",
            items.join(", "),
            self.player.health,
            self.player.gold,
            self.player.mana,
            self.player.spells.join(", ")
        )
    }
}
