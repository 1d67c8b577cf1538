//! Enemies and their difficulty-derived stats.
//!
//! An enemy keeps its base health and damage next to the current values. The
//! current values are always `round(base * multiplier)` for the difficulty the
//! enemy was last scaled to, so changing difficulty can be applied
//! retroactively to every enemy that is not mid-fight.

use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;

/// Gold dropped by an enemy unless overridden.
pub const DEFAULT_GOLD_DROP: u32 = 10;

/// A hostile creature placed in a location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    /// Short name the player types to attack.
    pub name: String,
    /// Epithet shown when combat starts.
    pub title: String,
    /// Flavor text shown when combat starts.
    pub description: String,
    /// Current health.
    pub health: u32,
    /// Current damage rating.
    pub damage: u32,
    /// Lore revealed once on defeat.
    pub info: Option<String>,
    /// Gold awarded on defeat.
    pub gold_drop: u32,
    /// Health before the difficulty multiplier.
    pub base_health: u32,
    /// Damage before the difficulty multiplier.
    pub base_damage: u32,
}

impl Enemy {
    /// Create an enemy at normal difficulty from its base stats.
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        base_health: u32,
        base_damage: u32,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            description: description.into(),
            health: base_health,
            damage: base_damage,
            info: None,
            gold_drop: DEFAULT_GOLD_DROP,
            base_health,
            base_damage,
        }
    }

    /// Attach the lore line revealed on defeat.
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    /// Override the gold reward.
    pub fn with_gold(mut self, gold: u32) -> Self {
        self.gold_drop = gold;
        self
    }

    /// Scale to a difficulty, consuming and returning the enemy.
    pub fn at_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.apply_difficulty(difficulty);
        self
    }

    /// Recompute current health and damage from the base stats.
    pub fn apply_difficulty(&mut self, difficulty: Difficulty) {
        self.health = difficulty.scale(self.base_health);
        self.damage = difficulty.scale(self.base_damage);
    }

    /// Rebuild an enemy from a saved record.
    ///
    /// Base stats win when present. Records written before base stats were
    /// persisted only carry the scaled values; the base is recovered by
    /// dividing out the multiplier.
    pub fn rehydrate(record: EnemyRecord, difficulty: Difficulty) -> Self {
        let unscale = |value: u32| (f64::from(value) / difficulty.multiplier()).round() as u32;
        let base_health = record
            .base_health
            .unwrap_or_else(|| unscale(record.health));
        let base_damage = record
            .base_damage
            .unwrap_or_else(|| unscale(record.damage));
        Self {
            name: record.name,
            title: record.title,
            description: record.description,
            health: 0,
            damage: 0,
            info: record.info,
            gold_drop: record.gold_drop.unwrap_or(DEFAULT_GOLD_DROP),
            base_health,
            base_damage,
        }
        .at_difficulty(difficulty)
    }

    /// Snapshot for persistence.
    pub fn to_record(&self) -> EnemyRecord {
        EnemyRecord {
            name: self.name.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            health: self.health,
            damage: self.damage,
            info: self.info.clone(),
            gold_drop: Some(self.gold_drop),
            base_health: Some(self.base_health),
            base_damage: Some(self.base_damage),
        }
    }

    /// Reduce health, stopping at zero. Returns the health left.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    /// Whether the enemy can still fight.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Case-insensitive name comparison.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name.trim())
    }
}

/// The persisted shape of an enemy.
///
/// Everything past the name is optional so saves from older revisions load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyRecord {
    /// Short name.
    pub name: String,
    /// Epithet.
    #[serde(default)]
    pub title: String,
    /// Flavor text.
    #[serde(default)]
    pub description: String,
    /// Scaled health at save time.
    #[serde(default)]
    pub health: u32,
    /// Scaled damage at save time.
    #[serde(default)]
    pub damage: u32,
    /// Lore revealed on defeat.
    #[serde(default)]
    pub info: Option<String>,
    /// Gold reward.
    #[serde(default)]
    pub gold_drop: Option<u32>,
    /// Unscaled health.
    #[serde(default)]
    pub base_health: Option<u32>,
    /// Unscaled damage.
    #[serde(default)]
    pub base_damage: Option<u32>,
}
