//! Player actions during combat.

use rz_core::Player;

/// Mana cost of every spell.
pub const SPELL_COST: u32 = 20;

/// A player's move on their turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatAction {
    /// Strike with the best weapon carried.
    Attack,
    /// Cast a known spell.
    Cast(String),
    /// Use an item.
    Use(String),
    /// Leave the fight.
    Flee,
}

impl CombatAction {
    /// Parse a combat input line. `None` for anything unrecognised.
    pub fn parse(input: &str) -> Option<Self> {
        let words: Vec<String> = input.split_whitespace().map(str::to_lowercase).collect();
        let (verb, rest) = words.split_first()?;
        let target = rest.join(" ");
        match (verb.as_str(), target.is_empty()) {
            ("attack", _) => Some(Self::Attack),
            ("flee", _) => Some(Self::Flee),
            ("cast", false) => Some(Self::Cast(target)),
            ("use", false) => Some(Self::Use(target)),
            _ => None,
        }
    }
}

/// A combat spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spell {
    /// 25 damage.
    Firebolt,
    /// 20 damage and the enemy loses its next turn.
    Icebolt,
    /// Restores 30 health.
    Heal,
}

impl Spell {
    /// Spells sold by wandering townsfolk.
    pub const ALL: [Spell; 3] = [Self::Firebolt, Self::Icebolt, Self::Heal];

    /// Look up a spell by name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "firebolt" => Some(Self::Firebolt),
            "icebolt" => Some(Self::Icebolt),
            "heal" => Some(Self::Heal),
            _ => None,
        }
    }

    /// Spell name as learned and typed.
    pub fn name(self) -> &'static str {
        match self {
            Self::Firebolt => "firebolt",
            Self::Icebolt => "icebolt",
            Self::Heal => "heal",
        }
    }

    /// Damage dealt to the enemy.
    pub fn damage(self) -> u32 {
        match self {
            Self::Firebolt => 25,
            Self::Icebolt => 20,
            Self::Heal => 0,
        }
    }

    /// Health restored to the caster.
    pub fn healing(self) -> u32 {
        match self {
            Self::Heal => 30,
            _ => 0,
        }
    }

    /// Whether the spell freezes the enemy for a turn.
    pub fn freezes(self) -> bool {
        self == Self::Icebolt
    }
}

/// Damage of a plain attack, by the best weapon carried.
pub fn weapon_damage(player: &Player) -> u32 {
    if player.has_item("better sword") {
        40
    } else if player.has_item("sword") {
        30
    } else {
        20
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rz_core::{Difficulty, Item, LocationId};

    #[test]
    fn parse_actions() {
        assert_eq!(CombatAction::parse("ATTACK"), Some(CombatAction::Attack));
        assert_eq!(CombatAction::parse(" flee "), Some(CombatAction::Flee));
        assert_eq!(
            CombatAction::parse("use  Health Potion"),
            Some(CombatAction::Use("health potion".into()))
        );
        assert_eq!(
            CombatAction::parse("cast icebolt"),
            Some(CombatAction::Cast("icebolt".into()))
        );
    }

    #[test]
    fn incomplete_actions_are_invalid() {
        assert_eq!(CombatAction::parse("cast"), None);
        assert_eq!(CombatAction::parse("use"), None);
        assert_eq!(CombatAction::parse(""), None);
        assert_eq!(CombatAction::parse("dance"), None);
    }

    #[test]
    fn best_weapon_wins() {
        let mut player = Player::new(LocationId::new("x"), Difficulty::Normal);
        assert_eq!(weapon_damage(&player), 20);
        player.inventory.push(Item::new("sword", ""));
        assert_eq!(weapon_damage(&player), 30);
        player.inventory.push(Item::new("better sword", ""));
        assert_eq!(weapon_damage(&player), 40);
    }

    #[test]
    fn spells_by_name() {
        assert_eq!(Spell::from_name("IceBolt"), Some(Spell::Icebolt));
        assert!(Spell::Icebolt.freezes());
        assert_eq!(Spell::Heal.healing(), 30);
        assert_eq!(Spell::from_name("meteor"), None);
    }
}
