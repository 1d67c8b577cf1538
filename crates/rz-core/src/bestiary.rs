//! The boss roster.
//!
//! Bosses differ from ordinary enemies in three ways: they may strike several
//! times per round, most have a special attack with its own dodge keyword, and
//! defeating one changes the world.

/// A boss-only attack category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialAttack {
    /// Line printed when the attack starts.
    pub announcement: &'static str,
    /// The word the player must type in time.
    pub keyword: &'static str,
    /// Fixed damage before the enemy's damage bonus.
    pub base_damage: u32,
}

/// A world change triggered by a boss falling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefeatEffect {
    /// Hand the player an item.
    GrantItem {
        /// Item name.
        name: &'static str,
        /// Item description.
        description: &'static str,
    },
    /// Open a locked exit somewhere in the world.
    UnlockExit {
        /// Location holding the exit.
        location: &'static str,
        /// Direction of the exit.
        direction: &'static str,
    },
    /// Make a fast-travel destination available.
    UnlockDestination(&'static str),
    /// Move the player into a new chapter's location.
    ChapterTransition {
        /// Destination location key.
        to: &'static str,
    },
    /// The story is over.
    CompleteGame,
}

/// Static data for one boss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BossProfile {
    /// Enemy name as placed in the world.
    pub name: &'static str,
    /// Location the boss is seeded in.
    pub home: &'static str,
    /// Attack exchanges per enemy turn.
    pub attacks_per_round: u32,
    /// Boss-only attack category.
    pub special: Option<SpecialAttack>,
    /// What defeating the boss does to the world.
    pub on_defeat: &'static [DefeatEffect],
}

/// Every boss in the game.
pub const BOSSES: &[BossProfile] = &[
    BossProfile {
        name: "Dragon",
        home: "dragon_chamber",
        attacks_per_round: 2,
        special: Some(SpecialAttack {
            announcement: "Dragon breathes fire!",
            keyword: "roll",
            base_damage: 30,
        }),
        on_defeat: &[DefeatEffect::UnlockExit {
            location: "dragon_chamber",
            direction: "out",
        }],
    },
    BossProfile {
        name: "Hydra",
        home: "hydra_lair",
        attacks_per_round: 3,
        special: Some(SpecialAttack {
            announcement: "Hydra spits poison!",
            keyword: "block",
            base_damage: 25,
        }),
        on_defeat: &[DefeatEffect::GrantItem {
            name: "boat",
            description: "A boat to reach Lokendar.",
        }],
    },
    BossProfile {
        name: "Stone Golem",
        home: "ancient_ruins",
        attacks_per_round: 2,
        special: Some(SpecialAttack {
            announcement: "Stone Golem hurls a boulder!",
            keyword: "duck",
            base_damage: 25,
        }),
        on_defeat: &[DefeatEffect::UnlockDestination("spring_of_courage")],
    },
    BossProfile {
        name: "Corruption Monster",
        home: "central_chamber",
        attacks_per_round: 2,
        special: Some(SpecialAttack {
            announcement: "Corruption Monster fires a corrupt beam!",
            keyword: "reflect",
            base_damage: 35,
        }),
        on_defeat: &[DefeatEffect::UnlockDestination("whirlpool")],
    },
    BossProfile {
        name: "Leviathan",
        home: "whirlpool",
        attacks_per_round: 4,
        special: Some(SpecialAttack {
            announcement: "Leviathan summons a tidal wave!",
            keyword: "swim",
            base_damage: 35,
        }),
        on_defeat: &[
            DefeatEffect::GrantItem {
                name: "airship",
                description: "A small airship that can fly over sea and mountain.",
            },
            DefeatEffect::UnlockDestination("town_square"),
            DefeatEffect::UnlockDestination("lokendar_nw"),
        ],
    },
    BossProfile {
        name: "Fallen Knight",
        home: "spring_of_courage",
        attacks_per_round: 1,
        special: None,
        on_defeat: &[DefeatEffect::UnlockDestination("thanatos_spire")],
    },
    BossProfile {
        name: "Thanatos",
        home: "thanatos_spire",
        attacks_per_round: 5,
        special: Some(SpecialAttack {
            announcement: "Thanatos drains your soul!",
            keyword: "pray",
            base_damage: 40,
        }),
        on_defeat: &[DefeatEffect::ChapterTransition {
            to: "razukan_sanctum",
        }],
    },
    BossProfile {
        name: "Razukan",
        home: "razukan_sanctum",
        attacks_per_round: 6,
        special: Some(SpecialAttack {
            announcement: "Razukan casts a death curse!",
            keyword: "counter",
            base_damage: 45,
        }),
        on_defeat: &[DefeatEffect::CompleteGame],
    },
];

/// Look up a boss by enemy name.
pub fn boss(name: &str) -> Option<&'static BossProfile> {
    BOSSES.iter().find(|b| b.name.eq_ignore_ascii_case(name))
}

/// Attack exchanges per enemy turn; 1 for ordinary enemies.
pub fn attacks_per_round(name: &str) -> u32 {
    boss(name).map_or(1, |b| b.attacks_per_round)
}

/// The special attack available to an enemy, if any.
pub fn special_attack(name: &str) -> Option<SpecialAttack> {
    boss(name).and_then(|b| b.special)
}
