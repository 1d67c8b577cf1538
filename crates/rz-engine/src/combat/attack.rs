//! Enemy attacks and the quick-time dodge.

use std::time::Duration;

use rand::Rng;
use rz_core::bestiary::{self, SpecialAttack};
use rz_core::{Difficulty, Enemy};

/// The category of an enemy attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackKind {
    /// Quick and weak; dodged with `jump`.
    Light,
    /// Slow and strong; dodged with `dodge`.
    Heavy,
    /// A boss's signature attack.
    Special(SpecialAttack),
}

impl AttackKind {
    /// The categories `enemy` can use.
    pub fn available(enemy: &Enemy) -> Vec<Self> {
        let mut kinds = vec![Self::Light, Self::Heavy];
        if let Some(special) = bestiary::special_attack(&enemy.name) {
            kinds.push(Self::Special(special));
        }
        kinds
    }

    /// Word that dodges this attack.
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Light => "jump",
            Self::Heavy => "dodge",
            Self::Special(special) => special.keyword,
        }
    }

    /// Dodge window at normal difficulty.
    pub fn base_window(self) -> Duration {
        match self {
            Self::Light => Duration::from_secs(2),
            Self::Heavy => Duration::from_secs(4),
            Self::Special(_) => Duration::from_secs(3),
        }
    }

    /// Roll the damage this attack deals if not dodged.
    ///
    /// Light and heavy attacks roll within a range; specials hit for a fixed
    /// amount. All add a tenth of the enemy's damage. Harmless enemies deal 0.
    pub fn roll_damage<R: Rng + ?Sized>(self, enemy_damage: u32, rng: &mut R) -> u32 {
        if enemy_damage == 0 {
            return 0;
        }
        let bonus = enemy_damage / 10;
        let base = match self {
            Self::Light => rng.random_range(5..=15),
            Self::Heavy => rng.random_range(10..=20),
            Self::Special(special) => special.base_damage,
        };
        base + bonus
    }

    fn announcement(self) -> &'static str {
        match self {
            Self::Light => "Enemy light attack!",
            Self::Heavy => "Enemy heavy attack!",
            Self::Special(special) => special.announcement,
        }
    }
}

/// One rolled enemy attack, ready to be dodged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attack {
    /// Category.
    pub kind: AttackKind,
    /// How long the player has to type the keyword.
    pub window: Duration,
    /// Damage on a miss.
    pub damage: u32,
}

impl Attack {
    /// Pick a category for `enemy` and roll its damage.
    pub fn roll<R: Rng + ?Sized>(
        enemy: &Enemy,
        difficulty: Difficulty,
        qte_scale: f64,
        rng: &mut R,
    ) -> Self {
        let kinds = AttackKind::available(enemy);
        let kind = kinds[rng.random_range(0..kinds.len())];
        let window = kind
            .base_window()
            .mul_f64(difficulty.dodge_window_factor() * qte_scale);
        Self {
            kind,
            window,
            damage: kind.roll_damage(enemy.damage, rng),
        }
    }

    /// The line announcing the attack and the dodge to type.
    pub fn prompt(&self) -> String {
        format!(
            "{} Type '{}' within {} seconds!",
            self.kind.announcement(),
            self.kind.keyword(),
            seconds(self.window)
        )
    }

    /// Whether `answer` dodges the attack.
    pub fn is_dodged_by(&self, answer: Option<&str>) -> bool {
        answer.is_some_and(|a| a.trim().eq_ignore_ascii_case(self.kind.keyword()))
    }
}

/// Render a duration as whole or fractional seconds: `2`, `1.5`, `2.25`.
pub fn seconds(duration: Duration) -> String {
    let text = format!("{:.2}", duration.as_secs_f64());
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn goblin() -> Enemy {
        Enemy::new("Goblin", "", "", 40, 10)
    }

    #[test]
    fn ordinary_enemies_have_no_special() {
        assert_eq!(
            AttackKind::available(&goblin()),
            vec![AttackKind::Light, AttackKind::Heavy]
        );
        let dragon = Enemy::new("Dragon", "", "", 150, 50);
        assert_eq!(AttackKind::available(&dragon).len(), 3);
    }

    #[test]
    fn damage_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let light = AttackKind::Light.roll_damage(50, &mut rng);
            assert!((10..=20).contains(&light));
            let heavy = AttackKind::Heavy.roll_damage(50, &mut rng);
            assert!((15..=25).contains(&heavy));
        }
        let breath = AttackKind::available(&Enemy::new("Dragon", "", "", 150, 50))[2];
        assert_eq!(breath.roll_damage(50, &mut rng), 35);
    }

    #[test]
    fn harmless_enemies_deal_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        let knight = Enemy::new("Fallen Knight", "", "", 1, 0);
        for _ in 0..50 {
            assert_eq!(Attack::roll(&knight, Difficulty::Expert, 1.0, &mut rng).damage, 0);
        }
    }

    #[test]
    fn windows_shrink_with_difficulty() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            let easy = Attack::roll(&goblin(), Difficulty::Easy, 1.0, &mut rng);
            let base = easy.kind.base_window();
            assert_eq!(easy.window, base.mul_f64(1.5));
        }
        let attack = Attack {
            kind: AttackKind::Heavy,
            window: AttackKind::Heavy.base_window().mul_f64(0.5),
            damage: 12,
        };
        assert_eq!(
            attack.prompt(),
            "Enemy heavy attack! Type 'dodge' within 2 seconds!"
        );
    }

    #[test]
    fn seconds_are_trimmed() {
        assert_eq!(seconds(Duration::from_secs(2)), "2");
        assert_eq!(seconds(Duration::from_millis(1500)), "1.5");
        assert_eq!(seconds(Duration::from_millis(2250)), "2.25");
    }

    #[test]
    fn dodge_needs_the_keyword() {
        let attack = Attack {
            kind: AttackKind::Light,
            window: Duration::from_secs(2),
            damage: 9,
        };
        assert!(attack.is_dodged_by(Some(" JUMP ")));
        assert!(!attack.is_dodged_by(Some("dodge")));
        assert!(!attack.is_dodged_by(None));
    }
}
