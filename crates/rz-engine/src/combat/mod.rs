//! Turn-based combat with quick-time dodges.
//!
//! An [`Encounter`] is a small state machine:
//!
//! ```text
//! Intro -> PlayerTurn -> EnemyTurn { n } -> ... -> EnemyTurn { 1 } -> PlayerTurn
//!              |   \-> EnemyFrozen -> PlayerTurn
//!              |-> Victory | Fled
//! EnemyTurn -> Defeat
//! ```
//!
//! Transitions are pure functions of the encounter and the player. The session
//! drives them, doing the I/O for each state. The enemy fought is a copy of the
//! one in the world, so fleeing leaves the world untouched.

pub mod action;
pub mod attack;

pub use action::{CombatAction, SPELL_COST, Spell, weapon_damage};
pub use attack::{Attack, AttackKind};

use rz_core::{Enemy, Player, bestiary};
use tracing::debug;

use crate::actions::Used;
use crate::session::GameSession;

/// Where an encounter stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatState {
    /// Before the first turn.
    Intro,
    /// Waiting for the player's action.
    PlayerTurn,
    /// The enemy loses this turn to a freeze.
    EnemyFrozen,
    /// The enemy is attacking.
    EnemyTurn {
        /// Exchanges still to come this turn, including the current one.
        exchanges_left: u32,
    },
    /// The enemy is down.
    Victory,
    /// The player is down.
    Defeat,
    /// The player ran.
    Fled,
}

impl CombatState {
    /// Whether the encounter is over.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Victory | Self::Defeat | Self::Fled)
    }
}

/// How an encounter ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The enemy was defeated; carries its final state.
    Victory(Enemy),
    /// The player died.
    Defeat,
    /// The player fled.
    Fled,
}

/// One fight against one enemy.
#[derive(Debug, Clone)]
pub struct Encounter {
    /// The enemy, as it stands in this fight.
    pub enemy: Enemy,
    /// Current state.
    pub state: CombatState,
    frozen: bool,
    attacks_per_round: u32,
}

impl Encounter {
    /// Start an encounter.
    pub fn new(enemy: Enemy) -> Self {
        let attacks_per_round = bestiary::attacks_per_round(&enemy.name).max(1);
        Self {
            enemy,
            state: CombatState::Intro,
            frozen: false,
            attacks_per_round,
        }
    }

    /// Make the enemy lose its next turn.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    /// Leave the intro.
    pub fn begin(&mut self) {
        if self.state == CombatState::Intro {
            self.state = CombatState::PlayerTurn;
        }
    }

    /// End the encounter by running.
    pub fn flee(&mut self) {
        self.state = CombatState::Fled;
    }

    /// Move on after the player acted.
    pub fn end_player_turn(&mut self, player: &Player) {
        if self.state != CombatState::PlayerTurn {
            return;
        }
        self.state = if !self.enemy.is_alive() {
            CombatState::Victory
        } else if !player.is_alive() {
            CombatState::Defeat
        } else if self.frozen {
            self.frozen = false;
            CombatState::EnemyFrozen
        } else {
            CombatState::EnemyTurn {
                exchanges_left: self.attacks_per_round,
            }
        };
    }

    /// Move on after one enemy exchange. Death ends the fight at once.
    pub fn end_exchange(&mut self, player: &Player) {
        let CombatState::EnemyTurn { exchanges_left } = self.state else {
            return;
        };
        self.state = if !player.is_alive() {
            CombatState::Defeat
        } else if exchanges_left <= 1 {
            CombatState::PlayerTurn
        } else {
            CombatState::EnemyTurn {
                exchanges_left: exchanges_left - 1,
            }
        };
    }

    /// Move on after a frozen enemy's lost turn.
    pub fn end_frozen_turn(&mut self) {
        if self.state == CombatState::EnemyFrozen {
            self.state = CombatState::PlayerTurn;
        }
    }
}

impl GameSession {
    /// Run a fight to its end.
    pub(crate) fn fight(&mut self, enemy: Enemy) -> Outcome {
        let mut encounter = Encounter::new(enemy);
        debug!(enemy = %encounter.enemy.name, health = encounter.enemy.health, "combat started");
        loop {
            match encounter.state {
                CombatState::Intro => {
                    let enemy = &encounter.enemy;
                    self.console
                        .show(&format!("{}: {}", enemy.title, enemy.description));
                    encounter.begin();
                }
                CombatState::PlayerTurn => self.player_turn(&mut encounter),
                CombatState::EnemyFrozen => {
                    self.console.show("The enemy is frozen and skips its turn!");
                    encounter.end_frozen_turn();
                }
                CombatState::EnemyTurn { .. } => {
                    self.enemy_exchange(&encounter.enemy);
                    encounter.end_exchange(&self.player);
                }
                CombatState::Victory => return Outcome::Victory(encounter.enemy),
                CombatState::Defeat => return Outcome::Defeat,
                CombatState::Fled => return Outcome::Fled,
            }
        }
    }

    fn player_turn(&mut self, encounter: &mut Encounter) {
        let enemy = &encounter.enemy;
        self.console.show(&format!(
            "Combat with {}! Enemy health: {}, Your health: {}, Mana: {}",
            enemy.name, enemy.health, self.player.health, self.player.mana
        ));
        self.console
            .show("What do you do? (attack, cast [spell], use [item], flee)");

        let Some(line) = self.console.read_line() else {
            debug!("input closed during combat");
            encounter.flee();
            return;
        };
        let Some(action) = CombatAction::parse(&line) else {
            self.console.show("Invalid action.");
            return;
        };
        match self.resolve_action(action, encounter) {
            Ok(()) => encounter.end_player_turn(&self.player),
            Err(message) => self.console.show(&message),
        }
    }

    /// Carry out one action. `Err` holds a message for an action that did not
    /// use up the turn.
    fn resolve_action(
        &mut self,
        action: CombatAction,
        encounter: &mut Encounter,
    ) -> Result<(), String> {
        debug!(?action, "combat action");
        match action {
            CombatAction::Flee => encounter.flee(),
            CombatAction::Attack => {
                let health = encounter.enemy.take_damage(weapon_damage(&self.player));
                if health > 0 {
                    self.console.show(&format!(
                        "You hit {}! Now health: {health}",
                        encounter.enemy.name
                    ));
                }
            }
            CombatAction::Cast(name) => {
                let spell = Spell::from_name(&name)
                    .filter(|s| self.player.knows_spell(s.name()))
                    .ok_or_else(|| "Can't cast that.".to_string())?;
                if !self.player.spend_mana(SPELL_COST) {
                    return Err("Can't cast that.".to_string());
                }
                if spell.healing() > 0 {
                    self.player.heal(spell.healing());
                    self.console.show(&format!(
                        "You cast {}! Health restored to {}",
                        spell.name(),
                        self.player.health
                    ));
                } else {
                    let health = encounter.enemy.take_damage(spell.damage());
                    if spell.freezes() {
                        encounter.freeze();
                    }
                    if health > 0 {
                        self.console.show(&format!(
                            "You cast {}! Enemy health: {health}",
                            spell.name()
                        ));
                    }
                }
            }
            CombatAction::Use(item) => match self.use_item(&item, true) {
                Ok(Used::Done(message)) => self.console.show(&message),
                Ok(Used::Blast(damage)) => {
                    let health = encounter.enemy.take_damage(damage);
                    self.console.show(&format!(
                        "The {item} explodes for {damage} damage! Enemy health: {health}"
                    ));
                }
                Err(e) => return Err(e.to_string()),
            },
        }
        Ok(())
    }

    fn enemy_exchange(&mut self, enemy: &Enemy) {
        let attack = Attack::roll(
            enemy,
            self.player.difficulty,
            self.config.qte_scale,
            &mut self.rng,
        );
        self.console.show(&attack.prompt());
        let answer = self.console.read_line_timeout(attack.window);
        if attack.is_dodged_by(answer.as_deref()) {
            self.console.show("You dodged!");
            debug!(kind = ?attack.kind, "dodged");
        } else {
            let health = self.player.take_damage(attack.damage);
            self.console.show(&format!(
                "You took {} damage! Your health: {health}",
                attack.damage
            ));
            debug!(kind = ?attack.kind, damage = attack.damage, health, "hit");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rz_core::{Difficulty, LocationId};

    fn player() -> Player {
        Player::new(LocationId::new("arena"), Difficulty::Normal)
    }

    fn started(enemy: Enemy) -> Encounter {
        let mut encounter = Encounter::new(enemy);
        encounter.begin();
        encounter
    }

    #[test]
    fn intro_leads_to_player_turn() {
        let mut encounter = Encounter::new(Enemy::new("Goblin", "", "", 40, 10));
        assert_eq!(encounter.state, CombatState::Intro);
        encounter.begin();
        assert_eq!(encounter.state, CombatState::PlayerTurn);
    }

    #[test]
    fn bosses_attack_several_times() {
        let p = player();
        let mut encounter = started(Enemy::new("Hydra", "", "", 120, 35));
        encounter.end_player_turn(&p);
        assert_eq!(encounter.state, CombatState::EnemyTurn { exchanges_left: 3 });
        encounter.end_exchange(&p);
        encounter.end_exchange(&p);
        assert_eq!(encounter.state, CombatState::EnemyTurn { exchanges_left: 1 });
        encounter.end_exchange(&p);
        assert_eq!(encounter.state, CombatState::PlayerTurn);
    }

    #[test]
    fn death_preempts_remaining_exchanges() {
        let mut p = player();
        let mut encounter = started(Enemy::new("Razukan", "", "", 300, 60));
        encounter.end_player_turn(&p);
        encounter.end_exchange(&p);
        p.take_damage(500);
        encounter.end_exchange(&p);
        assert_eq!(encounter.state, CombatState::Defeat);
        assert!(encounter.state.is_terminal());
    }

    #[test]
    fn killing_blow_is_victory() {
        let p = player();
        let mut encounter = started(Enemy::new("Fallen Knight", "", "", 1, 0));
        encounter.enemy.take_damage(20);
        encounter.end_player_turn(&p);
        assert_eq!(encounter.state, CombatState::Victory);
    }

    #[test]
    fn freeze_skips_one_turn() {
        let p = player();
        let mut encounter = started(Enemy::new("Goblin", "", "", 40, 10));
        encounter.freeze();
        encounter.end_player_turn(&p);
        assert_eq!(encounter.state, CombatState::EnemyFrozen);
        encounter.end_frozen_turn();
        encounter.end_player_turn(&p);
        assert_eq!(encounter.state, CombatState::EnemyTurn { exchanges_left: 1 });
    }

    #[test]
    fn flee_is_terminal_without_harm() {
        let mut encounter = started(Enemy::new("Goblin", "", "", 40, 10));
        encounter.flee();
        assert_eq!(encounter.state, CombatState::Fled);
        assert_eq!(encounter.enemy.health, 40);
    }
}
