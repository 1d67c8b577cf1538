use rand::Rng;
use rz_core::content::hidden_monster;
use tracing::debug;

use super::is_yes;
use crate::combat::Spell;
use crate::error::{GameError, GameResult};
use crate::session::{GameSession, SessionStatus};

const WAGER: u32 = 50;
const SCROLL_PRICE: u32 = 100;
const PUNCH_DAMAGE: u32 = 10;

/// What happens when the player talks to someone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalkOutcome {
    /// Ordinary chatter.
    Dialogue,
    /// A game of chance that is really a theft.
    Wager,
    /// The townsperson was a monster all along.
    Reveal,
    /// An offer to sell a spell scroll.
    ScrollOffer,
    /// An unprovoked punch.
    Punch,
}

impl TalkOutcome {
    /// Map a roll in `[0, 1)` to an outcome.
    pub fn from_roll(roll: f64) -> Self {
        match roll {
            r if r < 0.50 => Self::Dialogue,
            r if r < 0.75 => Self::Wager,
            r if r < 0.85 => Self::Reveal,
            r if r < 0.95 => Self::ScrollOffer,
            _ => Self::Punch,
        }
    }
}

impl GameSession {
    pub(crate) fn do_talk(&mut self, name: &str) -> GameResult<String> {
        let location = self.world.location(self.player.location.as_str())?;
        let index = location
            .npc_index(name)
            .ok_or_else(|| GameError::NoSuchNpc(name.to_string()))?;
        let outcome = TalkOutcome::from_roll(self.rng.random::<f64>());
        debug!(npc = %location.npcs[index].name, ?outcome, "talk");

        match outcome {
            TalkOutcome::Dialogue => Ok(location.npcs[index].dialogue.clone()),
            TalkOutcome::Wager => Ok(self.wager()),
            TalkOutcome::Reveal => {
                let monster = hidden_monster().at_difficulty(self.player.difficulty);
                let location = self.world.location_mut(self.player.location.as_str())?;
                location.npcs.remove(index);
                location.enemies.push(monster);
                Ok("The townsperson reveals itself as a monster! Prepare to fight!".to_string())
            }
            TalkOutcome::ScrollOffer => Ok(self.scroll_offer()),
            TalkOutcome::Punch => {
                let health = self.player.take_damage(PUNCH_DAMAGE);
                if health == 0 {
                    self.status = SessionStatus::Defeated;
                    return Ok("You died! Game over.".to_string());
                }
                Ok(format!(
                    "The townsperson punches you in the face! -{PUNCH_DAMAGE} health. Your health: {health}"
                ))
            }
        }
    }

    fn wager(&mut self) -> String {
        self.console.show("Want to play a gambling game?");
        if !is_yes(self.console.read_line().as_deref()) {
            return "Maybe next time.".to_string();
        }
        if self.player.spend_gold(WAGER) {
            format!(
                "The Game Begins! Oh... wait... where did he go? Oh no, I can't find {WAGER} of my gold!"
            )
        } else {
            "You don't have enough gold.".to_string()
        }
    }

    fn scroll_offer(&mut self) -> String {
        let spell = Spell::ALL[self.rng.random_range(0..Spell::ALL.len())];
        self.console.show(&format!(
            "Want to buy a {} scroll for {SCROLL_PRICE} gold?",
            spell.name()
        ));
        if !is_yes(self.console.read_line().as_deref()) {
            return "Offer declined.".to_string();
        }
        if self.player.spend_gold(SCROLL_PRICE) {
            self.player.learn_spell(spell.name());
            format!("You bought the {} scroll!", spell.name())
        } else {
            "Not enough gold.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::tests::session_at;

    #[test]
    fn bands() {
        assert_eq!(TalkOutcome::from_roll(0.0), TalkOutcome::Dialogue);
        assert_eq!(TalkOutcome::from_roll(0.4999), TalkOutcome::Dialogue);
        assert_eq!(TalkOutcome::from_roll(0.5), TalkOutcome::Wager);
        assert_eq!(TalkOutcome::from_roll(0.75), TalkOutcome::Reveal);
        assert_eq!(TalkOutcome::from_roll(0.85), TalkOutcome::ScrollOffer);
        assert_eq!(TalkOutcome::from_roll(0.95), TalkOutcome::Punch);
        assert_eq!(TalkOutcome::from_roll(0.9999), TalkOutcome::Punch);
    }

    #[test]
    fn nobody_to_talk_to() {
        let mut s = session_at("castle_start", &[]);
        assert_eq!(
            s.process("talk guard").unwrap_err().to_string(),
            "No such NPC here."
        );
    }

    #[test]
    fn talking_always_does_exactly_one_thing() {
        // Answer "no" to any offer so gold only moves on a theft.
        let answers = vec!["no"; 64];
        let mut s = session_at("lokendar_se", &answers);
        for _ in 0..64 {
            let npc = s.world().get("lokendar_se").unwrap().npcs.first().map(|n| n.name.clone());
            let Some(npc) = npc else { break };
            let response = s.process(&format!("talk {npc}")).unwrap();
            assert!(!response.is_empty());
            if s.world().get("lokendar_se").unwrap().enemies.len() == 1 {
                assert_eq!(
                    response,
                    "The townsperson reveals itself as a monster! Prepare to fight!"
                );
                break;
            }
            if !s.player().is_alive() {
                break;
            }
        }
        assert_eq!(s.player().gold, 100);
    }

    #[test]
    fn wager_takes_the_stake() {
        let mut s = session_at("lokendar_se", &["yes", "y"]);
        assert!(s.wager().starts_with("The Game Begins!"));
        assert_eq!(s.player().gold, 50);
        assert!(s.wager().starts_with("The Game Begins!"));
        assert_eq!(s.wager(), "Maybe next time.");
    }

    #[test]
    fn wager_without_gold() {
        let mut s = session_at("lokendar_se", &["yes"]);
        s.player_mut().gold = 10;
        assert_eq!(s.wager(), "You don't have enough gold.");
        assert_eq!(s.player().gold, 10);
    }

    #[test]
    fn scroll_offer_teaches_a_spell() {
        let mut s = session_at("lokendar_se", &["yes", "no"]);
        let response = s.scroll_offer();
        assert!(response.starts_with("You bought the "));
        assert_eq!(s.player().gold, 0);
        assert_eq!(s.player().spells.len(), 1);
        assert_eq!(s.scroll_offer(), "Offer declined.");
    }
}
