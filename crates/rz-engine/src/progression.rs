//! World changes driven by victories.
//!
//! Boss defeats are recorded on the player and replayed by [`resync`] after a
//! load, so a saved world can never disagree with the bosses already beaten.

use rz_core::bestiary::{self, DefeatEffect};
use rz_core::player::MAX_MANA;
use rz_core::{CoreResult, Enemy, Item, LocationId, Player, World};
use tracing::info;

/// What a victory produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spoils {
    /// Text for the player.
    pub message: String,
    /// Whether this victory ended the story.
    pub completed: bool,
}

/// Apply the rewards and world effects of defeating `enemy`.
///
/// The enemy is removed from the player's current location. Bosses are
/// recorded on the player and their defeat effects run.
pub fn claim_victory(world: &mut World, player: &mut Player, enemy: &Enemy) -> CoreResult<Spoils> {
    world
        .location_mut(player.location.as_str())?
        .remove_enemy(&enemy.name);
    player.gold = player.gold.saturating_add(enemy.gold_drop);
    player.mana = MAX_MANA;

    let mut notes: Vec<String> = enemy.info.iter().cloned().collect();
    let mut arrival = None;
    let mut completed = false;

    if let Some(profile) = bestiary::boss(&enemy.name) {
        if !player.has_defeated(profile.name) {
            player.defeated_bosses.push(profile.name.to_string());
        }
        for effect in profile.on_defeat {
            match *effect {
                DefeatEffect::GrantItem { name, description } => {
                    player.inventory.push(Item::new(name, description).usable());
                    notes.push(format!("You received a {name}!"));
                }
                DefeatEffect::UnlockExit { location, direction } => {
                    world.location_mut(location)?.unlock(direction);
                    notes.push(format!("The {direction} exit is now open."));
                }
                DefeatEffect::UnlockDestination(id) => {
                    player.unlocked_destinations.insert(id.to_string());
                    let note = "A new destination appears on your map.";
                    if !notes.iter().any(|n| n == note) {
                        notes.push(note.to_string());
                    }
                }
                DefeatEffect::ChapterTransition { to } => {
                    let next = world.location(to)?;
                    info!(boss = profile.name, to, "chapter transition");
                    arrival = Some(format!(
                        "\nYou are pulled into {}. {}",
                        next.name,
                        next.describe()
                    ));
                    player.location = LocationId::new(to);
                }
                DefeatEffect::CompleteGame => {
                    info!("game completed");
                    completed = true;
                }
            }
        }
    }

    let mut message = format!("You defeated {}!", enemy.name);
    for note in &notes {
        message.push(' ');
        message.push_str(note);
    }
    message.push_str(&format!(" Gained {} gold.", enemy.gold_drop));
    if let Some(arrival) = arrival {
        message.push_str(&arrival);
    }
    if completed {
        message.push_str(
            "\nThe curse of a thousand years is broken. You have completed Tales of Razukan!",
        );
    }
    Ok(Spoils { message, completed })
}

/// Re-apply the lasting effects of every boss the player has defeated.
///
/// Defeated bosses are removed from their home locations, exits they opened
/// are opened again and destinations they revealed are unlocked. Idempotent.
pub fn resync(world: &mut World, player: &mut Player) {
    for name in &player.defeated_bosses {
        let Some(profile) = bestiary::boss(name) else {
            continue;
        };
        if let Some(home) = world.get_mut(profile.home) {
            while home.remove_enemy(profile.name).is_some() {}
        }
        for effect in profile.on_defeat {
            match *effect {
                DefeatEffect::UnlockExit { location, direction } => {
                    if let Some(location) = world.get_mut(location) {
                        location.unlock(direction);
                    }
                }
                DefeatEffect::UnlockDestination(id) => {
                    player.unlocked_destinations.insert(id.to_string());
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rz_core::{Difficulty, initialize_world};

    fn at(location: &str) -> (World, Player) {
        let (world, _) = initialize_world();
        (world, Player::new(LocationId::new(location), Difficulty::Normal))
    }

    fn boss_at(world: &World, location: &str) -> Enemy {
        world.get(location).unwrap().enemies[0].clone()
    }

    #[test]
    fn dragon_opens_the_way_out() {
        let (mut world, mut player) = at("dragon_chamber");
        player.mana = 10;
        let dragon = boss_at(&world, "dragon_chamber");
        let spoils = claim_victory(&mut world, &mut player, &dragon).unwrap();
        let chamber = world.get("dragon_chamber").unwrap();
        assert!(chamber.enemies.is_empty());
        assert!(chamber.exits().contains_key("out"));
        assert_eq!(player.mana, MAX_MANA);
        assert_eq!(player.gold, 150);
        assert_eq!(player.defeated_bosses, vec!["Dragon".to_string()]);
        assert!(spoils.message.starts_with("You defeated Dragon!"));
        assert!(spoils.message.ends_with("Gained 50 gold."));
    }

    #[test]
    fn hydra_grants_the_boat() {
        let (mut world, mut player) = at("hydra_lair");
        let hydra = boss_at(&world, "hydra_lair");
        let spoils = claim_victory(&mut world, &mut player, &hydra).unwrap();
        assert!(player.has_item("boat"));
        assert!(spoils.message.contains("You received a boat!"));
    }

    #[test]
    fn leviathan_opens_the_skies() {
        let (mut world, mut player) = at("whirlpool");
        let leviathan = boss_at(&world, "whirlpool");
        let spoils = claim_victory(&mut world, &mut player, &leviathan).unwrap();
        assert!(player.has_item("airship"));
        assert!(player.can_travel_to("town_square"));
        assert!(player.can_travel_to("lokendar_nw"));
        assert_eq!(
            spoils.message.matches("A new destination appears on your map.").count(),
            1
        );
    }

    #[test]
    fn thanatos_moves_the_player_on() {
        let (mut world, mut player) = at("thanatos_spire");
        let thanatos = boss_at(&world, "thanatos_spire");
        let spoils = claim_victory(&mut world, &mut player, &thanatos).unwrap();
        assert_eq!(player.location.as_str(), "razukan_sanctum");
        assert!(!spoils.completed);
        assert!(spoils.message.contains("Razukan"));
    }

    #[test]
    fn razukan_completes_the_game() {
        let (mut world, mut player) = at("razukan_sanctum");
        let razukan = boss_at(&world, "razukan_sanctum");
        assert!(claim_victory(&mut world, &mut player, &razukan).unwrap().completed);
    }

    #[test]
    fn ordinary_enemies_only_pay_gold() {
        let (mut world, mut player) = at("forest");
        let goblin = boss_at(&world, "forest");
        let spoils = claim_victory(&mut world, &mut player, &goblin).unwrap();
        assert!(player.defeated_bosses.is_empty());
        assert!(!spoils.completed);
        assert_eq!(player.gold, 100 + goblin.gold_drop);
    }

    #[test]
    fn resync_replays_boss_defeats() {
        let (mut world, mut player) = at("castle_start");
        player.defeated_bosses = vec!["Dragon".into(), "Stone Golem".into()];
        resync(&mut world, &mut player);
        resync(&mut world, &mut player);
        let chamber = world.get("dragon_chamber").unwrap();
        assert!(chamber.enemies.is_empty());
        assert!(chamber.exits().contains_key("out"));
        assert!(chamber.locked_exits().is_empty());
        assert!(world.get("ancient_ruins").unwrap().enemies.is_empty());
        assert!(player.can_travel_to("spring_of_courage"));
    }
}
