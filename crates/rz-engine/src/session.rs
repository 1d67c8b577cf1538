//! The game session.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rz_core::{Difficulty, Location, Player, World, initialize_world};
use tracing::{debug, info, warn};

use crate::combat::Outcome;
use crate::config::EngineConfig;
use crate::console::Console;
use crate::error::{GameError, GameResult};
use crate::parser::{Command, parse_command};
use crate::progression;
use crate::save::{PersistError, SaveDocument, SaveStore, slot_name};

const HELP: &str = "Commands: get [item], attack [enemy], use [item], buy [item], go [direction], \
look, inventory, talk [npc], memorize (at shrine), save [slot], load [slot], \
set_difficulty [easy|normal|hard|expert], help, quit";

/// Whether the story is still going.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// The player is alive and the story is unfinished.
    #[default]
    Playing,
    /// The player died.
    Defeated,
    /// Razukan has fallen.
    Completed,
}

/// A running game: the world, the player, and the I/O they are played through.
pub struct GameSession {
    pub(crate) world: World,
    pub(crate) player: Player,
    pub(crate) status: SessionStatus,
    pub(crate) rng: StdRng,
    pub(crate) console: Box<dyn Console>,
    pub(crate) store: Box<dyn SaveStore>,
    pub(crate) config: EngineConfig,
}

impl GameSession {
    /// Start a new game at `difficulty`.
    pub fn new(
        difficulty: Difficulty,
        console: impl Console + 'static,
        store: impl SaveStore + 'static,
        config: EngineConfig,
    ) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let (world, player) = new_game(difficulty);
        info!(%difficulty, seed = ?config.seed, "new game");
        Self {
            world,
            player,
            status: SessionStatus::Playing,
            rng,
            console: Box::new(console),
            store: Box::new(store),
            config,
        }
    }

    /// The world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable access to the world.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// The player.
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mutable access to the player.
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Whether the story is still going.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Whether the game has ended in death or victory.
    pub fn is_finished(&self) -> bool {
        self.status != SessionStatus::Playing
    }

    /// The engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The player's current location.
    pub fn current_location(&self) -> GameResult<&Location> {
        Ok(self.world.location(self.player.location.as_str())?)
    }

    /// Read the next command line from the console.
    pub fn read_line(&mut self) -> Option<String> {
        self.console.read_line()
    }

    /// Parse and run one line of input.
    pub fn process(&mut self, input: &str) -> GameResult<String> {
        let command = parse_command(input)?;
        self.execute(command)
    }

    /// Run a parsed command.
    pub fn execute(&mut self, command: Command) -> GameResult<String> {
        if self.is_finished()
            && !matches!(command, Command::Load { .. } | Command::Help | Command::Quit)
        {
            return Err(GameError::GameOver);
        }
        debug!(?command, location = %self.player.location, "dispatch");
        match command {
            Command::Get { item } => self.do_get(&item),
            Command::Attack { enemy } => self.do_attack(&enemy),
            Command::Use { item } => self.do_use(&item),
            Command::Buy { item } => self.do_buy(&item),
            Command::Go { direction } => self.do_go(&direction),
            Command::Look => self.do_look(),
            Command::Inventory => Ok(self.do_inventory()),
            Command::Talk { npc } => self.do_talk(&npc),
            Command::Memorize => self.do_memorize(),
            Command::Save { slot } => self.do_save(slot.as_deref()),
            Command::Load { slot } => self.do_load(slot.as_deref()),
            Command::SetDifficulty { level } => self.do_set_difficulty(&level),
            Command::Cast => Ok("Cast during combat.".to_string()),
            Command::Help => Ok(HELP.to_string()),
            Command::Quit => Ok("Farewell.".to_string()),
        }
    }

    fn do_attack(&mut self, name: &str) -> GameResult<String> {
        let location = self.world.location(self.player.location.as_str())?;
        let enemy = location
            .enemy_index(name)
            .map(|i| location.enemies[i].clone())
            .ok_or_else(|| GameError::NoSuchEnemy(name.to_string()))?;

        match self.fight(enemy) {
            Outcome::Victory(enemy) => {
                info!(enemy = %enemy.name, "enemy defeated");
                let spoils = progression::claim_victory(&mut self.world, &mut self.player, &enemy)?;
                if spoils.completed {
                    self.status = SessionStatus::Completed;
                }
                Ok(spoils.message)
            }
            Outcome::Defeat => {
                info!("player defeated");
                self.status = SessionStatus::Defeated;
                Ok("You died! Game over.".to_string())
            }
            Outcome::Fled => Ok("You fled the combat.".to_string()),
        }
    }

    fn do_set_difficulty(&mut self, level: &str) -> GameResult<String> {
        let difficulty: Difficulty = level.parse()?;
        self.player.difficulty = difficulty;
        self.world.apply_difficulty(difficulty);
        info!(%difficulty, "difficulty changed");
        Ok(format!("Difficulty set to {difficulty}."))
    }

    fn do_save(&mut self, slot: Option<&str>) -> GameResult<String> {
        let slot = slot_name(slot)?;
        let document = SaveDocument::capture(&self.world, &self.player);
        self.store.write(&slot, &document)?;
        info!(%slot, "game saved");
        Ok("Game saved.".to_string())
    }

    fn do_load(&mut self, slot: Option<&str>) -> GameResult<String> {
        let slot = slot_name(slot)?;
        match self.store.read(&slot) {
            Ok(document) => {
                let (world, player) = document.restore(self.player.difficulty);
                self.world = world;
                self.player = player;
                self.status = status_of(&self.player);
                info!(%slot, location = %self.player.location, "game loaded");
                Ok(format!("Game loaded.\n{}", self.do_look()?))
            }
            Err(PersistError::NotFound(_)) => Ok("No save file.".to_string()),
            Err(e) => {
                warn!(%slot, error = %e, "save unreadable; starting a new game");
                let (world, player) = new_game(self.player.difficulty);
                self.world = world;
                self.player = player;
                self.status = SessionStatus::Playing;
                Ok("Save file corrupted. Started new game.".to_string())
            }
        }
    }
}

fn new_game(difficulty: Difficulty) -> (World, Player) {
    let (mut world, start) = initialize_world();
    world.apply_difficulty(difficulty);
    (world, Player::new(start, difficulty))
}

fn status_of(player: &Player) -> SessionStatus {
    if !player.is_alive() {
        SessionStatus::Defeated
    } else if player.has_defeated("Razukan") {
        SessionStatus::Completed
    } else {
        SessionStatus::Playing
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::console::{ScriptedConsole, Transcript};
    use crate::save::MemoryStore;
    use rz_core::content::START;
    use rz_core::{Enemy, Item, LocationId};

    pub(crate) fn build(
        location: &str,
        console: ScriptedConsole,
        store: MemoryStore,
    ) -> (GameSession, Transcript) {
        let transcript = console.transcript();
        let mut session = GameSession::new(
            Difficulty::Normal,
            console,
            store,
            EngineConfig::default().with_seed(7),
        );
        session.player.location = LocationId::new(location);
        (session, transcript)
    }

    pub(crate) fn scripted_at(
        location: &str,
        console: ScriptedConsole,
    ) -> (GameSession, Transcript) {
        build(location, console, MemoryStore::new())
    }

    pub(crate) fn session_at(location: &str, lines: &[&str]) -> GameSession {
        scripted_at(location, ScriptedConsole::new(lines.iter().copied())).0
    }

    pub(crate) fn session(lines: &[&str]) -> GameSession {
        session_at(START, lines)
    }

    fn goblin_health(s: &GameSession) -> u32 {
        s.world().get("forest").unwrap().enemies[0].health
    }

    #[test]
    fn start_room_and_unlock() {
        let mut s = session(&[]);
        assert!(s.process("go north").unwrap().contains("locked"));
        s.process("get key").unwrap();
        s.process("use key").unwrap();
        assert!(!s.player().has_item("key"));
        s.process("go north").unwrap();
        assert_eq!(s.player().location.as_str(), "castle_hall");
    }

    #[test]
    fn hard_difficulty_scales_every_enemy() {
        let mut s = session(&[]);
        s.world_mut()
            .get_mut("castle_hall")
            .unwrap()
            .enemies
            .push(Enemy::new("Wight", "", "", 100, 20));
        assert_eq!(s.process("set_difficulty hard").unwrap(), "Difficulty set to hard.");
        let wight = &s.world().get("castle_hall").unwrap().enemies[0];
        assert_eq!(wight.health, 150);
        assert_eq!(wight.damage, 30);
        assert_eq!(s.player().difficulty, Difficulty::Hard);
    }

    #[test]
    fn bad_difficulty_is_rejected() {
        let mut s = session(&[]);
        let err = s.process("set_difficulty nightmare").unwrap_err();
        assert!(err.to_string().starts_with("Invalid difficulty"));
        assert_eq!(s.player().difficulty, Difficulty::Normal);
    }

    #[test]
    fn harmless_boss_falls_to_one_blow() {
        let console = ScriptedConsole::new(["attack"]);
        let (mut s, _) = scripted_at("spring_of_courage", console);
        let response = s.process("attack fallen knight").unwrap();
        assert!(response.starts_with("You defeated Fallen Knight!"));
        assert_eq!(s.player().health, 100);
        assert!(s.player().can_travel_to("thanatos_spire"));
        assert!(s.world().get("spring_of_courage").unwrap().enemies.is_empty());
    }

    #[test]
    fn zero_damage_enemy_never_hurts() {
        let mut script = ScriptedConsole::default();
        for _ in 0..3 {
            script = script.then_line("attack").then_timeout();
        }
        let (mut s, _) = scripted_at("spring_of_courage", script);
        s.world_mut().get_mut("spring_of_courage").unwrap().enemies[0].health = 60;
        assert!(s.process("attack fallen knight").unwrap().starts_with("You defeated"));
        assert_eq!(s.player().health, 100);
    }

    #[test]
    fn fleeing_leaves_everything_as_it_was() {
        let console = ScriptedConsole::new(["flee"]);
        let (mut s, _) = scripted_at("forest", console);
        let before = goblin_health(&s);
        assert_eq!(s.process("attack goblin").unwrap(), "You fled the combat.");
        assert_eq!(goblin_health(&s), before);
        assert_eq!(s.player().health, 100);
        assert_eq!(s.status(), SessionStatus::Playing);
    }

    #[test]
    fn hit_then_flee_keeps_world_enemy_whole() {
        let console = ScriptedConsole::new(["attack"])
            .then_line("jump")
            .then_line("dodge")
            .then_line("flee");
        let (mut s, _) = scripted_at("forest", console);
        assert_eq!(s.process("attack goblin").unwrap(), "You fled the combat.");
        assert_eq!(goblin_health(&s), 40);
    }

    #[test]
    fn goblin_fight_to_victory() {
        let console = ScriptedConsole::new(["attack"]).then_timeout().then_line("attack");
        let (mut s, transcript) = scripted_at("forest", console);
        s.player_mut().mana = 30;
        let response = s.process("attack goblin").unwrap();
        assert_eq!(response, "You defeated Goblin! Gained 10 gold.");
        assert!(s.player().health < 100 && s.player().health > 0);
        assert_eq!(s.player().gold, 110);
        assert_eq!(s.player().mana, 100);
        assert!(s.world().get("forest").unwrap().enemies.is_empty());
        let shown = transcript.borrow();
        assert!(shown.iter().any(|l| l.starts_with("Combat with Goblin! Enemy health: 40")));
        assert!(shown.iter().any(|l| l == "You hit Goblin! Now health: 20"));
        assert!(shown.iter().any(|l| l.starts_with("You took ")));
    }

    #[test]
    fn icebolt_freezes_the_enemy() {
        let console = ScriptedConsole::new(["cast icebolt", "attack"]);
        let (mut s, transcript) = scripted_at("forest", console);
        s.player_mut().learn_spell("icebolt");
        assert!(s.process("attack goblin").unwrap().starts_with("You defeated Goblin!"));
        assert_eq!(s.player().health, 100);
        assert!(
            transcript
                .borrow()
                .iter()
                .any(|l| l == "The enemy is frozen and skips its turn!")
        );
    }

    #[test]
    fn failed_actions_keep_the_turn() {
        let console = ScriptedConsole::new(["cast firebolt", "use boat", "dance", "flee"]);
        let (mut s, transcript) = scripted_at("forest", console);
        assert_eq!(s.process("attack goblin").unwrap(), "You fled the combat.");
        assert_eq!(s.player().health, 100);
        let shown = transcript.borrow();
        assert!(shown.iter().any(|l| l == "Can't cast that."));
        assert!(shown.iter().any(|l| l == "Can't use that."));
        assert!(shown.iter().any(|l| l == "Invalid action."));
    }

    #[test]
    fn bomb_is_spent_in_combat() {
        let console = ScriptedConsole::new(["use bomb"]);
        let (mut s, _) = scripted_at("forest", console);
        s.player_mut().inventory.push(rz_core::content::bomb());
        assert!(s.process("attack goblin").unwrap().starts_with("You defeated Goblin!"));
        assert!(!s.player().has_item("bomb"));
    }

    #[test]
    fn potions_are_kept_in_combat() {
        let console = ScriptedConsole::new(["use health potion"]).then_timeout().then_line("flee");
        let (mut s, _) = scripted_at("forest", console);
        s.player_mut().inventory.push(rz_core::content::health_potion());
        s.player_mut().health = 40;
        s.process("attack goblin").unwrap();
        assert!(s.player().has_item("health potion"));
        assert!(s.player().health > 40);
    }

    #[test]
    fn end_of_input_in_combat_flees() {
        let (mut s, _) = scripted_at("forest", ScriptedConsole::default());
        assert_eq!(s.process("attack goblin").unwrap(), "You fled the combat.");
    }

    #[test]
    fn death_ends_the_game() {
        let console = ScriptedConsole::new(["attack"]).then_timeout();
        let (mut s, _) = scripted_at("razukan_sanctum", console);
        s.player_mut().health = 1;
        assert_eq!(s.process("attack razukan").unwrap(), "You died! Game over.");
        assert_eq!(s.player().health, 0);
        assert_eq!(s.status(), SessionStatus::Defeated);
        assert!(matches!(s.process("look"), Err(GameError::GameOver)));
        assert!(s.process("help").is_ok());
    }

    #[test]
    fn final_chapter_and_completion() {
        let console = ScriptedConsole::new(["attack", "attack"]);
        let (mut s, _) = scripted_at("thanatos_spire", console);
        s.world_mut().get_mut("thanatos_spire").unwrap().enemies[0].health = 1;
        s.world_mut().get_mut("razukan_sanctum").unwrap().enemies[0].health = 1;
        let response = s.process("attack thanatos").unwrap();
        assert!(response.contains("Sanctum of Razukan"));
        assert_eq!(s.player().location.as_str(), "razukan_sanctum");
        assert!(s.process("attack razukan").unwrap().contains("completed"));
        assert_eq!(s.status(), SessionStatus::Completed);
        assert!(s.is_finished());
    }

    #[test]
    fn save_mutate_load_reverts() {
        let mut s = session(&[]);
        s.process("get key").unwrap();
        assert_eq!(s.process("save 3").unwrap(), "Game saved.");
        let (world, player) = (s.world().clone(), s.player().clone());

        s.process("use key").unwrap();
        s.process("go north").unwrap();
        s.player_mut().gold = 1;
        s.player_mut().inventory.push(Item::new("crown", ""));

        assert!(s.process("load 3").unwrap().starts_with("Game loaded."));
        assert_eq!(s.world(), &world);
        assert_eq!(s.player(), &player);
    }

    #[test]
    fn loading_restocks_the_shop() {
        let mut s = session_at("shop", &[]);
        s.process("buy bomb").unwrap();
        s.process("save").unwrap();
        s.process("load").unwrap();
        assert!(s.player().has_item("bomb"));
        assert_eq!(s.player().gold, 40);
        assert!(s.world().get("shop").unwrap().find_item("bomb").is_some());
    }

    #[test]
    fn loading_twice_is_stable() {
        let mut s = session_at("forest", &[]);
        s.process("get sun fragment").unwrap();
        s.process("save q").unwrap();
        s.process("load q").unwrap();
        let first = (s.world().clone(), s.player().clone());
        s.process("load q").unwrap();
        assert_eq!((s.world().clone(), s.player().clone()), first);
    }

    #[test]
    fn missing_save_changes_nothing() {
        let mut s = session(&[]);
        s.process("get key").unwrap();
        assert_eq!(s.process("load 8").unwrap(), "No save file.");
        assert!(s.player().has_item("key"));
    }

    #[test]
    fn corrupt_save_starts_over() {
        let store = MemoryStore::new();
        store.insert_raw("1", "{\"player\": ");
        let (mut s, _) = build(START, ScriptedConsole::default(), store);
        s.process("set_difficulty expert").unwrap();
        s.process("get key").unwrap();
        assert_eq!(
            s.process("load").unwrap(),
            "Save file corrupted. Started new game."
        );
        assert!(!s.player().has_item("key"));
        assert_eq!(s.player().difficulty, Difficulty::Expert);
        assert_eq!(s.status(), SessionStatus::Playing);
    }

    #[test]
    fn bad_slot_names() {
        let mut s = session(&[]);
        assert!(matches!(s.process("save ../x"), Err(GameError::InvalidSlot(_))));
    }

    #[test]
    fn cast_and_help_outside_combat() {
        let mut s = session(&[]);
        assert_eq!(s.process("cast firebolt").unwrap(), "Cast during combat.");
        assert!(s.process("help").unwrap().starts_with("Commands: get [item]"));
        assert_eq!(
            s.process("fly").unwrap_err().to_string(),
            "Unknown command. Try 'help'."
        );
        assert_eq!(s.process("get").unwrap_err().to_string(), "Get what?");
    }
}
