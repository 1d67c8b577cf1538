//! Adventure engine for Tales of Razukan.
//!
//! A [`GameSession`] owns the world and the player and turns lines of text
//! into responses. Commands are parsed into a [`Command`], dispatched to the
//! exploration, inventory, social and puzzle handlers, or hand control to the
//! combat loop, which runs until victory, defeat or flight. Saves go through a
//! [`SaveStore`]; interactive sub-prompts and the timed dodge prompts go
//! through a [`Console`].

/// Exploration, inventory, social and puzzle handlers.
pub mod actions;
/// Turn-based combat with quick-time dodges.
pub mod combat;
/// Engine configuration.
pub mod config;
/// Line input and transient output.
pub mod console;
/// Error types for the engine.
pub mod error;
/// Command parsing.
pub mod parser;
/// World changes driven by boss defeats.
pub mod progression;
/// Save documents and persistence providers.
pub mod save;
/// The game session.
pub mod session;

pub use config::EngineConfig;
pub use console::{ChannelConsole, Console, ScriptedConsole};
pub use error::{GameError, GameResult};
pub use parser::{Command, parse_command};
pub use save::{FileStore, MemoryStore, PersistError, SaveDocument, SaveStore};
pub use session::{GameSession, SessionStatus};
