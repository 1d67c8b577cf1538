//! Error types for the engine.
//!
//! The `Display` text of every variant is the message shown to the player.

use thiserror::Error;

use crate::save::PersistError;

/// Result type for engine operations.
pub type GameResult<T> = Result<T, GameError>;

/// Errors a command can end with. All of them leave the session playable.
#[derive(Debug, Error)]
pub enum GameError {
    /// Blank input.
    #[error("Unrecognizable command. Try 'help'.")]
    EmptyCommand,

    /// The first word is not a known verb.
    #[error("Unknown command. Try 'help'.")]
    UnknownCommand(String),

    /// A verb that needs a target was given none.
    #[error("{0}")]
    MissingTarget(&'static str),

    /// No item with that name where the player looked.
    #[error("No such item here.")]
    NoSuchItem(String),

    /// No enemy with that name here.
    #[error("No such enemy here.")]
    NoSuchEnemy(String),

    /// No NPC with that name here.
    #[error("No such NPC here.")]
    NoSuchNpc(String),

    /// The item is not carried, not usable, or does nothing here.
    #[error("Can't use that.")]
    CantUse(String),

    /// `buy` outside a shop.
    #[error("No shop here.")]
    NoShop,

    /// The shop has no such priced item.
    #[error("No such item for sale.")]
    NotForSale(String),

    /// Not enough gold for a purchase.
    #[error("Not enough gold.")]
    NotEnoughGold,

    /// `memorize` away from the shrine.
    #[error("No puzzle here.")]
    NoPuzzle,

    /// A data-model error, such as a difficulty outside the fixed set.
    #[error(transparent)]
    Core(#[from] rz_core::CoreError),

    /// A save slot name that cannot be used as a file name.
    #[error("Invalid save slot '{0}'. Use letters, digits, '-' or '_'.")]
    InvalidSlot(String),

    /// The session has ended; only load, help and quit are accepted.
    #[error("The game is over. Load a saved game or quit.")]
    GameOver,

    /// Writing or reading a save failed.
    #[error("Could not save: {0}")]
    Persist(#[from] PersistError),
}
