//! Exploration, inventory, social and puzzle handlers.
//!
//! Each handler is a method on [`GameSession`](crate::GameSession) returning
//! the response text. Refusals that name nothing real (an item that is not
//! here, an NPC that does not exist) are errors; refusals the world imposes
//! (a locked door, an unsolved puzzle) are ordinary responses.

mod items;
mod movement;
mod puzzle;
mod talk;
mod travel;

pub use items::Used;
pub use talk::TalkOutcome;

/// Whether a prompt answer means yes.
fn is_yes(answer: Option<&str>) -> bool {
    answer.is_some_and(|a| matches!(a.trim().to_lowercase().as_str(), "y" | "yes"))
}
