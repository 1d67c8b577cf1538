//! Core types for Tales of Razukan: locations, entities, the player and the world.
//!
//! This crate owns the data model the engine mutates and the static world
//! content. [`content::initialize_world`] builds a pristine [`World`] and is
//! safe to call any number of times; the engine uses it both for a new game
//! and as the template a saved game is overlaid onto.

/// Boss roster: attack counts, special attacks and defeat effects.
pub mod bestiary;
/// Static world content and the world initialization entry point.
pub mod content;
/// Difficulty tiers and their stat multipliers.
pub mod difficulty;
/// Enemy definitions with difficulty-derived stats.
pub mod enemy;
/// Error types used throughout the crate.
pub mod error;
/// Item value objects.
pub mod item;
/// Locations, exits and description rendering.
pub mod location;
/// Non-player characters.
pub mod npc;
/// Player state.
pub mod player;
/// Fast-travel vehicles and destinations.
pub mod travel;
/// The world graph that owns every location.
pub mod world;

pub use content::initialize_world;
pub use difficulty::Difficulty;
pub use enemy::{Enemy, EnemyRecord};
pub use error::{CoreError, CoreResult};
pub use item::Item;
pub use location::{Location, LocationId};
pub use npc::Npc;
pub use player::Player;
pub use travel::{Destination, Vehicle};
pub use world::World;
