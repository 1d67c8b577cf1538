//! Difficulty tiers.
//!
//! Each tier scales enemy health and damage by a fixed multiplier and
//! stretches or shrinks the quick-time dodge windows.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The global difficulty setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Half-strength enemies, generous dodge windows.
    Easy,
    /// Enemies at their base stats.
    #[default]
    Normal,
    /// Enemies at one and a half times their base stats.
    Hard,
    /// Enemies at double their base stats, very short dodge windows.
    Expert,
}

impl Difficulty {
    /// Every tier, easiest first.
    pub const ALL: [Difficulty; 4] = [Self::Easy, Self::Normal, Self::Hard, Self::Expert];

    /// Stat multiplier applied to enemy base health and damage.
    pub fn multiplier(self) -> f64 {
        match self {
            Self::Easy => 0.5,
            Self::Normal => 1.0,
            Self::Hard => 1.5,
            Self::Expert => 2.0,
        }
    }

    /// Factor applied to every quick-time window.
    pub fn dodge_window_factor(self) -> f64 {
        match self {
            Self::Easy => 1.5,
            Self::Normal => 1.0,
            Self::Hard => 0.75,
            Self::Expert => 0.5,
        }
    }

    /// Scale a base stat by this tier's multiplier, rounding to the nearest integer.
    pub fn scale(self, base: u32) -> u32 {
        (f64::from(base) * self.multiplier()).round() as u32
    }

    /// Lowercase name as typed by the player.
    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Difficulty {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "normal" => Ok(Self::Normal),
            "hard" => Ok(Self::Hard),
            "expert" => Ok(Self::Expert),
            _ => Err(CoreError::UnknownDifficulty(s.trim().to_string())),
        }
    }
}
