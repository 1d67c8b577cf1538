//! Configuration for a game session.

use std::time::Duration;

/// Tunables for a [`GameSession`](crate::GameSession).
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// RNG seed; `None` seeds from the operating system.
    pub seed: Option<u64>,
    /// Digits in the shrine's memorization sequence.
    pub sequence_length: usize,
    /// How long each digit stays on screen.
    pub sequence_pace: Duration,
    /// Extra factor on every quick-time window (1.0 = as designed).
    pub qte_scale: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            sequence_length: 5,
            sequence_pace: Duration::from_millis(750),
            qte_scale: 1.0,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the puzzle length (at least 1).
    pub fn with_sequence_length(mut self, len: usize) -> Self {
        self.sequence_length = len.max(1);
        self
    }

    /// Set the per-digit display time.
    pub fn with_sequence_pace(mut self, pace: Duration) -> Self {
        self.sequence_pace = pace;
        self
    }

    /// Scale every quick-time window (clamped to 0.1..=10).
    pub fn with_qte_scale(mut self, scale: f64) -> Self {
        self.qte_scale = scale.clamp(0.1, 10.0);
        self
    }
}
