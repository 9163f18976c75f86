//! Game configuration.
//!
//! The board and deck are fixed by the rules; what a host may choose is the
//! random seed and what the seats are called.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PLAYER_COUNT};

/// Configuration for one game instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DogConfig {
    /// Seed for every shuffle and for the starting seat.
    pub seed: u64,

    /// Display names, indexed by seat.
    pub player_names: [String; PLAYER_COUNT],
}

impl DogConfig {
    /// Create a configuration with default seat names.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            player_names: default_names(),
        }
    }

    /// Set all four seat names.
    #[must_use]
    pub fn with_names(mut self, names: [String; PLAYER_COUNT]) -> Self {
        self.player_names = names;
        self
    }

    /// Name of a seat.
    #[must_use]
    pub fn name(&self, player: PlayerId) -> &str {
        &self.player_names[player.index()]
    }
}

impl Default for DogConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

fn default_names() -> [String; PLAYER_COUNT] {
    [0u8, 1, 2, 3].map(|i| PlayerId::new(i).to_string())
}
