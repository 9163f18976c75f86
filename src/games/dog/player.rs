//! Player collaborators.

use crate::core::{Action, GameRng, GameState};
use crate::rules::Player;

/// Picks uniformly among the offered actions; passes when there are none.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_rng(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_rng(rng: GameRng) -> Self {
        Self { rng }
    }
}

impl Player for RandomPlayer {
    fn select_action(&mut self, _view: &GameState, actions: &[Action]) -> Option<Action> {
        self.rng.choose(actions).copied()
    }
}
