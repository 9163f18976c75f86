//! Seeded randomness for the table.
//!
//! Chance enters a game in two places: shuffling a pile and drawing the
//! opening seat. Both come from one ChaCha8 stream, so a seed replays a game
//! card for card. Player collaborators get their own streams split off the
//! table's, which keeps their choices from disturbing the deck order of a
//! replay that uses different players.
//!
//! ```
//! use dog_engine::core::GameRng;
//!
//! let mut table = GameRng::new(42);
//! let mut again = GameRng::new(42);
//! assert_eq!(table.seat(), again.seat());
//! ```

use im::Vector;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PLAYER_COUNT};

/// Deterministic random source backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Split off an independent stream.
    ///
    /// The child's seed is drawn from this stream, so the same sequence of
    /// forks always yields the same children.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self::new(self.inner.gen())
    }

    /// A uniformly drawn seat.
    pub fn seat(&mut self) -> PlayerId {
        PlayerId::new(self.inner.gen_range(0..PLAYER_COUNT as u8))
    }

    /// Shuffle a pile in place.
    pub fn shuffle_pile<T: Clone>(&mut self, pile: &mut Vector<T>) {
        let mut cards: Vec<T> = pile.iter().cloned().collect();
        cards.shuffle(&mut self.inner);
        *pile = cards.into_iter().collect();
    }

    /// Pick one element uniformly, `None` for an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Position in the stream, for checkpoints.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Resume a stream exactly where `state` left it.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable stream position.
///
/// ChaCha8 can seek, so restoring costs the same however far the stream ran.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// Word offset into the ChaCha8 keystream.
    pub word_pos: u128,
}
