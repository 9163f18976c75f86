//! Engine errors.
//!
//! Every error is terminal for the call that raised it: nothing is retried
//! internally and the caller decides what to do next.

use thiserror::Error;

use crate::cards::Card;
use crate::core::PlayerId;

/// Result alias used throughout the engine.
pub type DogResult<T> = Result<T, DogError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DogError {
    /// A state-reading operation ran before `initialize` or `set_state`.
    #[error("game state is not set")]
    StateNotInitialized,

    /// `set_state` was handed a structurally invalid state.
    #[error("malformed state: {0}")]
    MalformedState(String),

    #[error("no marble of {player} at position {position:?}")]
    MarbleNotFound {
        player: PlayerId,
        position: Option<u8>,
    },

    #[error("{player} does not hold {card}")]
    CardNotInHand { player: PlayerId, card: Card },

    /// Reshuffle requested while the discard pile is empty too.
    #[error("cannot reshuffle: discard pile is empty")]
    DeckExhausted,

    /// Cards were created or lost somewhere. Always a logic error.
    #[error("total cards mismatch: {actual} != {expected}")]
    CardCountMismatch { expected: usize, actual: usize },

    #[error("action is not legal in the current state")]
    IllegalAction,

    #[error("game is already finished")]
    GameFinished,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_error_messages() {
        assert_eq!(DogError::StateNotInitialized.to_string(), "game state is not set");
        assert_eq!(
            DogError::CardCountMismatch { expected: 110, actual: 109 }.to_string(),
            "total cards mismatch: 109 != 110"
        );
        assert_eq!(
            DogError::MarbleNotFound { player: PlayerId::new(1), position: Some(12) }.to_string(),
            "no marble of Player 2 at position Some(12)"
        );
        assert_eq!(
            DogError::CardNotInHand {
                player: PlayerId::new(0),
                card: Card::new(Suit::Diamonds, Rank::Ace),
            }
            .to_string(),
            "Player 1 does not hold A♦"
        );
    }
}
