//! # dog-engine
//!
//! Rules engine for Dog, a four-player marble race played with a doubled
//! card deck (a Ludo variant).
//!
//! ## Design Principles
//!
//! 1. **One owned state**: a single `GameState` is the source of truth. The
//!    engine mutates it in place; callers get snapshots.
//!
//! 2. **Static topology**: kennels, safe spaces and start cells are constant
//!    tables. Movement is pure arithmetic over them.
//!
//! 3. **Seeded chance**: every shuffle and the opening seat come from one
//!    seeded `GameRng`, so a seed replays a game exactly.
//!
//! ## Modules
//!
//! - `core`: Seats, RNG, configuration, actions, state
//! - `cards`: Card values, the deck, rank semantics
//! - `board`: Topology and `calculate_destination`
//! - `rules`: Move generation, action application, rounds, player views
//! - `games`: The `Dog` engine and `RandomPlayer`
//!
//! ## Example
//!
//! ```
//! use dog_engine::{DogBuilder, Game, RandomPlayer};
//!
//! let mut game = DogBuilder::new().build(42).unwrap();
//! let mut player = RandomPlayer::new(7);
//!
//! for _ in 0..20 {
//!     game.play_turn(&mut player).unwrap();
//! }
//! game.validate_total_cards().unwrap();
//! assert!(game.get_list_action().is_ok());
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod error;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Action, DogConfig, GamePhase, GameRng, GameRngState, GameState, Marble, PlayerId, PlayerState,
    PLAYER_COUNT,
};

pub use crate::cards::{Card, Rank, Suit, TOTAL_DECK_SIZE};

pub use crate::board::{calculate_destination, Occupancy, BOARD_SIZE};

pub use crate::rules::{Capture, Game, Player, SevenSplit, SplitLeg};

pub use crate::games::dog::{Dog, DogBuilder, RandomPlayer};

pub use crate::error::{DogError, DogResult};
