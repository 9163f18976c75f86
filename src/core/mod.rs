//! Core types: seats, RNG, configuration, actions and the state aggregate.

pub mod action;
pub mod config;
pub mod player;
pub mod rng;
pub mod state;

pub use action::Action;
pub use config::DogConfig;
pub use player::{PlayerId, PLAYER_COUNT};
pub use rng::{GameRng, GameRngState};
pub use state::{GamePhase, GameState, Marble, PlayerState};
