//! Dog: four seats race their marbles home, moved by cards.
//!
//! - Each seat owns four marbles that start in its kennel
//! - `A`, `K` or a joker brings a marble onto the start cell
//! - Other cards move marbles around the track; landing on an opponent
//!   sends it back to its kennel
//! - Marbles finish by entering their safe space with an exact count
//! - First seat with all four marbles in its safe space wins

mod game;
mod player;

pub use game::{Dog, DogBuilder};
pub use player::RandomPlayer;
