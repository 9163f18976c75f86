//! Board topology and marble movement.
//!
//! Everything here is static lookup or pure arithmetic: the kennels, safe
//! spaces and start cells never change, and `calculate_destination` only
//! reads an occupancy snapshot.

pub mod movement;
pub mod occupancy;
pub mod topology;

pub use movement::calculate_destination;
pub use occupancy::Occupancy;
pub use topology::{
    is_kennel, is_safe_space, is_valid_position, kennel, safe_space, start, BOARD_SIZE,
    MARBLES_PER_PLAYER, TRACK_LEN,
};
