//! Static board layout.
//!
//! Positions are small integers in `0..BOARD_SIZE`:
//!
//! ```text
//!   0..64   main track, seat p starts at 16 * p
//!  64..68   kennel of seat 0      68..72   safe space of seat 0
//!  72..76   kennel of seat 1      76..80   safe space of seat 1
//!  80..84   kennel of seat 2      84..88   safe space of seat 2
//!  88..92   kennel of seat 3      92..96   safe space of seat 3
//! ```
//!
//! Track arithmetic wraps modulo the full `BOARD_SIZE`, so the kennel and
//! safe-space ranges sit on the wrap path between cell 63 and cell 0.

use crate::core::player::{PlayerId, PLAYER_COUNT};

/// Total addressable cells (track, kennels and safe spaces).
pub const BOARD_SIZE: u8 = 96;

/// Cells on the main track proper.
pub const TRACK_LEN: u8 = 64;

/// Marbles each seat owns.
pub const MARBLES_PER_PLAYER: usize = 4;

const KENNELS: [[u8; MARBLES_PER_PLAYER]; PLAYER_COUNT] = [
    [64, 65, 66, 67],
    [72, 73, 74, 75],
    [80, 81, 82, 83],
    [88, 89, 90, 91],
];

const SAFE_SPACES: [[u8; MARBLES_PER_PLAYER]; PLAYER_COUNT] = [
    [68, 69, 70, 71],
    [76, 77, 78, 79],
    [84, 85, 86, 87],
    [92, 93, 94, 95],
];

const STARTS: [u8; PLAYER_COUNT] = [0, 16, 32, 48];

/// Kennel slots of a seat, in fill order.
#[must_use]
pub fn kennel(player: PlayerId) -> &'static [u8; MARBLES_PER_PLAYER] {
    &KENNELS[player.index()]
}

/// Safe-space slots of a seat, entry first, deepest last.
#[must_use]
pub fn safe_space(player: PlayerId) -> &'static [u8; MARBLES_PER_PLAYER] {
    &SAFE_SPACES[player.index()]
}

/// Track cell where a seat's marbles enter play.
#[must_use]
pub fn start(player: PlayerId) -> u8 {
    STARTS[player.index()]
}

#[must_use]
pub fn is_kennel(player: PlayerId, position: u8) -> bool {
    kennel(player).contains(&position)
}

#[must_use]
pub fn is_safe_space(player: PlayerId, position: u8) -> bool {
    safe_space(player).contains(&position)
}

#[must_use]
pub fn is_valid_position(position: u8) -> bool {
    position < BOARD_SIZE
}
