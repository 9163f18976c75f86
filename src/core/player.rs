//! Seat identification.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier for the four seats at the table. Seats are
//! 0-based and play proceeds in ascending order (clockwise); round starts
//! rotate the other way.

use serde::{Deserialize, Serialize};

/// Number of seats at the table. The game is always played by four.
pub const PLAYER_COUNT: usize = 4;

/// Seat identifier.
///
/// Player indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check that this ID names one of the four seats.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.index() < PLAYER_COUNT
    }

    /// The seat that plays after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % PLAYER_COUNT as u8)
    }

    /// The seat that plays before this one (anticlockwise neighbour).
    #[must_use]
    pub const fn prev(self) -> Self {
        Self((self.0 + PLAYER_COUNT as u8 - 1) % PLAYER_COUNT as u8)
    }

    /// Iterate over all four seats in turn order.
    ///
    /// ```
    /// use dog_engine::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all().collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[0], PlayerId::new(0));
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all() -> impl Iterator<Item = PlayerId> {
        (0..PLAYER_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0 + 1)
    }
}
