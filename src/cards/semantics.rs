//! What each rank lets a player do.
//!
//! | Rank             | Effect                                      |
//! |------------------|---------------------------------------------|
//! | 2, 3, 5, 6, 8-10 | move forward by face value                  |
//! | 4                | move 4 forward or 4 backward                |
//! | 7                | split 7 single steps across own marbles     |
//! | J                | swap an own marble with an opponent's       |
//! | Q                | move 12                                     |
//! | K                | start, or move 13                           |
//! | A                | start, or move 1 or 11                      |
//! | JKR              | any of the above                            |

use smallvec::SmallVec;

use super::card::Rank;

/// Movement distances a single card can offer.
pub type Distances = SmallVec<[i8; 14]>;

/// Steps a seven (or a joker played as one) splits across marbles.
pub const SEVEN_BUDGET: u8 = 7;

/// Everything a joker can stand in for as a direct move.
const JOKER_DISTANCES: [i8; 14] = [-4, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13];

impl Rank {
    /// Distances this rank can move a single marble directly.
    ///
    /// Sevens and jacks have no direct distances: sevens only move through
    /// the split procedure and jacks only swap.
    #[must_use]
    pub fn distances(self) -> Distances {
        match self {
            Rank::Two => SmallVec::from_slice(&[2]),
            Rank::Three => SmallVec::from_slice(&[3]),
            Rank::Four => SmallVec::from_slice(&[4, -4]),
            Rank::Five => SmallVec::from_slice(&[5]),
            Rank::Six => SmallVec::from_slice(&[6]),
            Rank::Eight => SmallVec::from_slice(&[8]),
            Rank::Nine => SmallVec::from_slice(&[9]),
            Rank::Ten => SmallVec::from_slice(&[10]),
            Rank::Queen => SmallVec::from_slice(&[12]),
            Rank::King => SmallVec::from_slice(&[13]),
            Rank::Ace => SmallVec::from_slice(&[1, 11]),
            Rank::Joker => SmallVec::from_slice(&JOKER_DISTANCES),
            Rank::Seven | Rank::Jack => SmallVec::new(),
        }
    }

    /// Can this rank bring a marble out of the kennel?
    #[must_use]
    pub const fn can_start(self) -> bool {
        matches!(self, Rank::Ace | Rank::King | Rank::Joker)
    }

    /// Does this rank allow a seven-split?
    #[must_use]
    pub const fn splits_seven(self) -> bool {
        matches!(self, Rank::Seven | Rank::Joker)
    }

    /// Does this rank allow a marble swap?
    #[must_use]
    pub const fn swaps(self) -> bool {
        matches!(self, Rank::Jack | Rank::Joker)
    }
}
