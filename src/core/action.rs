//! Action representation: one card moving one marble.
//!
//! A seven split across several marbles is played as several actions, one
//! per marble leg. Passing a turn is not an `Action`; it is the absence of
//! one (`None` at the `apply_action` boundary).

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// A single marble relocation driven by a played card.
///
/// ## Example
///
/// ```
/// use dog_engine::cards::{Card, Rank, Suit};
/// use dog_engine::core::Action;
///
/// // Bring a marble from the kennel onto the start cell with an ace
/// let start = Action::new(Card::new(Suit::Diamonds, Rank::Ace), 64, 0);
/// assert_eq!(start.pos_from, Some(64));
/// assert_eq!(start.pos_to, Some(0));
/// assert_eq!(start.card_swap, None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    /// The card played.
    pub card: Card,

    /// Cell of the moving marble.
    pub pos_from: Option<u8>,

    /// Cell the marble moves to.
    pub pos_to: Option<u8>,

    /// Card handed over in a jack trade. The move generator never fills it.
    #[serde(default)]
    pub card_swap: Option<Card>,
}

impl Action {
    /// Create a move action.
    #[must_use]
    pub const fn new(card: Card, pos_from: u8, pos_to: u8) -> Self {
        Self {
            card,
            pos_from: Some(pos_from),
            pos_to: Some(pos_to),
            card_swap: None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.card)?;
        match (self.pos_from, self.pos_to) {
            (Some(from), Some(to)) => write!(f, " {from} -> {to}")?,
            (from, to) => write!(f, " {from:?} -> {to:?}")?,
        }
        if let Some(swap) = self.card_swap {
            write!(f, " (swap {swap})")?;
        }
        Ok(())
    }
}
