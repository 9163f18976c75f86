//! The doubled Dog deck.

use super::card::{Card, Rank, Suit};

/// Jokers in one half of the deck.
pub const JOKERS_PER_HALF: usize = 3;

/// Cards in one half: 13 ranks in 4 suits plus the jokers.
pub const HALF_DECK_SIZE: usize = Suit::ALL.len() * Rank::SUITED.len() + JOKERS_PER_HALF;

/// Total cards in play. Draw pile, discard pile and all hands always add up to this.
pub const TOTAL_DECK_SIZE: usize = 2 * HALF_DECK_SIZE;

/// Build the full, unshuffled deck.
///
/// Ordered rank-major within each half (`2♠ 2♥ 2♦ 2♣ 3♠ ...`), jokers last,
/// the half repeated twice.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    let mut half = Vec::with_capacity(HALF_DECK_SIZE);
    for rank in Rank::SUITED {
        for suit in Suit::ALL {
            half.push(Card::new(suit, rank));
        }
    }
    half.extend(std::iter::repeat(Card::joker()).take(JOKERS_PER_HALF));

    let mut deck = half.clone();
    deck.extend(half);
    deck
}
