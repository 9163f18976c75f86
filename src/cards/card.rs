//! Card values: suit, rank and the card itself.
//!
//! Cards are plain values. Two `A♦` from the two halves of the doubled deck
//! are indistinguishable and compare equal.

use serde::{Deserialize, Serialize};

/// Card suit. Jokers carry no suit.
///
/// Serializes as the suit symbol (`"♠"`, `"♥"`, `"♦"`, `"♣"`); the joker's
/// missing suit serializes as the empty string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "♠")]
    Spades,
    #[serde(rename = "♥")]
    Hearts,
    #[serde(rename = "♦")]
    Diamonds,
    #[serde(rename = "♣")]
    Clubs,
    #[serde(rename = "")]
    Joker,
}

impl Suit {
    /// The four real suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Joker => "",
        }
    }
}

/// Card rank, `2` through `A` plus the joker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rank {
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3")]
    Three,
    #[serde(rename = "4")]
    Four,
    #[serde(rename = "5")]
    Five,
    #[serde(rename = "6")]
    Six,
    #[serde(rename = "7")]
    Seven,
    #[serde(rename = "8")]
    Eight,
    #[serde(rename = "9")]
    Nine,
    #[serde(rename = "10")]
    Ten,
    #[serde(rename = "J")]
    Jack,
    #[serde(rename = "Q")]
    Queen,
    #[serde(rename = "K")]
    King,
    #[serde(rename = "A")]
    Ace,
    #[serde(rename = "JKR")]
    Joker,
}

impl Rank {
    /// The thirteen suited ranks in deck order (jokers excluded).
    pub const SUITED: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
            Rank::Joker => "JKR",
        }
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
}

impl Card {
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// A joker (no suit).
    #[must_use]
    pub const fn joker() -> Self {
        Self::new(Suit::Joker, Rank::Joker)
    }

    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self.rank, Rank::Joker)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Suit::Diamonds, Rank::Ace).to_string(), "A♦");
        assert_eq!(Card::new(Suit::Clubs, Rank::Ten).to_string(), "10♣");
        assert_eq!(Card::joker().to_string(), "JKR");
    }

    #[test]
    fn test_card_equality_is_by_value() {
        let a = Card::new(Suit::Hearts, Rank::Seven);
        let b = Card::new(Suit::Hearts, Rank::Seven);
        assert_eq!(a, b);
        assert_ne!(a, Card::new(Suit::Spades, Rank::Seven));
    }

    #[test]
    fn test_card_serialization_uses_symbols() {
        let json = serde_json::to_string(&Card::new(Suit::Spades, Rank::Queen)).unwrap();
        assert_eq!(json, r#"{"suit":"♠","rank":"Q"}"#);

        let joker: Card = serde_json::from_str(r#"{"suit":"","rank":"JKR"}"#).unwrap();
        assert!(joker.is_joker());
        assert_eq!(joker, Card::joker());
    }
}
