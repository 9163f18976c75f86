//! Cards: values, the deck, and what each rank does.
//!
//! ## Key Types
//!
//! - `Card`: `{suit, rank}` value type
//! - `Rank::distances`: movement distances per rank
//! - `full_deck`: the doubled 110-card deck

pub mod card;
pub mod deck;
pub mod semantics;

pub use card::{Card, Rank, Suit};
pub use deck::{full_deck, TOTAL_DECK_SIZE};
pub use semantics::{Distances, SEVEN_BUDGET};
