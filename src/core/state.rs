//! Game state: the single source of truth for a running game.
//!
//! ## GameState
//!
//! The root aggregate: phase, round bookkeeping, the four seats (hand and
//! marbles), and the shared draw and discard piles. The engine owns exactly
//! one live instance and mutates it in place.
//!
//! Piles use `im` persistent vectors so snapshots (`get_state`, player
//! views) clone in O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PLAYER_COUNT};
use crate::board::{self, Occupancy, MARBLES_PER_PLAYER};
use crate::cards::{full_deck, Card, TOTAL_DECK_SIZE};
use crate::error::{DogError, DogResult};

/// Coarse game progression.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    /// Before the first deal.
    Setup,
    /// Cards are being played.
    Running,
    /// A seat has brought all four marbles home.
    Finished,
}

/// A marble on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marble {
    /// Cell in `0..BOARD_SIZE`.
    pub position: u8,

    /// Cannot be captured and cannot be targeted by a swap.
    pub is_safe: bool,
}

impl Marble {
    #[must_use]
    pub const fn new(position: u8, is_safe: bool) -> Self {
        Self { position, is_safe }
    }
}

/// One seat: name, hand, and four marbles.
///
/// Marble slots are fixed; only their position and safety change.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    pub name: String,
    pub hand: Vec<Card>,
    pub marbles: Vec<Marble>,
}

impl PlayerState {
    /// A seat with an empty hand and every marble in its kennel.
    #[must_use]
    pub fn new(name: impl Into<String>, player: PlayerId) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            marbles: board::kennel(player)
                .iter()
                .map(|&pos| Marble::new(pos, true))
                .collect(),
        }
    }

    /// Slot index of the first marble at `position`.
    #[must_use]
    pub fn marble_at(&self, position: u8) -> Option<usize> {
        self.marbles.iter().position(|m| m.position == position)
    }

    /// Remove one copy of `card` from the hand.
    ///
    /// Returns true if the card was found and removed.
    pub fn remove_card(&mut self, card: Card) -> bool {
        if let Some(idx) = self.hand.iter().position(|&c| c == card) {
            self.hand.remove(idx);
            true
        } else {
            false
        }
    }
}

/// Full game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,

    /// Current round, starting at 1.
    pub round_count: u32,

    /// Whether the round's card exchange has happened.
    pub card_exchanged: bool,

    /// Seat that opened the current round.
    pub starting_player: PlayerId,

    /// Seat whose turn it is.
    pub active_player: PlayerId,

    pub players: Vec<PlayerState>,

    /// Face-down pile. Cards are drawn from the end.
    pub draw_pile: Vector<Card>,

    pub discard_pile: Vector<Card>,

    /// Card whose multi-step effect (7 or joker) is in progress.
    pub active_card: Option<Card>,
}

impl GameState {
    /// A fresh table: all marbles kenneled, empty hands, the unshuffled
    /// deck as draw pile. Seat 0 opens round 1.
    #[must_use]
    pub fn new(names: &[String; PLAYER_COUNT]) -> Self {
        Self {
            phase: GamePhase::Setup,
            round_count: 1,
            card_exchanged: false,
            starting_player: PlayerId::new(0),
            active_player: PlayerId::new(0),
            players: PlayerId::all()
                .map(|p| PlayerState::new(names[p.index()].clone(), p))
                .collect(),
            draw_pile: full_deck().into_iter().collect(),
            discard_pile: Vector::new(),
            active_card: None,
        }
    }

    // === Seats ===

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player.index()]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player.index()]
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn active(&self) -> &PlayerState {
        self.player(self.active_player)
    }

    /// Iterate over `(seat, marble slot, marble)` for every marble on the board.
    pub fn marbles(&self) -> impl Iterator<Item = (PlayerId, usize, &Marble)> {
        self.players.iter().zip(PlayerId::all()).flat_map(|(state, player)| {
            state
                .marbles
                .iter()
                .enumerate()
                .map(move |(slot, marble)| (player, slot, marble))
        })
    }

    /// Occupancy snapshot of the whole board.
    #[must_use]
    pub fn occupancy(&self) -> Occupancy {
        Occupancy::from_positions(self.marbles().map(|(_, _, m)| m.position))
    }

    // === Cards ===

    /// Cards held across all hands.
    #[must_use]
    pub fn cards_in_hands(&self) -> usize {
        self.players.iter().map(|p| p.hand.len()).sum()
    }

    /// Cards in draw pile, discard pile and hands together.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len() + self.cards_in_hands()
    }

    #[must_use]
    pub fn all_hands_empty(&self) -> bool {
        self.players.iter().all(|p| p.hand.is_empty())
    }

    // === Progress ===

    /// The first seat with all four marbles in its own safe space.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        PlayerId::all().find(|&p| {
            self.players.get(p.index()).is_some_and(|state| {
                state
                    .marbles
                    .iter()
                    .all(|m| board::is_safe_space(p, m.position))
            })
        })
    }

    // === Consistency ===

    /// Structural checks: four seats, four marbles each, every position on
    /// the board, seat indices in range.
    pub fn validate(&self) -> DogResult<()> {
        if self.players.len() != PLAYER_COUNT {
            return Err(DogError::MalformedState(format!(
                "expected {PLAYER_COUNT} players, found {}",
                self.players.len()
            )));
        }
        for (player, state) in PlayerId::all().zip(&self.players) {
            if state.marbles.len() != MARBLES_PER_PLAYER {
                return Err(DogError::MalformedState(format!(
                    "{player} has {} marbles",
                    state.marbles.len()
                )));
            }
            if let Some(m) = state.marbles.iter().find(|m| !board::is_valid_position(m.position)) {
                return Err(DogError::MalformedState(format!(
                    "{player} has a marble off the board at {}",
                    m.position
                )));
            }
        }
        for (label, seat) in [("active", self.active_player), ("starting", self.starting_player)] {
            if !seat.is_valid() {
                return Err(DogError::MalformedState(format!(
                    "{label} player index {} out of range",
                    seat.0
                )));
            }
        }
        Ok(())
    }

    /// Card conservation check: every card of the deck is somewhere.
    pub fn validate_total_cards(&self) -> DogResult<()> {
        let actual = self.total_cards();
        if actual != TOTAL_DECK_SIZE {
            return Err(DogError::CardCountMismatch {
                expected: TOTAL_DECK_SIZE,
                actual,
            });
        }
        Ok(())
    }
}
