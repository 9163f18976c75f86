//! Legal move generation for the active seat.
//!
//! For every card in hand the generator considers, in order:
//!
//! 1. **Start**: `A`, `K` or joker brings the first kenneled marble onto the
//!    start cell, provided no own marble already sits there.
//! 2. **Seven split**: `7` or joker distributes seven single steps across the
//!    marbles in play. Each completed distribution contributes one action per
//!    marble leg.
//! 3. **Swap**: `J` or joker exchanges an own unprotected marble with an
//!    opponent marble that is on the open track and not protected.
//! 4. **Direct**: every distance the rank offers, for every marble in play.
//!
//! Identical actions (e.g. from two copies of the same card) are reported once.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{self, calculate_destination, Occupancy};
use crate::cards::{Card, SEVEN_BUDGET};
use crate::core::{Action, GamePhase, GameState, PlayerId};

/// One marble's share of a seven split.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SplitLeg {
    /// Marble slot within the seat.
    pub slot: usize,
    /// Steps assigned to this marble (at least 1).
    pub steps: u8,
    pub from: u8,
    pub to: u8,
}

/// A complete distribution of the seven steps.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SevenSplit {
    /// Legs in marble slot order, one per marble that moves.
    pub legs: SmallVec<[SplitLeg; 4]>,
}

impl SevenSplit {
    /// Sum of steps over all legs. Always `SEVEN_BUDGET` for generated splits.
    #[must_use]
    pub fn total_steps(&self) -> u8 {
        self.legs.iter().map(|leg| leg.steps).sum()
    }
}

/// Every distinct way to split seven steps across `player`'s marbles in play.
///
/// Each leg is checked on its own against the current board; legs do not see
/// each other's movement. Marbles in the kennel take no part. Returns an empty
/// list when no marble is in play.
#[must_use]
pub fn seven_splits(state: &GameState, player: PlayerId) -> Vec<SevenSplit> {
    let candidates: SmallVec<[(usize, u8); 4]> = state
        .player(player)
        .marbles
        .iter()
        .enumerate()
        .filter(|(_, m)| !board::is_kennel(player, m.position))
        .map(|(slot, m)| (slot, m.position))
        .collect();

    if candidates.is_empty() {
        return Vec::new();
    }

    let occupied = state.occupancy();
    let mut search = SplitSearch {
        player,
        occupied: &occupied,
        alloc: SmallVec::from_elem(0, candidates.len()),
        candidates: &candidates,
        found: Vec::new(),
    };
    search.extend(0, SEVEN_BUDGET);
    search.found
}

/// Backtracking over step allocations.
///
/// Steps are handed out one at a time. Allocation only ever continues at the
/// current candidate or a later one, so each distribution is reached exactly
/// once. A branch is cut as soon as the candidate that just received a step
/// can no longer move that far.
struct SplitSearch<'a> {
    player: PlayerId,
    occupied: &'a Occupancy,
    candidates: &'a [(usize, u8)],
    alloc: SmallVec<[u8; 4]>,
    found: Vec<SevenSplit>,
}

impl SplitSearch<'_> {
    fn extend(&mut self, first: usize, remaining: u8) {
        if remaining == 0 {
            self.record();
            return;
        }

        for i in first..self.candidates.len() {
            self.alloc[i] += 1;
            if self.destination(i).is_some() {
                self.extend(i, remaining - 1);
            }
            self.alloc[i] -= 1;
        }
    }

    fn destination(&self, i: usize) -> Option<u8> {
        let (_, pos) = self.candidates[i];
        calculate_destination(pos, self.alloc[i] as i8, self.player, self.occupied)
    }

    fn record(&mut self) {
        let legs = (0..self.candidates.len())
            .filter(|&i| self.alloc[i] > 0)
            .filter_map(|i| {
                let (slot, from) = self.candidates[i];
                self.destination(i).map(|to| SplitLeg {
                    slot,
                    steps: self.alloc[i],
                    from,
                    to,
                })
            })
            .collect();
        self.found.push(SevenSplit { legs });
    }
}

/// All legal actions for the active seat, in generation order.
///
/// Empty once the game is finished, for an empty hand, or when no card in
/// hand can do anything.
#[must_use]
pub fn legal_actions(state: &GameState) -> Vec<Action> {
    if state.phase == GamePhase::Finished {
        return Vec::new();
    }

    let player = state.active_player;
    let seat = state.active();
    let occupied = state.occupancy();

    let start = board::start(player);
    let first_kenneled = seat
        .marbles
        .iter()
        .find(|m| board::is_kennel(player, m.position));
    let start_free = !seat.marbles.iter().any(|m| m.position == start);

    let splits = if seat.hand.iter().any(|c| c.rank.splits_seven()) {
        seven_splits(state, player)
    } else {
        Vec::new()
    };
    let swaps = if seat.hand.iter().any(|c| c.rank.swaps()) {
        swap_pairs(state, player)
    } else {
        Vec::new()
    };

    let mut actions = Vec::new();
    let mut seen = FxHashSet::default();
    let mut push = |action: Action| {
        if seen.insert(action) {
            actions.push(action);
        }
    };

    for &card in &seat.hand {
        if card.rank.can_start() && start_free {
            if let Some(marble) = first_kenneled {
                push(Action::new(card, marble.position, start));
            }
        }

        if card.rank.splits_seven() {
            for leg in splits.iter().flat_map(|split| split.legs.iter()) {
                push(Action::new(card, leg.from, leg.to));
            }
        }

        if card.rank.swaps() {
            for &(from, to) in &swaps {
                push(Action::new(card, from, to));
            }
        }

        for action in direct_moves(state, player, card, &occupied) {
            push(action);
        }
    }

    actions
}

/// Whether `action` is among the active seat's legal actions.
#[must_use]
pub fn is_legal(state: &GameState, action: &Action) -> bool {
    legal_actions(state).contains(action)
}

/// `(own cell, opponent cell)` pairs eligible for a swap.
fn swap_pairs(state: &GameState, player: PlayerId) -> Vec<(u8, u8)> {
    let targets: Vec<u8> = state
        .marbles()
        .filter(|&(owner, _, m)| {
            owner != player
                && !m.is_safe
                && !board::is_safe_space(owner, m.position)
                && !board::is_kennel(owner, m.position)
                && m.position != board::start(owner)
        })
        .map(|(_, _, m)| m.position)
        .collect();

    state
        .player(player)
        .marbles
        .iter()
        .filter(|m| !m.is_safe && !board::is_kennel(player, m.position))
        .flat_map(|m| targets.iter().map(move |&to| (m.position, to)))
        .collect()
}

fn direct_moves<'a>(
    state: &'a GameState,
    player: PlayerId,
    card: Card,
    occupied: &'a Occupancy,
) -> impl Iterator<Item = Action> + 'a {
    let distances = card.rank.distances();
    state
        .player(player)
        .marbles
        .iter()
        .filter(move |m| !board::is_kennel(player, m.position))
        .flat_map(move |m| {
            distances.clone().into_iter().filter_map(move |d| {
                calculate_destination(m.position, d, player, occupied)
                    .map(|to| Action::new(card, m.position, to))
            })
        })
}
