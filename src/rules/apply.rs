//! Action application.
//!
//! Applies whatever it is given: the action is checked for internal
//! consistency (card in hand, marble at the source, destination on the board)
//! but not against the legal-action list. Callers that want that guarantee
//! go through `Dog::apply_verified_action`.
//!
//! All checks run before the first mutation, so a rejected action leaves the
//! state untouched.

use tracing::{debug, info, warn};

use crate::board;
use crate::core::{Action, GamePhase, GameState, PlayerId};
use crate::error::{DogError, DogResult};

/// An opponent marble sent home by a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capture {
    pub player: PlayerId,
    pub slot: usize,
    pub from: u8,
    pub to: u8,
}

/// Apply `action` for the active seat, or pass when `action` is `None`.
///
/// On a pass the whole hand goes to the discard pile. Either way the turn
/// moves to the next seat. Round advance is not handled here.
pub fn apply_action(state: &mut GameState, action: Option<&Action>) -> DogResult<Vec<Capture>> {
    if state.phase == GamePhase::Finished {
        return Err(DogError::GameFinished);
    }

    let player = state.active_player;
    let Some(action) = action else {
        pass(state, player);
        return Ok(Vec::new());
    };

    // === Validate ===

    let seat = state.player(player);
    if !seat.hand.contains(&action.card) {
        return Err(DogError::CardNotInHand {
            player,
            card: action.card,
        });
    }
    let slot = action
        .pos_from
        .and_then(|from| seat.marble_at(from))
        .ok_or(DogError::MarbleNotFound {
            player,
            position: action.pos_from,
        })?;
    let to = action
        .pos_to
        .filter(|&to| board::is_valid_position(to))
        .ok_or(DogError::IllegalAction)?;

    // === Play the card ===

    let seat = state.player_mut(player);
    seat.remove_card(action.card);
    state.discard_pile.push_back(action.card);

    // === Move ===

    let marble = &mut state.player_mut(player).marbles[slot];
    let from = marble.position;
    marble.position = to;
    marble.is_safe = if board::is_kennel(player, from) && to == board::start(player) {
        true
    } else {
        board::is_safe_space(player, to)
    };
    debug!(%player, card = %action.card, from, to, "marble moved");

    let captures = resolve_captures(state, player, to);

    state.active_player = player.next();

    if let Some(winner) = state.winner() {
        state.phase = GamePhase::Finished;
        info!(%winner, round = state.round_count, "game finished");
    }

    Ok(captures)
}

fn pass(state: &mut GameState, player: PlayerId) {
    let hand = std::mem::take(&mut state.player_mut(player).hand);
    warn!(%player, discarded = hand.len(), "no action, hand discarded");
    state.discard_pile.extend(hand);
    state.active_player = player.next();
}

/// Send every opponent marble on `cell` to the first free slot of its
/// owner's kennel.
fn resolve_captures(state: &mut GameState, mover: PlayerId, cell: u8) -> Vec<Capture> {
    let mut captures = Vec::new();

    for victim in PlayerId::all().filter(|&p| p != mover) {
        for slot in 0..state.player(victim).marbles.len() {
            if state.player(victim).marbles[slot].position != cell {
                continue;
            }

            let occupied = state.occupancy();
            let Some(&home) = board::kennel(victim)
                .iter()
                .find(|&&k| !occupied.is_occupied(k))
            else {
                warn!(%victim, cell, "no free kennel slot, marble stays");
                continue;
            };

            let marble = &mut state.player_mut(victim).marbles[slot];
            marble.position = home;
            marble.is_safe = false;
            debug!(%mover, %victim, from = cell, to = home, "marble captured");
            captures.push(Capture {
                player: victim,
                slot,
                from: cell,
                to: home,
            });
        }
    }

    captures
}
