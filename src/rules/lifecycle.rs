//! Round and deck lifecycle: setup, dealing, reshuffling, round rotation.
//!
//! Hand sizes follow a fixed cycle of 6, 5, 4, 3, 2 cards per round. A new
//! round opens once every hand is empty; the opening seat moves one place
//! anticlockwise each round.

use tracing::{debug, info};

use crate::core::{DogConfig, GamePhase, GameRng, GameState, PlayerId, PLAYER_COUNT};
use crate::error::{DogError, DogResult};

/// Cards dealt to each seat in `round` (1-based).
#[must_use]
pub fn cards_per_round(round: u32) -> usize {
    6 - (i64::from(round) - 1).rem_euclid(5) as usize
}

/// A freshly shuffled, dealt game for round 1 with a random opening seat.
pub fn new_game(config: &DogConfig, rng: &mut GameRng) -> DogResult<GameState> {
    let mut state = GameState::new(&config.player_names);

    rng.shuffle_pile(&mut state.draw_pile);

    let starting = rng.seat();
    state.starting_player = starting;
    state.active_player = starting;
    state.phase = GamePhase::Running;

    deal(&mut state, rng)?;
    info!(%starting, seed = config.seed, "game initialized");
    Ok(state)
}

/// Put the discard pile back under the draw pile and shuffle.
///
/// Fails with `DeckExhausted` when there is nothing to reshuffle.
pub fn reshuffle(state: &mut GameState, rng: &mut GameRng) -> DogResult<()> {
    if state.discard_pile.is_empty() {
        return Err(DogError::DeckExhausted);
    }

    let discarded = std::mem::take(&mut state.discard_pile);
    state.draw_pile.append(discarded);
    rng.shuffle_pile(&mut state.draw_pile);

    debug!(draw = state.draw_pile.len(), "discard pile reshuffled into draw pile");
    Ok(())
}

/// Deal the current round's hands, one card per seat per pass.
///
/// Fails with `DeckExhausted`, before touching anything, when draw and
/// discard pile together cannot cover the deal.
pub fn deal(state: &mut GameState, rng: &mut GameRng) -> DogResult<()> {
    let per_seat = cards_per_round(state.round_count);
    let needed = per_seat * PLAYER_COUNT;

    if state.draw_pile.len() + state.discard_pile.len() < needed {
        return Err(DogError::DeckExhausted);
    }

    while state.draw_pile.len() < needed {
        reshuffle(state, rng)?;
    }

    for _ in 0..per_seat {
        for player in PlayerId::all() {
            if state.draw_pile.is_empty() {
                reshuffle(state, rng)?;
            }
            let card = state.draw_pile.pop_back().ok_or(DogError::DeckExhausted)?;
            state.player_mut(player).hand.push(card);
        }
    }

    debug!(
        round = state.round_count,
        per_seat,
        draw = state.draw_pile.len(),
        "cards dealt"
    );
    Ok(())
}

/// Open the next round: bump the counter, rotate the opening seat
/// anticlockwise, and deal fresh hands.
///
/// Any cards still in hand are discarded first so the deck stays whole.
/// Fails with `DeckExhausted` and leaves the state alone when the table
/// holds too few cards for the next deal.
pub fn advance_round(state: &mut GameState, rng: &mut GameRng) -> DogResult<()> {
    let needed = cards_per_round(state.round_count + 1) * PLAYER_COUNT;
    if state.total_cards() < needed {
        return Err(DogError::DeckExhausted);
    }

    state.round_count += 1;
    state.starting_player = state.starting_player.prev();
    state.card_exchanged = false;

    for player in PlayerId::all() {
        let hand = std::mem::take(&mut state.player_mut(player).hand);
        state.discard_pile.extend(hand);
    }

    deal(state, rng)?;
    info!(
        round = state.round_count,
        starting = %state.starting_player,
        "round started"
    );
    Ok(())
}
