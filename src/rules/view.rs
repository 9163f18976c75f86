//! Per-seat projection of the game state.
//!
//! Marbles are public. Hands are not: a seat sees its own cards and nothing
//! of anyone else's.

use crate::core::{GameState, PlayerId};

/// The state as `viewer` is allowed to see it.
///
/// Every other seat's hand is emptied; everything else is copied as is.
#[must_use]
pub fn player_view(state: &GameState, viewer: PlayerId) -> GameState {
    let mut view = state.clone();
    for (player, seat) in PlayerId::all().zip(view.players.iter_mut()) {
        if player != viewer {
            seat.hand.clear();
        }
    }
    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DogConfig, GameRng};
    use crate::rules::lifecycle::new_game;

    #[test]
    fn test_view_hides_other_hands() {
        let state = new_game(&DogConfig::new(11), &mut GameRng::new(11)).unwrap();
        let viewer = PlayerId::new(2);

        let view = player_view(&state, viewer);

        assert_eq!(view.player(viewer), state.player(viewer));
        for player in PlayerId::all().filter(|&p| p != viewer) {
            assert!(view.player(player).hand.is_empty());
            assert_eq!(view.player(player).marbles, state.player(player).marbles);
            assert_eq!(view.player(player).name, state.player(player).name);
        }
    }

    #[test]
    fn test_view_copies_shared_fields() {
        let state = new_game(&DogConfig::new(11), &mut GameRng::new(11)).unwrap();
        let view = player_view(&state, PlayerId::new(0));

        assert_eq!(view.phase, state.phase);
        assert_eq!(view.round_count, state.round_count);
        assert_eq!(view.active_player, state.active_player);
        assert_eq!(view.starting_player, state.starting_player);
        assert_eq!(view.draw_pile, state.draw_pile);
        assert_eq!(view.discard_pile, state.discard_pile);
    }

    #[test]
    fn test_view_leaves_state_untouched() {
        let state = new_game(&DogConfig::new(11), &mut GameRng::new(11)).unwrap();
        let before = state.clone();
        let _ = player_view(&state, PlayerId::new(1));
        assert_eq!(state, before);
    }
}
