//! Game and player traits.
//!
//! A host drives a game through `Game` and asks a `Player` for each move:
//!
//! ```text
//! view    = game.get_player_view(active)
//! actions = game.get_list_action()
//! choice  = player.select_action(&view, &actions)
//! game.apply_action(choice.as_ref())
//! ```

use crate::core::{Action, GameState, PlayerId};
use crate::error::DogResult;

/// Game lifecycle and turn interface.
///
/// ## Implementation Notes
///
/// - Every state-reading method fails with `StateNotInitialized` until
///   `initialize` or `set_state` has run.
/// - `apply_action(None)` is a pass.
/// - `apply_action` trusts its input; it does not consult `get_list_action`.
pub trait Game {
    /// Start a new game and return a snapshot of its state.
    fn initialize(&mut self) -> DogResult<GameState>;

    /// Snapshot of the complete, unmasked state.
    fn get_state(&self) -> DogResult<GameState>;

    /// Replace the live state. Fails if `state` is structurally invalid.
    fn set_state(&mut self, state: GameState) -> DogResult<()>;

    /// Throw the current game away and start a new one.
    fn reset(&mut self) -> DogResult<()>;

    /// Legal actions for the active seat.
    fn get_list_action(&self) -> DogResult<Vec<Action>>;

    /// Apply an action for the active seat, or pass with `None`.
    fn apply_action(&mut self, action: Option<&Action>) -> DogResult<()>;

    /// The state as seen from one seat.
    fn get_player_view(&self, player: PlayerId) -> DogResult<GameState>;
}

/// Move selection.
pub trait Player {
    /// Pick one of `actions`, or `None` to pass.
    fn select_action(&mut self, view: &GameState, actions: &[Action]) -> Option<Action>;
}
