//! Rules: move generation, action application, round lifecycle and views.
//!
//! Each submodule is a set of free functions over `GameState`; the `Dog`
//! engine in `games::dog` ties them together behind the `Game` trait.

pub mod apply;
pub mod engine;
pub mod lifecycle;
pub mod movegen;
pub mod view;

pub use apply::{apply_action, Capture};
pub use engine::{Game, Player};
pub use lifecycle::{advance_round, cards_per_round, deal, new_game, reshuffle};
pub use movegen::{is_legal, legal_actions, seven_splits, SevenSplit, SplitLeg};
pub use view::player_view;
