//! The Dog engine instance.

use tracing::debug;

use crate::board::BOARD_SIZE;
use crate::core::{
    Action, DogConfig, GamePhase, GameRng, GameRngState, GameState, PlayerId, PLAYER_COUNT,
};
use crate::error::{DogError, DogResult};
use crate::rules::{apply, lifecycle, movegen, view, Game, Player, SevenSplit};

/// Owns the live game state and the random source behind it.
///
/// Created uninitialized by `Dog::new`; `DogBuilder::build` returns one with
/// a game already dealt.
#[derive(Clone, Debug)]
pub struct Dog {
    config: DogConfig,
    rng: GameRng,
    state: Option<GameState>,
}

/// Builder for creating a `Dog` game.
#[derive(Clone, Debug, Default)]
pub struct DogBuilder {
    player_names: Option<[String; PLAYER_COUNT]>,
}

impl DogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_names(mut self, names: [String; PLAYER_COUNT]) -> Self {
        self.player_names = Some(names);
        self
    }

    /// Build the engine and deal the first round.
    pub fn build(self, seed: u64) -> DogResult<Dog> {
        let mut config = DogConfig::new(seed);
        if let Some(names) = self.player_names {
            config = config.with_names(names);
        }

        let mut game = Dog::new(config);
        game.initialize()?;
        Ok(game)
    }
}

impl Dog {
    /// An engine with no game yet. Call `initialize` or `set_state` next.
    #[must_use]
    pub fn new(config: DogConfig) -> Self {
        Self {
            rng: GameRng::new(config.seed),
            config,
            state: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &DogConfig {
        &self.config
    }

    /// Borrow the live state.
    pub fn state(&self) -> DogResult<&GameState> {
        self.state.as_ref().ok_or(DogError::StateNotInitialized)
    }

    /// An independent random stream, e.g. for a `RandomPlayer`.
    pub fn fork_rng(&mut self) -> GameRng {
        self.rng.fork()
    }

    // === Deck & rounds ===

    pub fn reshuffle_discard_into_draw(&mut self) -> DogResult<()> {
        let state = self.state.as_mut().ok_or(DogError::StateNotInitialized)?;
        lifecycle::reshuffle(state, &mut self.rng)
    }

    pub fn deal_cards(&mut self) -> DogResult<()> {
        let state = self.state.as_mut().ok_or(DogError::StateNotInitialized)?;
        lifecycle::deal(state, &mut self.rng)
    }

    pub fn next_round(&mut self) -> DogResult<()> {
        let state = self.state.as_mut().ok_or(DogError::StateNotInitialized)?;
        lifecycle::advance_round(state, &mut self.rng)
    }

    pub fn validate_total_cards(&self) -> DogResult<()> {
        self.state()?.validate_total_cards()
    }

    // === Queries ===

    /// Seven splits available to the active seat.
    pub fn seven_splits(&self) -> DogResult<Vec<SevenSplit>> {
        let state = self.state()?;
        Ok(movegen::seven_splits(state, state.active_player))
    }

    pub fn winner(&self) -> DogResult<Option<PlayerId>> {
        let state = self.state()?;
        Ok(match state.phase {
            GamePhase::Finished => state.winner(),
            _ => None,
        })
    }

    /// Owner of the marble on each cell, indexed by position.
    pub fn board_cells(&self) -> DogResult<Vec<Option<PlayerId>>> {
        let mut cells = vec![None; BOARD_SIZE as usize];
        for (player, _, marble) in self.state()?.marbles() {
            if let Some(cell) = cells.get_mut(marble.position as usize) {
                *cell = Some(player);
            }
        }
        Ok(cells)
    }

    // === Checkpoints ===

    /// Capture the state together with the random stream.
    pub fn checkpoint(&self) -> DogResult<(GameState, GameRngState)> {
        Ok((self.state()?.clone(), self.rng.state()))
    }

    /// Resume from a checkpoint. The same actions then replay identically.
    pub fn restore(&mut self, state: GameState, rng: &GameRngState) -> DogResult<()> {
        self.set_state(state)?;
        self.rng = GameRng::from_state(rng);
        Ok(())
    }

    // === Turns ===

    /// Apply an action only if the generator would have offered it.
    ///
    /// Passing is only accepted when nothing else is legal.
    pub fn apply_verified_action(&mut self, action: Option<&Action>) -> DogResult<()> {
        let legal = self.get_list_action()?;
        let allowed = match action {
            Some(action) => legal.contains(action),
            None => legal.is_empty(),
        };
        if !allowed {
            return Err(DogError::IllegalAction);
        }
        self.apply_action(action)
    }

    /// One turn: show the active seat its view and actions, apply its choice.
    pub fn play_turn(&mut self, player: &mut dyn Player) -> DogResult<Option<Action>> {
        let state = self.state()?;
        let view = view::player_view(state, state.active_player);
        let actions = movegen::legal_actions(state);

        let choice = player.select_action(&view, &actions);
        self.apply_action(choice.as_ref())?;
        Ok(choice)
    }

    /// Play turns until someone wins or `max_rounds` rounds are complete.
    ///
    /// Returns the winner, if any.
    pub fn run(
        &mut self,
        players: &mut [Box<dyn Player>; PLAYER_COUNT],
        max_rounds: u32,
    ) -> DogResult<Option<PlayerId>> {
        loop {
            let state = self.state()?;
            if state.phase == GamePhase::Finished || state.round_count > max_rounds {
                break;
            }
            let seat = state.active_player;
            self.play_turn(players[seat.index()].as_mut())?;
        }
        self.winner()
    }
}

impl Game for Dog {
    fn initialize(&mut self) -> DogResult<GameState> {
        let state = lifecycle::new_game(&self.config, &mut self.rng)?;
        self.state = Some(state.clone());
        Ok(state)
    }

    fn get_state(&self) -> DogResult<GameState> {
        self.state().cloned()
    }

    fn set_state(&mut self, state: GameState) -> DogResult<()> {
        state.validate()?;
        self.state = Some(state);
        Ok(())
    }

    fn reset(&mut self) -> DogResult<()> {
        self.initialize().map(|_| ())
    }

    fn get_list_action(&self) -> DogResult<Vec<Action>> {
        Ok(movegen::legal_actions(self.state()?))
    }

    fn apply_action(&mut self, action: Option<&Action>) -> DogResult<()> {
        // Work on copies so a failed round advance leaves the game as it was.
        let mut state = self.state()?.clone();
        let mut rng = self.rng.clone();

        let captures = apply::apply_action(&mut state, action)?;
        if !captures.is_empty() {
            debug!(count = captures.len(), "captures resolved");
        }

        if state.phase == GamePhase::Running && state.all_hands_empty() {
            lifecycle::advance_round(&mut state, &mut rng)?;
        }

        self.state = Some(state);
        self.rng = rng;
        Ok(())
    }

    fn get_player_view(&self, player: PlayerId) -> DogResult<GameState> {
        Ok(view::player_view(self.state()?, player))
    }
}
