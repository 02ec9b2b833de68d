//! The tic-tac-toe engine.
//!
//! Single source of truth for board state. Presentation layers query and
//! mutate it exclusively through `make_move`, `state`, and `reset`.

use crate::action::{MoveError, MoveOutcome};
use crate::position::Position;
use crate::rules;
use crate::types::{GameState, GameStatus};
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
///
/// Owns one session's state. Created in the initial state (empty board,
/// X to move, game in progress); mutated only by [`Game::make_move`] and
/// [`Game::reset`]. Every operation completes synchronously - there is
/// nothing to await and nothing to lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state. Read-only; no side effects.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Makes a move at the given board index (0-8).
    ///
    /// Preconditions are checked, not assumed; a failed check is a no-op
    /// returning the rejection as a value:
    ///
    /// - [`MoveError::GameOver`] - the game already ended;
    /// - [`MoveError::OutOfRange`] - the index names no square;
    /// - [`MoveError::SquareOccupied`] - the square is already marked.
    ///
    /// On success the square is marked for the current player and the
    /// outcome is evaluated in fixed order: win scan over `Line::ALL`,
    /// then draw, otherwise the turn passes. The current player does not
    /// change when the move ends the game.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, index: usize) -> Result<MoveOutcome, MoveError> {
        if self.state.status().is_terminal() {
            return Err(MoveError::GameOver);
        }

        let Some(pos) = Position::from_index(index) else {
            return Err(MoveError::OutOfRange(index));
        };

        if !self.state.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.state.current_player();
        self.state.place(pos, player);

        if let Some((winner, line)) = rules::check_winner(self.state.board()) {
            self.state.set_status(GameStatus::Won { winner, line });
        } else if rules::is_full(self.state.board()) {
            self.state.set_status(GameStatus::Drawn);
        } else {
            self.state.switch_player();
        }

        #[cfg(debug_assertions)]
        self.verify_invariants();

        let outcome = MoveOutcome {
            position: pos,
            player,
            status: self.state.status(),
        };
        debug!(?outcome, "Move accepted");
        Ok(outcome)
    }

    /// Restores the initial state regardless of prior status.
    ///
    /// Always succeeds; no preconditions.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        self.state = GameState::new();
    }

    #[cfg(debug_assertions)]
    fn verify_invariants(&self) {
        use crate::invariants::{InvariantSet, NoughtsInvariants};

        if let Err(violations) = NoughtsInvariants::check_all(&self.state) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("invariant violated after accepted move: {descriptions}");
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
