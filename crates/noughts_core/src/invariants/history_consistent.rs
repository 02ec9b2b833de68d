//! History consistency invariant: the board and the move log agree.

use super::Invariant;
use crate::types::{GameState, Square};

/// Invariant: History matches the board.
///
/// The number of occupied squares equals the history length, and every
/// recorded move's square holds that player's mark.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let filled = state
            .board()
            .squares()
            .iter()
            .filter(|s| !matches!(s, Square::Empty))
            .count();

        if filled != state.history().len() {
            return false;
        }

        state
            .history()
            .iter()
            .all(|mov| state.board().get(mov.position) == Square::Occupied(mov.player))
    }

    fn description() -> &'static str {
        "Move history is consistent with the board"
    }
}
