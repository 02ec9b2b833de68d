//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::types::{GameState, Player};

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... with X first. While the game is
/// in progress the current player is the opponent of the last mover; once
/// the game ends the current player stays on the mover that ended it.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let history = state.history();

        let Some(first) = history.first() else {
            // Fresh state: X to move, nothing decided yet.
            return state.current_player() == Player::X && !state.status().is_terminal();
        };

        if first.player != Player::X {
            return false;
        }

        for window in history.windows(2) {
            if window[0].player == window[1].player {
                return false;
            }
        }

        let last = history[history.len() - 1].player;
        if state.status().is_terminal() {
            state.current_player() == last
        } else {
            state.current_player() == last.opponent()
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
