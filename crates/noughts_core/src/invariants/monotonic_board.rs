//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::types::{Board, GameState, Square};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Once a square transitions from Empty to Occupied, it never changes
/// until a full reset. Verified by replaying the move history and
/// comparing against the live board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(state: &GameState) -> bool {
        let mut reconstructed = Board::new();

        for mov in state.history() {
            if reconstructed.get(mov.position) != Square::Empty {
                return false;
            }
            reconstructed.set(mov.position, Square::Occupied(mov.player));
        }

        reconstructed == *state.board()
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Game;
    use crate::types::Player;
    use crate::Position;

    #[test]
    fn test_new_game_holds() {
        let game = Game::new();
        assert!(MonotonicBoardInvariant::holds(game.state()));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let mut game = Game::new();
        for index in [0, 4, 2, 6] {
            game.make_move(index).expect("legal move");
        }
        assert!(MonotonicBoardInvariant::holds(game.state()));
    }

    #[test]
    fn test_corrupted_board_violates() {
        let mut game = Game::new();
        game.make_move(4).expect("legal move");

        // Overwrite the occupied center square behind the engine's back.
        let mut state = game.state().clone();
        state
            .board_mut()
            .set(Position::Center, Square::Occupied(Player::O));

        assert!(!MonotonicBoardInvariant::holds(&state));
    }
}
