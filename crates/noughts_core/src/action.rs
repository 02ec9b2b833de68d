//! First-class move types.
//!
//! Moves are domain events, not side effects. The engine records every
//! accepted move and reports each outcome as a value the caller can
//! inspect, serialize, or log.

use crate::line::Line;
use crate::position::Position;
use crate::types::{GameStatus, Player};
use serde::{Deserialize, Serialize};

/// A move: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Report for an accepted move: what was marked and where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The marked position.
    pub position: Position,
    /// The player whose mark was placed.
    pub player: Player,
    /// Game status after the move.
    pub status: GameStatus,
}

impl MoveOutcome {
    /// The line to highlight, populated only when the move won the game.
    pub fn winning_line(&self) -> Option<Line> {
        self.status.winning_line()
    }
}

/// A rejected move.
///
/// Rejections are ordinary, expected control-flow outcomes - invalid
/// input is normal traffic for the engine, never a fault. Every rejection
/// leaves the game state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a square (must be 0-8).
    #[display("Index {_0} is out of range (must be 0-8)")]
    OutOfRange(usize),

    /// The square at the position is already occupied.
    #[display("Square {_0} is already occupied")]
    SquareOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}
