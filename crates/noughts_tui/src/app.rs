//! Application state and logic.

use crossterm::event::KeyCode;
use noughts_core::{Game, GameStatus, Player, Position};
use tracing::debug;

use crate::input;

/// Main application state: one engine per session, plus the cursor and
/// the status line.
pub struct App {
    game: Game,
    cursor: Position,
    status_message: String,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            cursor: Position::Center,
            status_message: turn_message(Player::X),
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Attempts a move at the given board index.
    ///
    /// Rejected moves are ignored without touching the status line - a
    /// selection that does nothing is the expected response to clicking
    /// an occupied square or a finished board.
    pub fn select(&mut self, index: usize) {
        match self.game.make_move(index) {
            Ok(outcome) => {
                self.status_message = match outcome.status {
                    GameStatus::InProgress => turn_message(self.game.state().current_player()),
                    GameStatus::Won { winner, .. } => format!("Player {winner} has won!"),
                    GameStatus::Drawn => "Game ended in a draw!".to_string(),
                };
            }
            Err(rejection) => {
                debug!(%rejection, index, "Move ignored");
            }
        }
    }

    /// Attempts a move at the cursor.
    pub fn mark_at_cursor(&mut self) {
        self.select(self.cursor.to_index());
    }

    /// Moves the cursor with an arrow key.
    pub fn move_cursor(&mut self, key: KeyCode) {
        self.cursor = input::move_cursor(self.cursor, key);
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.status_message = turn_message(Player::X);
    }
}

fn turn_message(player: Player) -> String {
    format!("Player {player}'s Turn")
}
