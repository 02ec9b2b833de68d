//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use noughts_core::Position;

/// Moves the cursor one grid step, clamping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (mut row, mut col) = (cursor.row(), cursor.col());

    match key {
        KeyCode::Up => row = row.saturating_sub(1),
        KeyCode::Down => row = (row + 1).min(2),
        KeyCode::Left => col = col.saturating_sub(1),
        KeyCode::Right => col = (col + 1).min(2),
        _ => {}
    }

    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_grid() {
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Up),
            Position::TopCenter,
        );
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Left),
            Position::MiddleLeft,
        );
        assert_eq!(
            move_cursor(Position::TopLeft, KeyCode::Down),
            Position::MiddleLeft,
        );
        assert_eq!(
            move_cursor(Position::MiddleRight, KeyCode::Right),
            Position::MiddleRight,
        );
    }

    #[test]
    fn test_clamps_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Down),
            Position::BottomRight,
        );
    }

    #[test]
    fn test_other_keys_do_not_move() {
        assert_eq!(
            move_cursor(Position::Center, KeyCode::Char('x')),
            Position::Center,
        );
    }
}
