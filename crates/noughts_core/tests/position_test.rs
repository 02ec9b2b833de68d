//! Tests for the board position enum.

use noughts_core::{Game, Position};
use strum::IntoEnumIterator;

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_index_round_trip() {
    for pos in Position::iter() {
        assert_eq!(Position::from_index(pos.to_index()), Some(pos));
    }
}

#[test]
fn test_row_col() {
    assert_eq!((Position::TopLeft.row(), Position::TopLeft.col()), (0, 0));
    assert_eq!((Position::Center.row(), Position::Center.col()), (1, 1));
    assert_eq!(
        (Position::BottomCenter.row(), Position::BottomCenter.col()),
        (2, 1),
    );

    for pos in Position::iter() {
        assert_eq!(Position::from_row_col(pos.row(), pos.col()), Some(pos));
    }
    assert_eq!(Position::from_row_col(3, 0), None);
    assert_eq!(Position::from_row_col(0, 3), None);
}

#[test]
fn test_valid_moves_empty_board() {
    let game = Game::new();
    let valid = Position::valid_moves(game.state().board());
    assert_eq!(valid.len(), 9);
}

#[test]
fn test_valid_moves_filters_occupied() {
    let mut game = Game::new();
    game.make_move(0).expect("legal move");
    game.make_move(4).expect("legal move");

    let valid = Position::valid_moves(game.state().board());
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}
