//! Every one of the 8 winning lines is reachable through legal play and
//! is reported exactly.

use noughts_core::{Game, GameStatus, Line, Position};
use strum::IntoEnumIterator;

#[test]
fn test_each_line_wins_with_its_exact_triple() {
    for line in Line::iter() {
        let x_moves = line.positions();
        let o_moves: Vec<Position> = Position::ALL
            .iter()
            .copied()
            .filter(|pos| !line.contains(*pos))
            .take(2)
            .collect();

        let mut game = Game::new();
        // X fills the target line while O plays two filler squares
        // elsewhere; with at most two marks O can never finish first.
        game.make_move(x_moves[0].to_index()).expect("X move");
        game.make_move(o_moves[0].to_index()).expect("O move");
        game.make_move(x_moves[1].to_index()).expect("X move");
        game.make_move(o_moves[1].to_index()).expect("O move");

        assert_eq!(
            game.state().status(),
            GameStatus::InProgress,
            "{line} completed early",
        );

        let outcome = game.make_move(x_moves[2].to_index()).expect("winning move");

        assert_eq!(
            outcome.winning_line(),
            Some(line),
            "wrong line reported for {line}",
        );
        assert_eq!(
            outcome.status.winner().map(|p| p.to_string()).as_deref(),
            Some("X"),
        );
        assert_eq!(
            outcome.winning_line().map(Line::positions),
            Some(x_moves),
            "highlight triple mismatch for {line}",
        );
    }
}

#[test]
fn test_o_can_win_too() {
    // X plays corners, O takes the middle column.
    let mut game = Game::new();
    for index in [0, 1, 2, 4, 6, 7] {
        game.make_move(index).expect("legal move");
    }

    assert_eq!(
        game.state().status(),
        GameStatus::Won {
            winner: noughts_core::Player::O,
            line: Line::MiddleColumn,
        },
    );
}
