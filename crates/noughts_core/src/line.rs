//! The eight winning lines of the 3x3 grid.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A line whose uniform marking ends the game in a win.
///
/// `Line::ALL` fixes the enumeration order used everywhere a line scan
/// happens: rows top-to-bottom, columns left-to-right, then the two
/// diagonals. When a move completes more than one line at once, the first
/// match in this order is reported.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Line {
    /// Cells 0, 1, 2.
    TopRow,
    /// Cells 3, 4, 5.
    MiddleRow,
    /// Cells 6, 7, 8.
    BottomRow,
    /// Cells 0, 3, 6.
    LeftColumn,
    /// Cells 1, 4, 7.
    MiddleColumn,
    /// Cells 2, 5, 8.
    RightColumn,
    /// Cells 0, 4, 8.
    Diagonal,
    /// Cells 2, 4, 6.
    AntiDiagonal,
}

impl Line {
    /// All 8 lines in scan order.
    pub const ALL: [Line; 8] = [
        Line::TopRow,
        Line::MiddleRow,
        Line::BottomRow,
        Line::LeftColumn,
        Line::MiddleColumn,
        Line::RightColumn,
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// The three positions spanned by this line, in order.
    pub fn positions(self) -> [Position; 3] {
        use Position::*;
        match self {
            Line::TopRow => [TopLeft, TopCenter, TopRight],
            Line::MiddleRow => [MiddleLeft, Center, MiddleRight],
            Line::BottomRow => [BottomLeft, BottomCenter, BottomRight],
            Line::LeftColumn => [TopLeft, MiddleLeft, BottomLeft],
            Line::MiddleColumn => [TopCenter, Center, BottomCenter],
            Line::RightColumn => [TopRight, MiddleRight, BottomRight],
            Line::Diagonal => [TopLeft, Center, BottomRight],
            Line::AntiDiagonal => [TopRight, Center, BottomLeft],
        }
    }

    /// Board indices of this line, in order.
    pub fn indices(self) -> [usize; 3] {
        self.positions().map(Position::to_index)
    }

    /// First and last cell of the line - the pair a strike-through
    /// decoration spans.
    pub fn endpoints(self) -> (Position, Position) {
        let [first, _, last] = self.positions();
        (first, last)
    }

    /// Returns true if the given position lies on this line.
    pub fn contains(self, pos: Position) -> bool {
        self.positions().contains(&pos)
    }

    /// Get label for this line (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Line::TopRow => "Top row",
            Line::MiddleRow => "Middle row",
            Line::BottomRow => "Bottom row",
            Line::LeftColumn => "Left column",
            Line::MiddleColumn => "Middle column",
            Line::RightColumn => "Right column",
            Line::Diagonal => "Diagonal",
            Line::AntiDiagonal => "Anti-diagonal",
        }
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
