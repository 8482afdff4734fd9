//! Win detection logic.

use crate::position::Position;
use crate::types::{Board, Cell, Mark};

/// The 8 winning lines in canonical order: rows, then columns, then
/// diagonals. Tie-breaking anywhere in the engine refers to this order.
pub const WIN_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the winning mark together with the completed line, scanning
/// [`WIN_LINES`] in order and stopping at the first match.
pub fn check_winner(board: &Board) -> Option<(Mark, [Position; 3])> {
    for line @ [a, b, c] in WIN_LINES {
        let cell = board.get(a);
        if cell != Cell::Empty && cell == board.get(b) && cell == board.get(c) {
            if let Cell::Occupied(mark) = cell {
                return Some((mark, line));
            }
        }
    }

    None
}
