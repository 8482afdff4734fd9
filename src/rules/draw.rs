//! Draw detection logic.

use crate::types::Board;

/// Checks if the board is full (all cells occupied).
///
/// A full board with no winner is a draw.
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::position::Position;
    use crate::types::{Cell, Mark};

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::Center, Cell::Occupied(Mark::Human));
        assert!(!is_full(&board));
    }

    #[test]
    fn draw_detection() {
        // O X O / X O O / X O X - full with no line
        let mut board = Board::new();
        let marks = [
            Mark::Human,
            Mark::Computer,
            Mark::Human,
            Mark::Computer,
            Mark::Human,
            Mark::Human,
            Mark::Computer,
            Mark::Human,
            Mark::Computer,
        ];
        for (pos, mark) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Cell::Occupied(mark));
        }

        assert!(is_draw(&board));
    }

    #[test]
    fn not_draw_if_winner() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Cell::Occupied(Mark::Computer));
        board.set(Position::TopCenter, Cell::Occupied(Mark::Computer));
        board.set(Position::TopRight, Cell::Occupied(Mark::Computer));
        board.set(Position::MiddleLeft, Cell::Occupied(Mark::Human));
        board.set(Position::Center, Cell::Occupied(Mark::Human));

        assert!(!is_draw(&board));
    }
}
