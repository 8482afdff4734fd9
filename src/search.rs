//! Optimal move selection: minimax with alpha-beta pruning.
//!
//! The computer is always the maximizing side. Scores are depth-weighted so
//! the engine prefers faster wins (`10 - depth`) and slower losses
//! (`depth - 10`); a draw scores 0.

use crate::position::Position;
use crate::rules::{self, Outcome};
use crate::types::{Board, Cell, Mark};
use tracing::{debug, instrument};

/// Result of evaluating a board for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best achievable score from the computer's perspective.
    pub score: i32,
    /// The chosen cell, absent at leaf evaluations where no move is made.
    pub index: Option<Position>,
}

/// Returns the optimal move for `to_move` on the given board.
///
/// Deterministic: empty cells are scanned in ascending index order and ties
/// are broken by the first position reaching the running best, so the same
/// board and mover always yield the same result. The caller's board is left
/// untouched; the recursion mutates and restores a single scratch copy.
#[instrument(skip(board))]
pub fn best_move(board: &Board, to_move: Mark) -> SearchResult {
    let mut scratch = board.clone();
    let result = minimax(&mut scratch, to_move, i32::MIN, i32::MAX, 0);
    debug!(score = result.score, index = ?result.index, "search complete");
    result
}

fn minimax(board: &mut Board, to_move: Mark, mut alpha: i32, mut beta: i32, depth: i32) -> SearchResult {
    // Terminal positions are leaves; a full board with no line is a draw,
    // so the move loop below always has at least one empty cell.
    match rules::detect(board) {
        Outcome::Win {
            mark: Mark::Computer,
            ..
        } => {
            return SearchResult {
                score: 10 - depth,
                index: None,
            };
        }
        Outcome::Win {
            mark: Mark::Human, ..
        } => {
            return SearchResult {
                score: depth - 10,
                index: None,
            };
        }
        Outcome::Draw => {
            return SearchResult {
                score: 0,
                index: None,
            };
        }
        Outcome::Ongoing => {}
    }

    let maximizing = to_move == Mark::Computer;
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_index = None;

    // Cells occupied deeper in the recursion are restored before the next
    // sibling, so the move list stays valid for the whole loop.
    let moves = Position::valid_moves(board);
    for pos in moves {
        board.set(pos, Cell::Occupied(to_move));
        let score = minimax(board, to_move.opponent(), alpha, beta, depth + 1).score;
        board.set(pos, Cell::Empty);

        if maximizing {
            if score > best_score {
                best_score = score;
                best_index = Some(pos);
            }
            alpha = alpha.max(score);
        } else {
            if score < best_score {
                best_score = score;
                best_index = Some(pos);
            }
            beta = beta.min(score);
        }

        if beta <= alpha {
            break;
        }
    }

    SearchResult {
        score: best_score,
        index: best_index,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_from(marks: &[(Position, Mark)]) -> Board {
        let mut board = Board::new();
        for (pos, mark) in marks {
            board.set(*pos, Cell::Occupied(*mark));
        }
        board
    }

    #[test]
    fn takes_immediate_win() {
        // Computer has top-left and top-center; top-right completes the row.
        let board = board_from(&[
            (Position::TopLeft, Mark::Computer),
            (Position::TopCenter, Mark::Computer),
            (Position::MiddleLeft, Mark::Human),
            (Position::Center, Mark::Human),
        ]);

        let result = best_move(&board, Mark::Computer);
        assert_eq!(result.index, Some(Position::TopRight));
        assert!(result.score > 0);
    }

    #[test]
    fn blocks_imminent_human_win() {
        // Human threatens the left column; only bottom-left stops it.
        let board = board_from(&[
            (Position::TopLeft, Mark::Human),
            (Position::MiddleLeft, Mark::Human),
            (Position::Center, Mark::Computer),
        ]);

        let result = best_move(&board, Mark::Computer);
        assert_eq!(result.index, Some(Position::BottomLeft));
    }

    #[test]
    fn never_picks_an_occupied_cell() {
        let board = board_from(&[
            (Position::Center, Mark::Human),
            (Position::TopLeft, Mark::Computer),
            (Position::BottomRight, Mark::Human),
        ]);

        let result = best_move(&board, Mark::Computer);
        let index = result.index.expect("moves remain");
        assert!(board.is_empty(index));
    }

    #[test]
    fn full_board_evaluates_without_an_index() {
        // O X O / X O O / X O X - drawn board, nothing left to choose.
        let board = board_from(&[
            (Position::TopLeft, Mark::Human),
            (Position::TopCenter, Mark::Computer),
            (Position::TopRight, Mark::Human),
            (Position::MiddleLeft, Mark::Computer),
            (Position::Center, Mark::Human),
            (Position::MiddleRight, Mark::Human),
            (Position::BottomLeft, Mark::Computer),
            (Position::BottomCenter, Mark::Human),
            (Position::BottomRight, Mark::Computer),
        ]);

        let result = best_move(&board, Mark::Computer);
        assert_eq!(result.score, 0);
        assert_eq!(result.index, None);
    }

    #[test]
    fn prefers_the_faster_win() {
        // Computer can win immediately via the top row, or dawdle. The
        // depth weighting makes the immediate win strictly better.
        let board = board_from(&[
            (Position::TopLeft, Mark::Computer),
            (Position::TopCenter, Mark::Computer),
            (Position::MiddleLeft, Mark::Computer),
            (Position::Center, Mark::Human),
            (Position::BottomCenter, Mark::Human),
            (Position::BottomRight, Mark::Human),
        ]);

        let result = best_move(&board, Mark::Computer);
        assert_eq!(result.index, Some(Position::TopRight));
        assert_eq!(result.score, 9);
    }

    #[test]
    fn deterministic_for_identical_boards() {
        let board = board_from(&[(Position::Center, Mark::Human)]);

        let first = best_move(&board, Mark::Computer);
        let second = best_move(&board, Mark::Computer);
        assert_eq!(first, second);
    }

    #[test]
    fn leaves_the_callers_board_untouched() {
        let board = board_from(&[(Position::Center, Mark::Human)]);
        let snapshot = board.clone();

        best_move(&board, Mark::Computer);
        assert_eq!(board, snapshot);
    }
}
