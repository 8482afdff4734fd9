//! Terminal-state detection.
//!
//! [`detect`] classifies any well-formed board as ongoing, won, or drawn.
//! The classification is computed fresh from a board snapshot on every
//! call; it is never cached alongside the board.

mod draw;
mod win;

pub use draw::is_full;
pub use win::{check_winner, WIN_LINES};

use crate::position::Position;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Classification of a board state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    /// The game continues.
    Ongoing,
    /// A mark completed a line.
    Win {
        /// The winning mark.
        mark: Mark,
        /// The completed line, in canonical order.
        line: [Position; 3],
    },
    /// The board is full with no winner.
    Draw,
}

impl Outcome {
    /// Returns true unless the game has ended.
    pub fn is_ongoing(&self) -> bool {
        matches!(self, Outcome::Ongoing)
    }

    /// Returns the winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win { mark, .. } => Some(*mark),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "Game in progress"),
            Outcome::Win { mark, .. } => write!(f, "{mark:?} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Classifies the board: first completed line in canonical order wins,
/// otherwise a full board is a draw, otherwise the game is ongoing.
///
/// Pure and total over well-formed boards.
pub fn detect(board: &Board) -> Outcome {
    if let Some((mark, line)) = check_winner(board) {
        return Outcome::Win { mark, line };
    }

    if is_full(board) {
        return Outcome::Draw;
    }

    Outcome::Ongoing
}
