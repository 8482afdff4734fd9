//! Turn state machine sequencing human and computer moves.
//!
//! [`GameController`] is the only place holding mutable game state. The
//! detector and search engine are pure functions it calls into; the
//! presentation layer holds a read-only view and decides pacing, never
//! correctness.

use crate::invariants;
use crate::position::Position;
use crate::rules::{self, Outcome};
use crate::search;
use crate::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Whose move is next, or how the game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human's move.
    HumanToMove,
    /// Waiting for the computer's reply.
    ComputerToMove,
    /// Terminal: only [`GameController::reset`] leaves this phase.
    GameOver(Outcome),
}

/// A completed placement, recorded in the controller's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> {}", self.mark, self.position.label())
    }
}

/// A rejected move request. The controller's state is unchanged whenever
/// one of these is returned; the caller may retry or ignore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is outside 0-8.
    #[display("Cell index {_0} is out of range (must be 0-8)")]
    OutOfRange(usize),

    /// The cell is already occupied.
    #[display("{} is already occupied", _0.label())]
    Occupied(Position),

    /// It is not this side's turn.
    #[display("It is not {_0:?}'s turn")]
    WrongTurn(Mark),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Result of an accepted human move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanMoveReport {
    /// Board classification after the move.
    pub outcome: Outcome,
    /// Snapshot of the board after the move.
    pub board: Board,
}

/// Result of a computer reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputerMoveReport {
    /// The cell the engine chose.
    pub position: Position,
    /// Board classification after the move.
    pub outcome: Outcome,
    /// Snapshot of the board after the move.
    pub board: Board,
}

/// One game of human-versus-computer tic-tac-toe.
///
/// The human marks first. Each accepted human move that leaves the game
/// ongoing is followed by [`GameController::request_computer_move`]; the
/// collaborator decides when to call it (for pacing), the controller
/// decides what happens.
#[derive(Debug, Clone)]
pub struct GameController {
    board: Board,
    phase: Phase,
    history: Vec<Move>,
}

impl GameController {
    /// Creates a controller with an empty board, human to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: Phase::HumanToMove,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Returns the completed moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns whose move is next, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Mark> {
        match self.phase {
            Phase::HumanToMove => Some(Mark::Human),
            Phase::ComputerToMove => Some(Mark::Computer),
            Phase::GameOver(_) => None,
        }
    }

    /// Applies a human move at the given cell index (0-8).
    ///
    /// # Errors
    ///
    /// Rejected without state change if the index is out of range, the cell
    /// is occupied, it is the computer's turn, or the game is over.
    #[instrument(skip(self))]
    pub fn apply_human_move(&mut self, index: usize) -> Result<HumanMoveReport, MoveError> {
        match self.phase {
            Phase::HumanToMove => {}
            Phase::ComputerToMove => return Err(MoveError::WrongTurn(Mark::Human)),
            Phase::GameOver(_) => return Err(MoveError::GameOver),
        }

        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.board.is_empty(position) {
            return Err(MoveError::Occupied(position));
        }

        self.place(Mark::Human, position);

        let outcome = rules::detect(&self.board);
        self.phase = match outcome {
            Outcome::Ongoing => Phase::ComputerToMove,
            terminal => Phase::GameOver(terminal),
        };

        Ok(HumanMoveReport {
            outcome,
            board: self.board.clone(),
        })
    }

    /// Computes and applies the computer's optimal reply.
    ///
    /// # Errors
    ///
    /// Rejected without state change if it is the human's turn or the game
    /// is over.
    #[instrument(skip(self))]
    pub fn request_computer_move(&mut self) -> Result<ComputerMoveReport, MoveError> {
        match self.phase {
            Phase::ComputerToMove => {}
            Phase::HumanToMove => return Err(MoveError::WrongTurn(Mark::Computer)),
            Phase::GameOver(_) => return Err(MoveError::GameOver),
        }

        // The phase check guarantees the last detection was Ongoing, so the
        // board has an empty cell and the search must produce an index.
        let result = search::best_move(&self.board, Mark::Computer);
        let position = result
            .index
            .expect("search must yield a move on a non-terminal board");
        debug!(%position, score = result.score, "computer reply");

        self.place(Mark::Computer, position);

        let outcome = rules::detect(&self.board);
        self.phase = match outcome {
            Outcome::Ongoing => Phase::HumanToMove,
            terminal => Phase::GameOver(terminal),
        };

        Ok(ComputerMoveReport {
            position,
            outcome,
            board: self.board.clone(),
        })
    }

    /// Discards all state and starts a fresh game, human to move.
    ///
    /// Valid from any phase; this is the only transition out of
    /// [`Phase::GameOver`].
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> &Board {
        self.board = Board::new();
        self.phase = Phase::HumanToMove;
        self.history.clear();
        &self.board
    }

    fn place(&mut self, mark: Mark, position: Position) {
        self.board.set(position, Cell::Occupied(mark));
        self.history.push(Move { mark, position });
        invariants::assert_invariants(self);
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}
