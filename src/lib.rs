//! Tic-tac-toe decision engine: board model, terminal-state detection,
//! optimal move selection, and the turn state machine for a
//! human-versus-computer game.
//!
//! The crate is a pure, synchronous, in-process library. Rendering,
//! animation, and pacing belong to the presentation collaborator, which
//! calls into [`GameController`] and receives back boards and outcomes.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameController, Outcome};
//!
//! let mut game = GameController::new();
//!
//! let report = game.apply_human_move(4)?;
//! if report.outcome.is_ongoing() {
//!     let reply = game.request_computer_move()?;
//!     assert_eq!(reply.outcome, Outcome::Ongoing);
//! }
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod controller;
mod invariants;
mod position;
pub mod rules;
mod search;
mod types;

// Crate-level exports - turn state machine
pub use controller::{
    ComputerMoveReport, GameController, HumanMoveReport, Move, MoveError, Phase,
};

// Crate-level exports - invariants
pub use invariants::{
    ControllerInvariants, HistoryConsistentInvariant, Invariant, InvariantSet,
    MarkBalanceInvariant,
};

// Crate-level exports - search engine
pub use search::{best_move, SearchResult};

// Crate-level exports - domain types
pub use position::Position;
pub use rules::{detect, Outcome};
pub use types::{Board, Cell, Mark};
