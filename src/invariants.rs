//! First-class invariants over controller state.
//!
//! Invariants are logical properties that must hold after every applied
//! move. They are checked in debug builds and testable independently.

use crate::controller::GameController;
use crate::types::{Board, Cell, Mark};
use tracing::warn;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Returns the descriptions of every violated invariant, empty when
    /// all invariants hold.
    fn violations(state: &S) -> Vec<&'static str>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn violations(state: &S) -> Vec<&'static str> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(I1::description());
        }

        if !I2::holds(state) {
            violations.push(I2::description());
        }

        violations
    }
}

/// Invariant: the human moves first and marks strictly alternate, so the
/// human's count equals the computer's or exceeds it by exactly one.
pub struct MarkBalanceInvariant;

impl Invariant<GameController> for MarkBalanceInvariant {
    fn holds(controller: &GameController) -> bool {
        let human = controller.board().count(Mark::Human);
        let computer = controller.board().count(Mark::Computer);

        let valid = human == computer || human == computer + 1;
        if !valid {
            warn!(human, computer, "mark balance violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Human mark count equals or exceeds computer count by exactly one"
    }
}

/// Invariant: replaying the history onto an empty board reproduces the
/// current board, with no cell ever written twice.
pub struct HistoryConsistentInvariant;

impl Invariant<GameController> for HistoryConsistentInvariant {
    fn holds(controller: &GameController) -> bool {
        let mut replayed = Board::new();

        for mov in controller.history() {
            if !replayed.is_empty(mov.position) {
                warn!(position = %mov.position, "history overwrites a cell");
                return false;
            }
            replayed.set(mov.position, Cell::Occupied(mov.mark));
        }

        let valid = replayed == *controller.board();
        if !valid {
            warn!("replayed history does not match the board");
        }
        valid
    }

    fn description() -> &'static str {
        "Replaying the move history reproduces the board"
    }
}

/// All controller invariants as a composable set.
pub type ControllerInvariants = (MarkBalanceInvariant, HistoryConsistentInvariant);

/// Asserts that all controller invariants hold (panics in debug builds).
pub fn assert_invariants(controller: &GameController) {
    debug_assert!(
        ControllerInvariants::violations(controller).is_empty(),
        "invariant violation: {:?}",
        ControllerInvariants::violations(controller)
    );
}
