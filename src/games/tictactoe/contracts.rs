//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::engine::GameEngine;
use super::invariants::{GameInvariants, InvariantSet};
use super::position::Position;
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), String>;
}

/// Precondition: the game has not finished.
pub struct GameInProgress;

impl GameInProgress {
    /// Fails with [`MoveError::GameOver`] once the game has an outcome.
    #[instrument(skip(game))]
    pub fn check(game: &GameEngine) -> Result<(), MoveError> {
        if game.status().is_terminal() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] if the cell holds a marker.
    #[instrument(skip(game))]
    pub fn check(pos: Position, game: &GameEngine) -> Result<(), MoveError> {
        if game.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Contract for placing the current player's marker.
///
/// Preconditions:
/// - Game still in progress
/// - Cell must be empty
///
/// Postconditions:
/// - Exactly one more move was recorded
/// - All game invariants hold
pub struct MoveContract;

impl Contract<GameEngine, Position> for MoveContract {
    fn pre(game: &GameEngine, pos: &Position) -> Result<(), MoveError> {
        GameInProgress::check(game)?;
        CellIsEmpty::check(*pos, game)
    }

    fn post(before: &GameEngine, after: &GameEngine) -> Result<(), String> {
        let recorded = after.state().move_count();
        if recorded != before.state().move_count() + 1 {
            return Err(format!(
                "expected one new move, history went from {} to {}",
                before.state().move_count(),
                recorded
            ));
        }

        GameInvariants::check_all(after).map_err(|violations| {
            violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ")
        })
    }
}
