//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They record who played
//! where and can be replayed to rebuild a board.

use super::position::Position;
use super::types::{CELL_COUNT, Player};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Raw answer from a move source, before range checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveInput {
    /// The answer parsed as an integer.
    Number(i64),
    /// The answer was not a number.
    NotANumber(String),
}

/// Error that can occur when validating or applying a move.
///
/// Every variant is recoverable: the engine reports it and asks again.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The input was not an integer.
    #[display("{:?} is not a number", _0)]
    NotANumber(String),

    /// The integer does not name a cell.
    #[display("{} is not between 1 and {}", _0, CELL_COUNT)]
    OutOfRange(i64),

    /// The cell at the position is already occupied.
    #[display("Position {} is already taken", _0)]
    CellOccupied(Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

impl MoveError {
    /// Returns true if this error rejects the input itself rather than the board state.
    pub fn is_input_error(&self) -> bool {
        matches!(self, MoveError::NotANumber(_) | MoveError::OutOfRange(_))
    }
}
