//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the engine and the invariants share one definition.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, has_line, lines};

use super::{Board, GameStatus, Player};
use tracing::instrument;

/// Evaluates the board right after `just_moved` placed a marker.
///
/// The win check runs before the draw check, so a move that both
/// fills the board and completes a line is a win.
#[instrument(skip(board))]
pub fn evaluate(board: &Board, just_moved: Player) -> GameStatus {
    if has_line(board, just_moved) {
        GameStatus::Won(just_moved)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
