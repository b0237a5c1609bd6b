//! Balanced marks invariant: the first player is never more than one mark ahead.

use super::super::{Board, FIRST_PLAYER, GameEngine};
use super::Invariant;

/// Invariant: marker counts stay balanced and the board matches history.
///
/// The first player's marks minus the second player's marks is 0 or 1.
/// Replaying the history onto an empty board never overwrites a cell and
/// reproduces the current board exactly.
pub struct BalancedMarksInvariant;

impl Invariant<GameEngine> for BalancedMarksInvariant {
    fn holds(game: &GameEngine) -> bool {
        let board = game.board();
        let first = board.count(FIRST_PLAYER);
        let second = board.count(FIRST_PLAYER.opponent());
        if first < second || first - second > 1 {
            return false;
        }

        let mut reconstructed = Board::new();
        for mov in game.state().history() {
            if reconstructed.place(mov.position, mov.player).is_err() {
                return false;
            }
        }
        reconstructed == *board
    }

    fn description() -> &'static str {
        "Marker counts differ by at most one and match the move history"
    }
}
