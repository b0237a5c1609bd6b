//! Empty count invariant: the cached count agrees with the grid and the history.

use super::super::{CELL_COUNT, GameEngine, Position};
use super::Invariant;

/// Invariant: the board's cached empty count is accurate.
///
/// The cached count equals the number of empty cells, and every occupied
/// cell corresponds to exactly one move in history.
pub struct EmptyCountInvariant;

impl Invariant<GameEngine> for EmptyCountInvariant {
    fn holds(game: &GameEngine) -> bool {
        let board = game.board();
        let actual_empty = Position::all().filter(|&pos| board.is_empty(pos)).count();
        let occupied = CELL_COUNT - actual_empty;

        board.empty_count() == actual_empty && game.state().move_count() == occupied
    }

    fn description() -> &'static str {
        "Cached empty count matches the board and history length"
    }
}
