//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player, Position, SIZE};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Every candidate line: each row, each column and both diagonals.
pub fn lines() -> impl Iterator<Item = [Position; SIZE]> {
    let rows = (0..SIZE).map(|r| line(|c| Position::at(r, c)));
    let cols = (0..SIZE).map(|c| line(|r| Position::at(r, c)));
    let diagonals = [
        line(|i| Position::at(i, i)),
        line(|i| Position::at(i, SIZE - 1 - i)),
    ];
    rows.chain(cols).chain(diagonals)
}

fn line(cell_at: impl FnMut(usize) -> Position) -> [Position; SIZE] {
    std::array::from_fn(cell_at)
}

/// Checks whether `player` owns every cell of some line.
///
/// Cells are compared one by one; a line holding an empty cell or the
/// other player's marker never counts.
#[instrument(skip(board))]
pub fn has_line(board: &Board, player: Player) -> bool {
    let mark = Cell::Occupied(player);
    lines().any(|line| line.iter().all(|&pos| board.cell(pos) == mark))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has a complete line,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    Player::iter().find(|&player| has_line(board, player))
}
