//! Board coordinates and the 1-based move index players type in.

use super::action::MoveError;
use super::types::{CELL_COUNT, SIZE};
use tracing::instrument;

/// A cell coordinate on the board.
///
/// Players name cells by a 1-based index counted in row-major order:
///
/// ```text
/// 1 2 3
/// 4 5 6
/// 7 8 9
/// ```
///
/// A `Position` can only be built for coordinates inside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from zero-based coordinates.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < SIZE && col < SIZE).then_some(Self { row, col })
    }

    /// Builds a position from coordinates already known to be on the board.
    pub(crate) fn at(row: usize, col: usize) -> Self {
        debug_assert!(row < SIZE && col < SIZE);
        Self { row, col }
    }

    /// Maps a 1-based move index onto the board.
    ///
    /// Fails with [`MoveError::OutOfRange`] for anything outside `1..=9`.
    #[instrument]
    pub fn from_index(index: i64) -> Result<Self, MoveError> {
        if !(1..=CELL_COUNT as i64).contains(&index) {
            return Err(MoveError::OutOfRange(index));
        }
        let zero_based = (index - 1) as usize;
        Ok(Self {
            row: zero_based / SIZE,
            col: zero_based % SIZE,
        })
    }

    /// The 1-based move index of this position.
    pub fn index(self) -> usize {
        self.row * SIZE + self.col + 1
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.col
    }

    /// Every position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELL_COUNT).map(|i| Position {
            row: i / SIZE,
            col: i % SIZE,
        })
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}
