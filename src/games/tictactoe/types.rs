//! Core domain types for tic-tac-toe.

use super::action::{Move, MoveError};
use super::position::Position;
use super::rules;
use tracing::{debug, instrument};

/// Width and height of the board.
pub const SIZE: usize = 3;

/// Number of cells on the board.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, derive_more::Display)]
pub enum Player {
    /// Player X (moves second).
    X,
    /// Player O (moves first).
    O,
}

/// The player who takes the first turn of every game.
pub const FIRST_PLAYER: Player = Player::O;

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Marker drawn on the board for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Placeholder drawn for an empty cell.
    pub const EMPTY_SYMBOL: char = '-';

    /// Display symbol for this cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => Self::EMPTY_SYMBOL,
            Cell::Occupied(player) => player.symbol(),
        }
    }
}

/// Square tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; SIZE]; SIZE],
    /// Number of cells still empty.
    empty_count: usize,
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
            empty_count: CELL_COUNT,
        }
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cell(pos) == Cell::Empty
    }

    /// Places `player`'s marker on an empty cell.
    ///
    /// The board is left untouched when the cell is already taken.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            debug!(%pos, "Cell already occupied");
            return Err(MoveError::CellOccupied(pos));
        }
        self.cells[pos.row()][pos.col()] = Cell::Occupied(player);
        self.empty_count -= 1;
        Ok(())
    }

    /// Returns true once no empty cells remain.
    pub fn is_full(&self) -> bool {
        self.empty_count == 0
    }

    /// Number of cells still empty.
    pub fn empty_count(&self) -> usize {
        self.empty_count
    }

    /// Number of cells holding `player`'s marker.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Occupied(player))
            .count()
    }

    /// Positions that are still empty, in row-major order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::all().filter(|pos| self.is_empty(*pos)).collect()
    }

    /// Checks whether `player` holds a complete row, column or diagonal.
    pub fn has_line(&self, player: Player) -> bool {
        rules::win::has_line(self, player)
    }

    /// Returns the player holding a complete line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::win::check_winner(self)
    }

    /// Projects the board into rows of display symbols.
    pub fn render(&self) -> Vec<Vec<char>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<String> = self
            .render()
            .iter()
            .map(|row| {
                row.iter()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect();
        write!(f, "{}", rows.join("\n"))
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

/// Turn bookkeeping for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Player whose turn it is.
    current_player: Player,
    /// Accepted moves in the order they were played.
    history: Vec<Move>,
    /// Game status.
    status: GameStatus,
}

impl GameState {
    /// Creates the state of a game that has not started yet.
    pub fn new() -> Self {
        Self {
            current_player: FIRST_PLAYER,
            history: Vec::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Number of accepted moves.
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Records an accepted move and settles the resulting status.
    ///
    /// The turn only passes to the opponent while the game goes on.
    pub(super) fn record(&mut self, mov: Move, status: GameStatus) {
        self.history.push(mov);
        self.status = status;
        if !status.is_terminal() {
            self.current_player = mov.player.opponent();
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
