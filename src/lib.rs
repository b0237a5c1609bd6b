//! Console Tic-Tac-Toe library
//!
//! A two-player tic-tac-toe engine with a console front end.
//!
//! # Architecture
//!
//! - **Games**: board, rules, invariants and the [`GameEngine`] turn loop
//! - **Console**: line input, text output and the restart loop
//! - **Config**: TOML session settings
//!
//! The engine never touches stdin or stdout itself. It asks a
//! [`MoveSource`] for moves and tells a [`GameReporter`] what happened,
//! so any front end (or a test script) can drive it.
//!
//! # Example
//!
//! ```
//! use console_tictactoe::{GameEngine, GameStatus, Player};
//!
//! let mut game = GameEngine::new();
//! for index in [1, 5, 2, 6] {
//!     game.try_move(index).unwrap();
//! }
//! assert_eq!(game.try_move(3), Ok(GameStatus::Won(Player::O)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod error;
mod games;

// Crate-level exports - Configuration
pub use config::{ConfigError, SessionConfig};

// Crate-level exports - Console front end
pub use console::{ConsoleReporter, ConsoleSession, LineInput, instructions};

// Crate-level exports - Errors
pub use error::SessionError;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    AlternatingTurnInvariant, BalancedMarksInvariant, Board, CELL_COUNT, Cell, CellIsEmpty,
    Contract, EmptyCountInvariant, FIRST_PLAYER, GameEngine, GameInProgress, GameInvariants,
    GameReporter, GameState, GameStatus, Invariant, InvariantSet, InvariantViolation, Move,
    MoveContract, MoveError, MoveInput, MoveSource, Outcome, Player, Position, SIZE,
    check_winner, evaluate, has_line, is_draw, is_full, lines,
};
