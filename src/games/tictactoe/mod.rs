//! Tic-tac-toe: board, rules and the turn loop.

mod action;
mod contracts;
mod engine;
mod invariants;
mod outcome;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveError, MoveInput};
pub use contracts::{CellIsEmpty, Contract, GameInProgress, MoveContract};
pub use engine::{GameEngine, GameReporter, MoveSource};
pub use invariants::{
    AlternatingTurnInvariant, BalancedMarksInvariant, EmptyCountInvariant, GameInvariants,
    Invariant, InvariantSet, InvariantViolation,
};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{check_winner, evaluate, has_line, is_draw, is_full, lines};
pub use types::{Board, CELL_COUNT, Cell, FIRST_PLAYER, GameState, GameStatus, Player, SIZE};
