//! Turn loop for tic-tac-toe.
//!
//! [`GameEngine`] owns the board and the turn bookkeeping of a single game.
//! It talks to the outside world through two traits: a [`MoveSource`]
//! that answers "where next?" and a [`GameReporter`] that is told what
//! happened. Both retries of a turn live here: bad input is asked for
//! again, and so is a move onto a taken cell. The turn only passes once
//! a marker actually lands.

use super::action::{Move, MoveError, MoveInput};
use super::contracts::{Contract, MoveContract};
use super::outcome::Outcome;
use super::position::Position;
use super::rules;
use super::types::{Board, GameState, GameStatus, Player};
use crate::error::SessionError;
use tracing::{debug, info, instrument, warn};

/// Supplies raw moves for the player whose turn it is.
pub trait MoveSource {
    /// Blocks until the next answer is available.
    ///
    /// An `Err` means no answer will ever come and ends the game loop.
    fn next_move(&mut self, player: Player) -> Result<MoveInput, SessionError>;
}

/// Receives everything the engine wants shown.
pub trait GameReporter {
    /// A move is about to be requested from `player`.
    fn move_requested(&mut self, player: Player) -> Result<(), SessionError>;

    /// An answer was rejected and another will be requested.
    fn input_rejected(&mut self, error: &MoveError) -> Result<(), SessionError>;

    /// A move was accepted and the board changed.
    fn board_changed(&mut self, board: &Board) -> Result<(), SessionError>;

    /// The game ended. Called once per game.
    fn game_over(&mut self, outcome: &Outcome) -> Result<(), SessionError>;
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    pub(super) board: Board,
    pub(super) state: GameState,
}

impl GameEngine {
    /// Creates a new game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            state: GameState::new(),
        }
    }

    /// Replays 1-based move indices from a fresh game.
    ///
    /// Stops at the first rejected move. Moves after the game ends are
    /// rejected with [`MoveError::GameOver`].
    #[instrument]
    pub fn replay(indices: &[i64]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for &index in indices {
            game.try_move(index)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the turn bookkeeping.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns the outcome once the game has finished.
    pub fn outcome(&self) -> Option<Outcome> {
        self.status().outcome()
    }

    /// Plays one move for the current player without any I/O.
    ///
    /// Validates the index, places the marker and evaluates the board.
    /// On error nothing changes and the same player is still to move.
    #[instrument(skip(self))]
    pub fn try_move(&mut self, index: i64) -> Result<GameStatus, MoveError> {
        if self.status().is_terminal() {
            return Err(MoveError::GameOver);
        }
        let pos = Position::from_index(index)?;
        self.apply(pos)
    }

    /// Plays turns until the game is decided.
    ///
    /// Returns at once if the game is already over. The reporter sees the
    /// board after every accepted move and the outcome exactly once.
    #[instrument(skip_all)]
    pub fn run_game<S, R>(
        &mut self,
        source: &mut S,
        reporter: &mut R,
    ) -> Result<Outcome, SessionError>
    where
        S: MoveSource,
        R: GameReporter,
    {
        if let Some(outcome) = self.outcome() {
            return Ok(outcome);
        }

        info!("Game started");
        loop {
            if let Some(outcome) = self.play_turn(source, reporter)?.outcome() {
                info!(%outcome, moves = self.state.move_count(), "Game finished");
                reporter.game_over(&outcome)?;
                return Ok(outcome);
            }
        }
    }

    /// Plays a single turn: asks until a move lands, then reports the board.
    ///
    /// Does not report the outcome; [`GameEngine::run_game`] does that.
    #[instrument(skip_all, fields(player = %self.state.current_player()))]
    pub fn play_turn<S, R>(
        &mut self,
        source: &mut S,
        reporter: &mut R,
    ) -> Result<GameStatus, SessionError>
    where
        S: MoveSource,
        R: GameReporter,
    {
        if self.status().is_terminal() {
            return Ok(self.status());
        }

        let player = self.state.current_player();
        loop {
            let pos = Self::acquire_position(player, source, reporter)?;
            match self.apply(pos) {
                Ok(status) => {
                    reporter.board_changed(&self.board)?;
                    return Ok(status);
                }
                Err(err) => {
                    warn!(%err, "Move rejected, asking again");
                    reporter.input_rejected(&err)?;
                }
            }
        }
    }

    /// Asks `source` until it produces an index that names a cell.
    ///
    /// There is no attempt limit. Occupancy is not checked here.
    #[instrument(skip(source, reporter))]
    pub fn acquire_position<S, R>(
        player: Player,
        source: &mut S,
        reporter: &mut R,
    ) -> Result<Position, SessionError>
    where
        S: MoveSource,
        R: GameReporter,
    {
        reporter.move_requested(player)?;
        loop {
            let parsed = match source.next_move(player)? {
                MoveInput::Number(index) => Position::from_index(index),
                MoveInput::NotANumber(raw) => Err(MoveError::NotANumber(raw)),
            };
            match parsed {
                Ok(pos) => return Ok(pos),
                Err(err) => {
                    debug_assert!(err.is_input_error());
                    warn!(%err, "Invalid input, asking again");
                    reporter.input_rejected(&err)?;
                }
            }
        }
    }

    /// Places the current player's marker and settles the new status.
    fn apply(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        MoveContract::pre(self, &pos)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.state.current_player();
        self.board.place(pos, player)?;
        let status = rules::evaluate(&self.board, player);
        self.state.record(Move::new(player, pos), status);
        debug!(%player, %pos, ?status, "Move applied");

        #[cfg(debug_assertions)]
        {
            let post = MoveContract::post(&before, self);
            if let Err(violation) = &post {
                tracing::error!(%violation, "Move postcondition failed");
            }
            debug_assert!(post.is_ok(), "Move postcondition failed: {post:?}");
        }

        Ok(status)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
