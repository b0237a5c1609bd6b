//! Console front end: reads moves from a line stream and prints the game.

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::games::tictactoe::{
    Board, CELL_COUNT, GameEngine, GameReporter, MoveError, MoveInput, MoveSource, Outcome,
    Player, SIZE,
};
use std::collections::VecDeque;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Reads whitespace-separated answers from a line-oriented input.
///
/// Blank lines are skipped and several answers typed on one line are
/// handed out one at a time.
#[derive(Debug)]
pub struct LineInput<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> LineInput<R> {
    /// Wraps a reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    /// Returns the next raw line, dropping any answers left over.
    ///
    /// `None` at end of input.
    #[instrument(skip(self))]
    pub fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        self.pending.clear();
        Ok(self
            .raw_line()?
            .map(|line| line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn next_token(&mut self) -> Result<Option<String>, SessionError> {
        while self.pending.is_empty() {
            let Some(line) = self.raw_line()? else {
                return Ok(None);
            };
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }

    /// Reads up to the next newline. Bytes that are not UTF-8 become
    /// replacement characters, so they fail to parse like any other typo.
    fn raw_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

impl<R: BufRead> MoveSource for LineInput<R> {
    #[instrument(skip(self))]
    fn next_move(&mut self, player: Player) -> Result<MoveInput, SessionError> {
        let token = self.next_token()?.ok_or_else(SessionError::input_closed)?;
        debug!(%token, "Read answer");
        Ok(match token.parse::<i64>() {
            Ok(number) => MoveInput::Number(number),
            Err(_) => MoveInput::NotANumber(token),
        })
    }
}

/// Prints prompts, boards and results as plain text.
#[derive(Debug)]
pub struct ConsoleReporter<W> {
    writer: W,
}

impl<W: Write> ConsoleReporter<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes one line and flushes so prompts show before blocking on input.
    pub fn line(&mut self, text: impl std::fmt::Display) -> Result<(), SessionError> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Gives back the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn range_hint(&mut self) -> Result<(), SessionError> {
        self.line(format!("Enter a number between 1 and {}", CELL_COUNT))
    }
}

impl<W: Write> GameReporter for ConsoleReporter<W> {
    fn move_requested(&mut self, player: Player) -> Result<(), SessionError> {
        self.line(format!(
            "Player {}, where do you want to place your token?",
            player
        ))?;
        self.range_hint()
    }

    fn input_rejected(&mut self, error: &MoveError) -> Result<(), SessionError> {
        match error {
            MoveError::NotANumber(_) => {
                self.line("Something went wrong. Try again.")?;
                self.range_hint()
            }
            MoveError::OutOfRange(_) => {
                self.line(format!(
                    "Make sure the number is between 1 and {}. Try again.",
                    CELL_COUNT
                ))?;
                self.range_hint()
            }
            MoveError::CellOccupied(_) => self.line("Position already taken. Try again."),
            MoveError::GameOver => self.line(error),
        }
    }

    fn board_changed(&mut self, board: &Board) -> Result<(), SessionError> {
        self.line(board)
    }

    fn game_over(&mut self, outcome: &Outcome) -> Result<(), SessionError> {
        match outcome {
            Outcome::Winner(player) => self.line(format!("CONGRATULATIONS! {} won!", player)),
            Outcome::Draw => self.line("There is no winner."),
        }
    }
}

/// How-to-play text with the numbered board layout.
pub fn instructions() -> String {
    let mut text = String::from(
        "-- How To Play --\n\
         Enter a number where you want to place your token\n\
         The board numbers are laid out in the following way.\n",
    );
    for row in 0..SIZE {
        text.push_str("| ");
        for col in 0..SIZE {
            text.push_str(&format!("{} | ", row * SIZE + col + 1));
        }
        text.push('\n');
    }
    text
}

/// Plays games on a console until the players stop asking for another.
#[derive(Debug)]
pub struct ConsoleSession<R, W> {
    input: LineInput<R>,
    reporter: ConsoleReporter<W>,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Creates a session over the given streams.
    pub fn new(reader: R, writer: W, config: SessionConfig) -> Self {
        Self {
            input: LineInput::new(reader),
            reporter: ConsoleReporter::new(writer),
            config,
        }
    }

    /// Runs games back to back and returns their outcomes in order.
    ///
    /// Every game starts from a fresh [`GameEngine`].
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Vec<Outcome>, SessionError> {
        if *self.config.show_instructions() {
            self.reporter.line(instructions())?;
        }

        let mut outcomes = Vec::new();
        loop {
            let mut game = GameEngine::new();
            let outcome = game.run_game(&mut self.input, &mut self.reporter)?;
            outcomes.push(outcome);
            info!(games = outcomes.len(), %outcome, "Game recorded");

            if !self.wants_restart()? {
                break;
            }
        }

        self.reporter.line("Goodbye.")?;
        Ok(outcomes)
    }

    fn wants_restart(&mut self) -> Result<bool, SessionError> {
        self.reporter
            .line("Press R to play again. Press anything else to exit")?;
        let answer = self.input.read_line()?;
        let restart_key = *self.config.restart_key();
        let restart = answer
            .and_then(|line| line.chars().next())
            .is_some_and(|c| c.eq_ignore_ascii_case(&restart_key));
        debug!(restart, "Restart prompt answered");
        Ok(restart)
    }

    /// Gives back the output writer.
    pub fn into_writer(self) -> W {
        self.reporter.into_inner()
    }
}
