//! Tests for the game engine turn loop.

use console_tictactoe::{
    Board, Cell, GameEngine, GameReporter, GameStatus, MoveError, MoveInput, MoveSource, Outcome,
    Player, Position, SessionError,
};
use std::collections::VecDeque;

/// Hands out a fixed list of answers, then reports closed input.
struct ScriptedMoves {
    answers: VecDeque<MoveInput>,
    asked_by: Vec<Player>,
}

impl ScriptedMoves {
    fn new(answers: impl IntoIterator<Item = MoveInput>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            asked_by: Vec::new(),
        }
    }

    fn numbers(indices: &[i64]) -> Self {
        Self::new(indices.iter().copied().map(MoveInput::Number))
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self, player: Player) -> Result<MoveInput, SessionError> {
        self.asked_by.push(player);
        self.answers.pop_front().ok_or_else(SessionError::input_closed)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Requested(Player),
    Rejected(MoveError),
    Board(Board),
    Over(Outcome),
}

#[derive(Default)]
struct RecordingReporter {
    events: Vec<Event>,
}

impl RecordingReporter {
    fn boards(&self) -> Vec<&Board> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Board(b) => Some(b),
                _ => None,
            })
            .collect()
    }

    fn rejections(&self) -> Vec<&MoveError> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Rejected(err) => Some(err),
                _ => None,
            })
            .collect()
    }

    fn outcomes(&self) -> Vec<Outcome> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Over(o) => Some(*o),
                _ => None,
            })
            .collect()
    }
}

impl GameReporter for RecordingReporter {
    fn move_requested(&mut self, player: Player) -> Result<(), SessionError> {
        self.events.push(Event::Requested(player));
        Ok(())
    }

    fn input_rejected(&mut self, error: &MoveError) -> Result<(), SessionError> {
        self.events.push(Event::Rejected(error.clone()));
        Ok(())
    }

    fn board_changed(&mut self, board: &Board) -> Result<(), SessionError> {
        self.events.push(Event::Board(board.clone()));
        Ok(())
    }

    fn game_over(&mut self, outcome: &Outcome) -> Result<(), SessionError> {
        self.events.push(Event::Over(*outcome));
        Ok(())
    }
}

fn play(source: &mut ScriptedMoves) -> (GameEngine, RecordingReporter, Outcome) {
    let mut game = GameEngine::new();
    let mut reporter = RecordingReporter::default();
    let outcome = game
        .run_game(source, &mut reporter)
        .expect("script finishes the game");
    (game, reporter, outcome)
}

fn cell(game: &GameEngine, index: i64) -> Cell {
    game.board().cell(Position::from_index(index).unwrap())
}

#[test]
fn test_top_row_win() {
    let mut source = ScriptedMoves::numbers(&[1, 5, 2, 6, 3]);
    let (game, reporter, outcome) = play(&mut source);

    assert_eq!(outcome, Outcome::Winner(Player::O));
    assert_eq!(game.status(), GameStatus::Won(Player::O));
    assert_eq!(game.board().render()[0], vec!['O', 'O', 'O']);
    assert_eq!(reporter.boards().len(), 5);
    assert_eq!(reporter.outcomes(), vec![Outcome::Winner(Player::O)]);
    assert_eq!(reporter.events.last(), Some(&Event::Over(outcome)));
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut source = ScriptedMoves::numbers(&[1, 5, 3, 2, 4, 6, 8, 7, 9]);
    let (game, reporter, outcome) = play(&mut source);

    assert_eq!(outcome, Outcome::Draw);
    assert!(game.board().is_full());
    assert_eq!(game.state().move_count(), 9);
    assert_eq!(reporter.boards().len(), 9);
    assert_eq!(reporter.outcomes(), vec![Outcome::Draw]);
}

#[test]
fn test_win_on_last_cell_beats_draw() {
    // O completes the 1-5-9 diagonal with the ninth move.
    let mut source = ScriptedMoves::numbers(&[1, 2, 3, 4, 5, 6, 8, 7, 9]);
    let (game, _reporter, outcome) = play(&mut source);

    assert!(game.board().is_full());
    assert_eq!(outcome, Outcome::Winner(Player::O));
}

#[test]
fn test_column_completed_early_ends_game() {
    // 1, 4, 7 go to the first player: a column on the fifth move.
    let mut source = ScriptedMoves::numbers(&[1, 2, 4, 5, 7, 9, 3, 8, 6]);
    let (game, _reporter, outcome) = play(&mut source);

    assert_eq!(outcome, Outcome::Winner(Player::O));
    assert_eq!(game.state().move_count(), 5);
    assert_eq!(source.answers.len(), 4);
}

#[test]
fn test_invalid_input_is_asked_again_without_changes() {
    let mut source = ScriptedMoves::new([
        MoveInput::NotANumber("five".into()),
        MoveInput::Number(0),
        MoveInput::Number(10),
        MoveInput::Number(5),
    ]);
    let mut game = GameEngine::new();
    let mut reporter = RecordingReporter::default();

    game.play_turn(&mut source, &mut reporter).unwrap();

    assert_eq!(
        reporter.rejections(),
        vec![
            &MoveError::NotANumber("five".into()),
            &MoveError::OutOfRange(0),
            &MoveError::OutOfRange(10),
        ]
    );
    assert_eq!(source.asked_by, vec![Player::O; 4]);
    assert_eq!(game.state().move_count(), 1);
    assert_eq!(game.board().empty_count(), 8);
    assert_eq!(cell(&game, 5), Cell::Occupied(Player::O));
    assert_eq!(game.state().current_player(), Player::X);
}

#[test]
fn test_occupied_cell_is_asked_again() {
    let mut source = ScriptedMoves::numbers(&[5, 5, 1]);
    let mut game = GameEngine::new();
    let mut reporter = RecordingReporter::default();

    game.play_turn(&mut source, &mut reporter).unwrap();
    let after_first = game.board().clone();
    game.play_turn(&mut source, &mut reporter).unwrap();

    assert_eq!(
        reporter.rejections(),
        vec![&MoveError::CellOccupied(Position::from_index(5).unwrap())]
    );
    // The taken cell keeps its original marker.
    assert_eq!(cell(&game, 5), Cell::Occupied(Player::O));
    assert_eq!(cell(&game, 1), Cell::Occupied(Player::X));
    assert_eq!(reporter.boards(), vec![&after_first, game.board()]);
    assert_eq!(source.asked_by, vec![Player::O, Player::X, Player::X]);
}

#[test]
fn test_players_strictly_alternate() {
    let mut source = ScriptedMoves::new([
        MoveInput::Number(1),
        MoveInput::Number(1),
        MoveInput::NotANumber("?".into()),
        MoveInput::Number(5),
        MoveInput::Number(99),
        MoveInput::Number(3),
        MoveInput::Number(2),
        MoveInput::Number(8),
        MoveInput::Number(4),
        MoveInput::Number(6),
        MoveInput::Number(9),
        MoveInput::Number(7),
    ]);
    let (game, _reporter, _outcome) = play(&mut source);

    let history = game.state().history();
    assert_eq!(history[0].player, Player::O);
    for pair in history.windows(2) {
        assert_ne!(pair[0].player, pair[1].player);
    }
}

#[test]
fn test_rejected_moves_never_reach_the_board() {
    let mut source = ScriptedMoves::new([
        MoveInput::Number(5),
        MoveInput::Number(-3),
        MoveInput::Number(5),
        MoveInput::NotANumber("".into()),
        MoveInput::Number(1),
    ]);
    let mut game = GameEngine::new();
    let mut reporter = RecordingReporter::default();

    game.play_turn(&mut source, &mut reporter).unwrap();
    game.play_turn(&mut source, &mut reporter).unwrap();

    let marks = Position::all()
        .filter(|&p| !game.board().is_empty(p))
        .count();
    assert_eq!(marks, 2);
    assert_eq!(reporter.rejections().len(), 3);
}

#[test]
fn test_closed_input_stops_the_loop() {
    let mut source = ScriptedMoves::numbers(&[1, 5, 2]);
    let mut game = GameEngine::new();
    let mut reporter = RecordingReporter::default();

    assert!(game.run_game(&mut source, &mut reporter).is_err());
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(reporter.outcomes().is_empty());
}

#[test]
fn test_new_engine_per_game() {
    let first = GameEngine::replay(&[1, 5, 2, 6, 3]).unwrap();
    assert!(first.status().is_terminal());

    let second = GameEngine::new();
    assert_eq!(second.status(), GameStatus::InProgress);
    assert_eq!(second.board(), &Board::new());
    assert_eq!(second.state().current_player(), Player::O);
}
