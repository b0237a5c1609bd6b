//! Draw detection logic for tic-tac-toe.

use super::super::Board;
use super::win::check_winner;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board with no winner is a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Player, Position};

    fn fill(board: &mut Board, moves: &[(i64, Player)]) {
        for &(index, player) in moves {
            board
                .place(Position::from_index(index).unwrap(), player)
                .unwrap();
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        fill(&mut board, &[(5, Player::X)]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        fill(
            &mut board,
            &[
                (1, Player::X),
                (2, Player::O),
                (3, Player::X),
                (4, Player::O),
                (5, Player::X),
                (6, Player::X),
                (7, Player::O),
                (8, Player::X),
                (9, Player::O),
            ],
        );
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        fill(
            &mut board,
            &[
                (1, Player::X),
                (2, Player::X),
                (3, Player::X),
                (4, Player::O),
                (5, Player::O),
            ],
        );
        assert!(!is_draw(&board));
    }
}
