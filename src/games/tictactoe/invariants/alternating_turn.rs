//! Alternating turn invariant: players alternate O, X, O, X, ...

use super::super::{FIRST_PLAYER, GameEngine};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history starts with the first player and never repeats a player
/// twice in a row. While the game is running, the player to move is the
/// one the history parity predicts.
pub struct AlternatingTurnInvariant;

impl Invariant<GameEngine> for AlternatingTurnInvariant {
    fn holds(game: &GameEngine) -> bool {
        let history = game.state().history();

        if let Some(first) = history.first()
            && first.player != FIRST_PLAYER
        {
            return false;
        }

        if history
            .windows(2)
            .any(|pair| pair[0].player == pair[1].player)
        {
            return false;
        }

        if game.status().is_terminal() {
            return true;
        }

        let expected_next = if history.len() % 2 == 0 {
            FIRST_PLAYER
        } else {
            FIRST_PLAYER.opponent()
        };
        game.state().current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns, first player moves first"
    }
}
