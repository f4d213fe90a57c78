//! Final result of a game.

use serde::{Deserialize, Serialize};

use crate::core::Player;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Equal total territory and equal largest region.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(p) => write!(f, "{} wins", p),
            GameResult::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_result_is_winner() {
        let result = GameResult::Winner(Player::Blue);
        assert!(!result.is_winner(Player::Red));
        assert!(result.is_winner(Player::Blue));

        let draw = GameResult::Draw;
        assert!(!draw.is_winner(Player::Red));
        assert!(!draw.is_winner(Player::Blue));
    }

    #[test]
    fn test_display() {
        assert_eq!(GameResult::Winner(Player::Red).to_string(), "Red wins");
        assert_eq!(GameResult::Draw.to_string(), "Draw");
    }
}
