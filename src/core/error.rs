//! Error types for rejected commands and invalid configuration.
//!
//! A `RuleError` is an ordinary outcome of a player trying something the
//! rules forbid. The engine returns it and leaves every piece of state
//! exactly as it was before the command.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::board::{Cell, Side};
use crate::game::Phase;

/// Why a command was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum RuleError {
    /// Coordinate outside the board.
    #[display("({}, {}) is outside a {}x{} board", x, y, size, size)]
    OutOfBounds { x: i32, y: i32, size: usize },

    /// Placement or move target already holds a piece.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Cell),

    /// Move target is not reachable by the selected piece this turn.
    #[display("Cell {} is not a legal destination", _0)]
    IllegalDestination(Cell),

    /// Command issued by a player whose turn it is not.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Player),

    /// Selected piece belongs to the other player.
    #[display("The piece at {} belongs to {}", _0, _1)]
    NotYourPiece(Cell, Player),

    /// Selected piece has already acted this round.
    #[display("The piece at {} has already acted this round", _0)]
    AlreadyActed(Cell),

    /// That side of the cell already carries a wall.
    #[display("A wall already stands on the {} side of {}", _1, _0)]
    WallAlreadyPresent(Cell, Side),

    /// Command is not valid in the current phase.
    #[display("Command not allowed during the {} phase", _0)]
    WrongPhase(Phase),

    /// The selected piece has moved and must build its wall first.
    #[display("The piece at {} has moved and must place a wall first", _0)]
    MustPlaceWallFirst(Cell),

    /// Selection attempted on an empty cell.
    #[display("No piece at {}", _0)]
    NoPieceAt(Cell),

    /// Move or wall command without a selected piece.
    #[display("No piece is selected")]
    NoSelection,
}

impl std::error::Error for RuleError {}

/// Why a `GameConfig` cannot start a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ConfigError {
    /// Board dimension must be at least 1.
    #[display("Board size must be at least 1")]
    EmptyBoard,

    /// Move budget must allow at least one step.
    #[display("Move budget must be at least 1")]
    ZeroMoveBudget,

    /// A starting piece lies outside the board.
    #[display("Starting piece at {} is outside a {}x{} board", _0, _1, _1)]
    StartOffBoard(Cell, usize),

    /// Two starting pieces share a cell.
    #[display("Two starting pieces share cell {}", _0)]
    StartOverlap(Cell),

    /// A config document could not be parsed.
    #[display("Invalid config document: {}", _0)]
    Parse(String),
}

impl std::error::Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_error_display() {
        let err = RuleError::OutOfBounds { x: 7, y: -1, size: 7 };
        assert_eq!(err.to_string(), "(7, -1) is outside a 7x7 board");

        let err = RuleError::WallAlreadyPresent(Cell::new(2, 3), Side::Top);
        assert_eq!(err.to_string(), "A wall already stands on the top side of (2, 3)");

        let err = RuleError::NotYourPiece(Cell::new(1, 5), Player::Blue);
        assert_eq!(err.to_string(), "The piece at (1, 5) belongs to Blue");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::StartOffBoard(Cell::new(5, 5), 4);
        assert_eq!(err.to_string(), "Starting piece at (5, 5) is outside a 4x4 board");
    }
}
