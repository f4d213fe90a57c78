//! Command representation and history records.
//!
//! Every change to a game goes through a `Command`. Commands are plain
//! data: they can be validated, applied, logged and replayed. Accepted
//! commands are stored as `ActionRecord`s so a finished game can be
//! reproduced from its config and history alone.

use serde::{Deserialize, Serialize};

use super::player::Player;
use crate::board::Side;

/// A single player action.
///
/// Coordinates are signed so that off-board input reaches the engine and
/// is rejected as `OutOfBounds` instead of wrapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Put an extra piece on an empty cell (placement phase).
    PlacePiece { x: i32, y: i32 },
    /// Select one of your pieces for this turn.
    SelectPiece { x: i32, y: i32 },
    /// Drop an unmoved selection.
    Deselect,
    /// Move the selected piece to one of its legal destinations.
    MoveSelected { x: i32, y: i32 },
    /// Build a wall on a side of the selected piece's cell, ending the turn.
    PlaceWall(Side),
    /// The turn clock ran out.
    Timeout,
    /// Throw the board away and start over.
    Restart,
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::PlacePiece { x, y } => write!(f, "place ({}, {})", x, y),
            Command::SelectPiece { x, y } => write!(f, "select ({}, {})", x, y),
            Command::Deselect => write!(f, "deselect"),
            Command::MoveSelected { x, y } => write!(f, "move ({}, {})", x, y),
            Command::PlaceWall(side) => write!(f, "wall {}", side),
            Command::Timeout => write!(f, "timeout"),
            Command::Restart => write!(f, "restart"),
        }
    }
}

/// A recorded command with metadata for history tracking.
///
/// Used for:
/// - Deterministic replay
/// - Debugging
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who issued the command.
    pub player: Player,

    /// The command that was accepted.
    pub command: Command,

    /// Turn number when the command was accepted.
    pub turn: u32,

    /// Sequence number within the game (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: Player, command: Command, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            command,
            turn,
            sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_display() {
        assert_eq!(Command::PlacePiece { x: 2, y: 3 }.to_string(), "place (2, 3)");
        assert_eq!(Command::PlaceWall(Side::Left).to_string(), "wall left");
        assert_eq!(Command::Timeout.to_string(), "timeout");
    }

    #[test]
    fn test_action_record() {
        let command = Command::SelectPiece { x: 1, y: 1 };
        let record = ActionRecord::new(Player::Red, command, 3, 5);

        assert_eq!(record.player, Player::Red);
        assert_eq!(record.command, command);
        assert_eq!(record.turn, 3);
        assert_eq!(record.sequence, 5);
    }

    #[test]
    fn test_action_record_serialization() {
        let record = ActionRecord::new(Player::Blue, Command::PlaceWall(Side::Bottom), 2, 3);

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
