//! Phases and the per-turn selection.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, PieceId, Side, SideSet};
use crate::rules::legal_destinations;

/// Stage of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Extra pieces are being put on the board.
    Placement,
    /// Players take turns moving a piece and building a wall.
    Action,
    /// Every piece is walled in with its own kind. Terminal.
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Placement => "placement",
            Phase::Action => "action",
            Phase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// The piece chosen for the current turn and what it may still do.
///
/// Recomputed whenever the selection changes. Once the piece has moved,
/// its destinations are spent and only a wall can end the turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub piece: PieceId,
    /// Whether the move has been committed this turn.
    pub moved: bool,
    /// Where the piece may still go; empty after the move.
    pub destinations: Vec<Cell>,
    /// Free sides of the piece's current cell.
    pub wall_sides: SideSet,
}

impl Selection {
    pub(crate) fn new(board: &Board, piece: PieceId, budget: u8) -> Self {
        let cell = board.pieces().get(piece).map(|p| p.cell);
        Self {
            piece,
            moved: false,
            destinations: legal_destinations(board, piece, budget),
            wall_sides: cell.map(|c| board.available_sides(c)).unwrap_or_default(),
        }
    }

    /// Commit the move to `cell`, which the piece now occupies.
    pub(crate) fn commit_move(&mut self, board: &Board, cell: Cell) {
        self.moved = true;
        self.destinations.clear();
        self.wall_sides = board.available_sides(cell);
    }

    /// Whether `side` is still free for this turn's wall.
    #[must_use]
    pub fn can_wall(&self, side: Side) -> bool {
        self.wall_sides.contains(&side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Player;

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Placement.to_string(), "placement");
        assert_eq!(Phase::GameOver.to_string(), "game over");
    }

    #[test]
    fn test_selection_tracks_board() {
        let mut board = Board::new(7);
        let id = board.add_piece(Cell::new(0, 0), Player::Red).unwrap();
        board.add_wall(Cell::new(0, 0), Side::Top, Player::Blue);

        let mut selection = Selection::new(&board, id, 2);
        assert!(!selection.moved);
        assert_eq!(selection.destinations.len(), 6);
        assert!(!selection.can_wall(Side::Top));
        assert!(selection.can_wall(Side::Left));

        board.pieces_mut().move_to(id, Cell::new(1, 0));
        selection.commit_move(&board, Cell::new(1, 0));
        assert!(selection.moved);
        assert!(selection.destinations.is_empty());
        assert_eq!(selection.wall_sides.len(), 4);
    }
}
