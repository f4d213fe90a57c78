//! Board representation: grid geometry, walls and pieces.
//!
//! ## Key Types
//!
//! - `Cell`, `Side`, `Direction`: grid geometry (`grid`)
//! - `WallLedger`: permanent walls keyed by edge (`walls`)
//! - `PieceRegistry`: piece positions and action flags (`pieces`)
//! - `Board`: one game's walls and pieces on an `N`×`N` grid
//!
//! Nothing derived from the board (territory, game over) is stored here;
//! the rules recompute it on demand.

pub mod grid;
pub mod walls;
pub mod pieces;

pub use grid::{in_bounds, is_adjacent, opposite, Cell, Direction, Side};
pub use pieces::{Piece, PieceId, PieceRegistry};
pub use walls::{SideSet, Wall, WallLedger};

use serde::{Deserialize, Serialize};

use crate::core::{Player, RuleError};

/// The walls and pieces of one game.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    walls: WallLedger,
    pieces: PieceRegistry,
}

impl Board {
    /// Create an empty `size`×`size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            walls: WallLedger::new(),
            pieces: PieceRegistry::new(),
        }
    }

    /// Board dimension.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    /// Whether `cell` lies on the board.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x < self.size && cell.y < self.size
    }

    /// Convert raw coordinates into a cell on this board.
    pub fn cell(&self, x: i32, y: i32) -> Result<Cell, RuleError> {
        if in_bounds(i64::from(x), i64::from(y), self.size) {
            Ok(Cell::new(x as usize, y as usize))
        } else {
            Err(RuleError::OutOfBounds { x, y, size: self.size })
        }
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Cell::new(x, y)))
    }

    // === Walls ===

    /// The wall ledger.
    #[must_use]
    pub fn walls(&self) -> &WallLedger {
        &self.walls
    }

    /// Build a wall. Returns `false` if the edge already carries one.
    pub fn add_wall(&mut self, cell: Cell, side: Side, owner: Player) -> bool {
        self.walls.add_wall(cell, side, owner)
    }

    /// Whether `side` of `cell` carries a wall.
    #[must_use]
    pub fn has_wall(&self, cell: Cell, side: Side) -> bool {
        self.walls.has_wall(cell, side)
    }

    /// Sides of `cell` still free for a wall.
    #[must_use]
    pub fn available_sides(&self, cell: Cell) -> SideSet {
        self.walls.available_sides(cell)
    }

    /// Whether a piece could step from `from` to `to`, ignoring occupancy:
    /// both on the board, adjacent, and no wall between them.
    #[must_use]
    pub fn can_move_between(&self, from: Cell, to: Cell) -> bool {
        self.contains(from) && self.contains(to) && self.walls.can_cross(from, to)
    }

    // === Pieces ===

    /// The piece registry.
    #[must_use]
    pub fn pieces(&self) -> &PieceRegistry {
        &self.pieces
    }

    pub(crate) fn pieces_mut(&mut self) -> &mut PieceRegistry {
        &mut self.pieces
    }

    /// Put a new piece on the board.
    ///
    /// Returns `None` if the cell is off the board or occupied.
    pub fn add_piece(&mut self, cell: Cell, owner: Player) -> Option<PieceId> {
        if !self.contains(cell) {
            return None;
        }
        self.pieces.add(Piece::new(cell, owner))
    }

    /// The piece on `cell`, if any.
    #[must_use]
    pub fn piece_at(&self, cell: Cell) -> Option<&Piece> {
        self.pieces.piece_at(cell)
    }

    /// Whether a piece stands on `cell`.
    #[must_use]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.pieces.is_occupied(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_conversion() {
        let board = Board::new(7);
        assert_eq!(board.cell(3, 4), Ok(Cell::new(3, 4)));
        assert_eq!(board.cell(7, 0), Err(RuleError::OutOfBounds { x: 7, y: 0, size: 7 }));
        assert_eq!(board.cell(-1, 3), Err(RuleError::OutOfBounds { x: -1, y: 3, size: 7 }));
    }

    #[test]
    fn test_cells_row_major() {
        let board = Board::new(3);
        let cells: Vec<_> = board.cells().collect();
        assert_eq!(cells.len(), 9);
        assert_eq!(cells[0], Cell::new(0, 0));
        assert_eq!(cells[1], Cell::new(1, 0));
        assert_eq!(cells[3], Cell::new(0, 1));
    }

    #[test]
    fn test_can_move_between() {
        let mut board = Board::new(7);
        assert!(board.can_move_between(Cell::new(2, 3), Cell::new(3, 3)));
        assert!(board.can_move_between(Cell::new(2, 4), Cell::new(2, 3)));
        assert!(!board.can_move_between(Cell::new(2, 3), Cell::new(4, 3)));
        assert!(!board.can_move_between(Cell::new(6, 3), Cell::new(7, 3)));

        board.add_wall(Cell::new(3, 3), Side::Top, Player::Red);
        assert!(!board.can_move_between(Cell::new(3, 3), Cell::new(3, 2)));
        assert!(!board.can_move_between(Cell::new(3, 2), Cell::new(3, 3)));
    }

    #[test]
    fn test_add_piece() {
        let mut board = Board::new(7);
        assert!(board.add_piece(Cell::new(2, 2), Player::Red).is_some());
        assert!(board.add_piece(Cell::new(2, 2), Player::Blue).is_none());
        assert!(board.add_piece(Cell::new(9, 2), Player::Blue).is_none());
        assert!(board.is_occupied(Cell::new(2, 2)));
        assert_eq!(board.pieces().len(), 1);
    }
}
