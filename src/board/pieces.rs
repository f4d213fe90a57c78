//! Piece registry: positions, owners and per-round action status.
//!
//! Pieces are never removed, so a `PieceId` stays valid for the whole
//! game. The registry keeps an occupancy index so lookups by cell are
//! O(1) and at most one piece ever occupies a cell.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::grid::Cell;
use crate::core::Player;

/// Stable handle to a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u16);

impl PieceId {
    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub cell: Cell,
    pub owner: Player,
    /// Completed its move and wall this round.
    pub has_acted: bool,
}

impl Piece {
    #[must_use]
    pub fn new(cell: Cell, owner: Player) -> Self {
        Self {
            cell,
            owner,
            has_acted: false,
        }
    }
}

/// All pieces of one game.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Piece>", into = "Vec<Piece>")]
pub struct PieceRegistry {
    pieces: Vec<Piece>,

    /// Cell -> occupying piece.
    occupancy: FxHashMap<Cell, PieceId>,
}

impl PieceRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a piece and return its id.
    ///
    /// Returns `None` if the cell is already occupied.
    pub fn add(&mut self, piece: Piece) -> Option<PieceId> {
        if self.occupancy.contains_key(&piece.cell) {
            return None;
        }
        let id = PieceId(self.pieces.len() as u16);
        self.occupancy.insert(piece.cell, id);
        self.pieces.push(piece);
        Some(id)
    }

    /// Get a piece by id.
    #[must_use]
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id.index())
    }

    /// Id of the piece on `cell`, if any.
    #[must_use]
    pub fn id_at(&self, cell: Cell) -> Option<PieceId> {
        self.occupancy.get(&cell).copied()
    }

    /// The piece on `cell`, if any.
    #[must_use]
    pub fn piece_at(&self, cell: Cell) -> Option<&Piece> {
        self.id_at(cell).and_then(|id| self.get(id))
    }

    /// Whether a piece stands on `cell`.
    #[must_use]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupancy.contains_key(&cell)
    }

    /// All pieces of `owner`, in creation order.
    pub fn pieces_of(&self, owner: Player) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(move |p| p.owner == owner)
    }

    /// Every piece with its id, in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.pieces
            .iter()
            .enumerate()
            .map(|(i, p)| (PieceId(i as u16), p))
    }

    /// Number of pieces.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// Whether the registry holds no pieces.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Move a piece to an empty cell.
    ///
    /// Moving onto the piece's own cell is a no-op. Returns `false` if the
    /// id is unknown or another piece holds the target.
    pub fn move_to(&mut self, id: PieceId, cell: Cell) -> bool {
        let Some(from) = self.get(id).map(|p| p.cell) else {
            return false;
        };
        if from == cell {
            return true;
        }
        if self.occupancy.contains_key(&cell) {
            return false;
        }
        self.occupancy.remove(&from);
        self.occupancy.insert(cell, id);
        self.pieces[id.index()].cell = cell;
        true
    }

    /// Flag a piece as having acted this round.
    pub fn mark_acted(&mut self, id: PieceId) {
        if let Some(piece) = self.pieces.get_mut(id.index()) {
            piece.has_acted = true;
        }
    }

    /// Whether every piece of `owner` has acted.
    #[must_use]
    pub fn all_acted(&self, owner: Player) -> bool {
        self.pieces_of(owner).all(|p| p.has_acted)
    }

    /// Start a new round for `owner`.
    pub fn reset_actions(&mut self, owner: Player) {
        for piece in self.pieces.iter_mut().filter(|p| p.owner == owner) {
            piece.has_acted = false;
        }
    }
}

impl From<Vec<Piece>> for PieceRegistry {
    fn from(pieces: Vec<Piece>) -> Self {
        let mut registry = PieceRegistry::new();
        for piece in pieces {
            registry.add(piece);
        }
        registry
    }
}

impl From<PieceRegistry> for Vec<Piece> {
    fn from(registry: PieceRegistry) -> Self {
        registry.pieces
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_lookup() {
        let mut registry = PieceRegistry::new();
        let id = registry.add(Piece::new(Cell::new(2, 3), Player::Red)).unwrap();

        assert_eq!(registry.id_at(Cell::new(2, 3)), Some(id));
        assert_eq!(registry.piece_at(Cell::new(2, 3)).map(|p| p.owner), Some(Player::Red));
        assert!(registry.piece_at(Cell::new(4, 5)).is_none());
        assert!(!registry.get(id).unwrap().has_acted);
    }

    #[test]
    fn test_add_rejects_occupied_cell() {
        let mut registry = PieceRegistry::new();
        registry.add(Piece::new(Cell::new(1, 1), Player::Red));

        assert!(registry.add(Piece::new(Cell::new(1, 1), Player::Blue)).is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_pieces_of() {
        let mut registry = PieceRegistry::new();
        registry.add(Piece::new(Cell::new(1, 1), Player::Red));
        registry.add(Piece::new(Cell::new(2, 2), Player::Red));
        registry.add(Piece::new(Cell::new(3, 3), Player::Blue));

        assert_eq!(registry.pieces_of(Player::Red).count(), 2);
        assert_eq!(registry.pieces_of(Player::Blue).count(), 1);
    }

    #[test]
    fn test_move_keeps_identity() {
        let mut registry = PieceRegistry::new();
        let id = registry.add(Piece::new(Cell::new(1, 1), Player::Red)).unwrap();
        registry.add(Piece::new(Cell::new(3, 3), Player::Blue));

        assert!(registry.move_to(id, Cell::new(1, 2)));
        assert_eq!(registry.id_at(Cell::new(1, 2)), Some(id));
        assert!(!registry.is_occupied(Cell::new(1, 1)));

        assert!(!registry.move_to(id, Cell::new(3, 3)));
        assert_eq!(registry.get(id).unwrap().cell, Cell::new(1, 2));
    }

    #[test]
    fn test_action_flags() {
        let mut registry = PieceRegistry::new();
        let a = registry.add(Piece::new(Cell::new(1, 1), Player::Red)).unwrap();
        let b = registry.add(Piece::new(Cell::new(2, 2), Player::Red)).unwrap();
        let c = registry.add(Piece::new(Cell::new(3, 3), Player::Blue)).unwrap();

        registry.mark_acted(a);
        assert!(!registry.all_acted(Player::Red));
        registry.mark_acted(b);
        registry.mark_acted(c);
        assert!(registry.all_acted(Player::Red));

        registry.reset_actions(Player::Red);
        assert!(!registry.get(a).unwrap().has_acted);
        assert!(!registry.get(b).unwrap().has_acted);
        assert!(registry.get(c).unwrap().has_acted);
    }
}
