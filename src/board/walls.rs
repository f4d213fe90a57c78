//! Wall ledger: which cell edges carry a wall and who built it.
//!
//! A wall is identified by the physical edge it stands on, never by its
//! builder. The RIGHT side of `(x, y)` and the LEFT side of `(x + 1, y)`
//! are the same edge, so the first placement on either claims it and the
//! wall blocks the crossing in both directions.
//!
//! Walls are permanent: the ledger has no removal operation.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::{Cell, Direction, Side};
use crate::core::Player;

/// A wall as it was placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    /// Cell the wall was built on.
    pub cell: Cell,
    /// Side of that cell.
    pub side: Side,
    /// Builder; attribution only, never part of identity.
    pub owner: Player,
}

/// Sides of one cell, at most four.
pub type SideSet = SmallVec<[Side; 4]>;

/// Canonical key of the edge behind `(cell, side)`.
///
/// Interior edges are keyed from the cell above or to the left, so the
/// two names of a shared edge map to one key. Border edges keep their
/// own name.
fn edge_key(cell: Cell, side: Side) -> (Cell, Side) {
    match side {
        Side::Left if cell.x > 0 => (Cell::new(cell.x - 1, cell.y), Side::Right),
        Side::Top if cell.y > 0 => (Cell::new(cell.x, cell.y - 1), Side::Bottom),
        _ => (cell, side),
    }
}

/// Every wall on the board, keyed by edge.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Wall>", into = "Vec<Wall>")]
pub struct WallLedger {
    /// Walls in placement order.
    walls: Vec<Wall>,

    /// Edge key -> index into `walls`.
    by_edge: FxHashMap<(Cell, Side), usize>,
}

impl WallLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a wall on `side` of `cell`.
    ///
    /// Returns `false` and changes nothing if the edge already carries a
    /// wall, whoever built it.
    pub fn add_wall(&mut self, cell: Cell, side: Side, owner: Player) -> bool {
        let key = edge_key(cell, side);
        if self.by_edge.contains_key(&key) {
            return false;
        }
        self.by_edge.insert(key, self.walls.len());
        self.walls.push(Wall { cell, side, owner });
        true
    }

    /// Whether `side` of `cell` carries a wall, regardless of owner.
    #[must_use]
    pub fn has_wall(&self, cell: Cell, side: Side) -> bool {
        self.by_edge.contains_key(&edge_key(cell, side))
    }

    /// The wall standing on `side` of `cell`, as originally placed.
    #[must_use]
    pub fn wall_at(&self, cell: Cell, side: Side) -> Option<&Wall> {
        self.by_edge
            .get(&edge_key(cell, side))
            .map(|&i| &self.walls[i])
    }

    /// Sides of `cell` without a wall, in `Side::ALL` order.
    ///
    /// Border sides are included: the board edge stops movement but does
    /// not stop a player from building there.
    #[must_use]
    pub fn available_sides(&self, cell: Cell) -> SideSet {
        Side::ALL
            .into_iter()
            .filter(|&side| !self.has_wall(cell, side))
            .collect()
    }

    /// Whether a single step from `from` to `to` is free of walls.
    ///
    /// Non-adjacent pairs can never be crossed in one step. Bounds are
    /// the caller's concern.
    #[must_use]
    pub fn can_cross(&self, from: Cell, to: Cell) -> bool {
        match Direction::between(from, to) {
            Some(direction) => !self.has_wall(from, direction.side()),
            None => false,
        }
    }

    /// Walls in placement order.
    pub fn walls(&self) -> impl Iterator<Item = &Wall> {
        self.walls.iter()
    }

    /// Number of walls.
    #[must_use]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    /// Whether no wall has been built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }
}

impl From<Vec<Wall>> for WallLedger {
    fn from(walls: Vec<Wall>) -> Self {
        let mut ledger = WallLedger::new();
        for wall in walls {
            ledger.add_wall(wall.cell, wall.side, wall.owner);
        }
        ledger
    }
}

impl From<WallLedger> for Vec<Wall> {
    fn from(ledger: WallLedger) -> Self {
        ledger.walls
    }
}
