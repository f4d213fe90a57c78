//! Movement engine: where a piece may go this turn.
//!
//! A piece takes up to `budget` orthogonal steps. Each step must stay on
//! the board, land on an empty cell and not cross a wall. Staying put is
//! always legal. This is a hop-limited expansion, not pathfinding: a
//! cell further than `budget` steps away is never a destination, however
//! open the board is.

use rustc_hash::FxHashSet;

use crate::board::{Board, Cell, PieceId};

/// Standard movement budget.
pub const DEFAULT_MOVE_BUDGET: u8 = 2;

/// Cells reachable from `start` in at most `budget` steps.
///
/// The start cell comes first, followed by cells in the order they were
/// discovered (one-step cells before two-step cells).
#[must_use]
pub fn reachable_from(board: &Board, start: Cell, budget: u8) -> Vec<Cell> {
    let mut destinations = vec![start];
    let mut seen = FxHashSet::default();
    seen.insert(start);

    let mut frontier = vec![start];
    for _ in 0..budget {
        let mut next = Vec::new();
        for &cell in &frontier {
            for (_, neighbor) in cell.neighbors(board.size()) {
                if seen.contains(&neighbor)
                    || board.is_occupied(neighbor)
                    || !board.walls().can_cross(cell, neighbor)
                {
                    continue;
                }
                seen.insert(neighbor);
                destinations.push(neighbor);
                next.push(neighbor);
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    destinations
}

/// Legal destinations of a piece, its own cell included.
///
/// Unknown ids have no destinations.
#[must_use]
pub fn legal_destinations(board: &Board, piece: PieceId, budget: u8) -> Vec<Cell> {
    match board.pieces().get(piece) {
        Some(p) => reachable_from(board, p.cell, budget),
        None => Vec::new(),
    }
}
