//! Territory analyzer: regions, ownership, game over and scoring.
//!
//! The board is split into regions by a flood fill that never crosses a
//! wall. A region belongs to a player only when every piece inside it is
//! theirs; a single enemy piece voids the claim on the whole region, and
//! a region without pieces belongs to nobody.
//!
//! Nothing here is cached. `Territory::analyze` rescans the whole grid,
//! which is bounded by `N²` and cheap at the board sizes played.
//!
//! ## Example
//!
//! ```
//! use wall_go::board::{Board, Cell, Side};
//! use wall_go::core::Player;
//! use wall_go::rules::Territory;
//!
//! let mut board = Board::new(7);
//! board.add_piece(Cell::new(1, 1), Player::Red);
//! for side in Side::ALL {
//!     board.add_wall(Cell::new(1, 1), side, Player::Red);
//! }
//!
//! let territory = Territory::analyze(&board);
//! assert_eq!(territory.regions().len(), 2);
//! assert_eq!(territory.score(Player::Red), 1);
//! assert!(territory.is_game_over());
//! ```

use serde::{Deserialize, Serialize};

use super::result::GameResult;
use crate::board::{Board, Cell};
use crate::core::{Player, PlayerMap};

/// Who a region counts for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Claim {
    /// No pieces inside.
    Empty,
    /// Only this player's pieces inside.
    Owned(Player),
    /// Pieces of both players inside.
    Contested,
}

/// A maximal set of cells connected without crossing a wall.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Cells in flood-fill order.
    pub cells: Vec<Cell>,
    pub claim: Claim,
    /// Number of pieces standing in the region.
    pub piece_count: usize,
}

impl Region {
    /// Number of cells.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// The owning player, if the region is singly owned.
    #[must_use]
    pub fn owner(&self) -> Option<Player> {
        match self.claim {
            Claim::Owned(p) => Some(p),
            Claim::Empty | Claim::Contested => None,
        }
    }
}

/// A partition of the board into regions with their claims.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Territory {
    size: usize,
    regions: Vec<Region>,
    /// Region index per cell, row-major.
    region_ids: Vec<usize>,
    total_pieces: usize,
}

impl Territory {
    /// Flood-fill the board and attribute every region.
    #[must_use]
    pub fn analyze(board: &Board) -> Self {
        let size = board.size();
        let mut region_ids = vec![usize::MAX; board.cell_count()];
        let mut regions = Vec::new();

        for start in board.cells() {
            if region_ids[start.index(size)] != usize::MAX {
                continue;
            }

            let id = regions.len();
            let mut cells = Vec::new();
            let mut stack = vec![start];
            region_ids[start.index(size)] = id;

            while let Some(cell) = stack.pop() {
                cells.push(cell);
                for (_, neighbor) in cell.neighbors(size) {
                    let slot = &mut region_ids[neighbor.index(size)];
                    if *slot == usize::MAX && board.walls().can_cross(cell, neighbor) {
                        *slot = id;
                        stack.push(neighbor);
                    }
                }
            }

            regions.push(Region {
                cells,
                claim: Claim::Empty,
                piece_count: 0,
            });
        }

        for (_, piece) in board.pieces().iter() {
            let region = &mut regions[region_ids[piece.cell.index(size)]];
            region.piece_count += 1;
            region.claim = match region.claim {
                Claim::Empty => Claim::Owned(piece.owner),
                Claim::Owned(owner) if owner == piece.owner => Claim::Owned(owner),
                Claim::Owned(_) | Claim::Contested => Claim::Contested,
            };
        }

        Self {
            size,
            regions,
            region_ids,
            total_pieces: board.pieces().len(),
        }
    }

    /// All regions; together they cover every cell exactly once.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// The region containing `cell`.
    #[must_use]
    pub fn region_of(&self, cell: Cell) -> Option<&Region> {
        if cell.x >= self.size || cell.y >= self.size {
            return None;
        }
        self.regions.get(self.region_ids[cell.index(self.size)])
    }

    /// Regions owned by `player`.
    pub fn regions_of(&self, player: Player) -> impl Iterator<Item = &Region> {
        self.regions
            .iter()
            .filter(move |r| r.owner() == Some(player))
    }

    /// True once every piece sits in a region holding only its own
    /// player's pieces.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        let settled: usize = self
            .regions
            .iter()
            .filter(|r| r.owner().is_some())
            .map(|r| r.piece_count)
            .sum();
        settled == self.total_pieces
    }

    /// Total size of the regions owned by `player`.
    #[must_use]
    pub fn score(&self, player: Player) -> usize {
        self.regions_of(player).map(Region::size).sum()
    }

    /// Scores of both players.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<usize> {
        PlayerMap::new(|p| self.score(p))
    }

    /// Size of the largest region owned by `player`, 0 if none.
    #[must_use]
    pub fn largest_region(&self, player: Player) -> usize {
        self.regions_of(player).map(Region::size).max().unwrap_or(0)
    }

    /// Compare total score, then the largest single region; otherwise draw.
    #[must_use]
    pub fn winner(&self) -> GameResult {
        let red = (self.score(Player::Red), self.largest_region(Player::Red));
        let blue = (self.score(Player::Blue), self.largest_region(Player::Blue));

        match red.cmp(&blue) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::Red),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Blue),
            std::cmp::Ordering::Equal => GameResult::Draw,
        }
    }
}

/// Partition `board` into regions.
#[must_use]
pub fn partition(board: &Board) -> Territory {
    Territory::analyze(board)
}

/// Whether every piece on `board` has been walled off with its own kind.
#[must_use]
pub fn is_game_over(board: &Board) -> bool {
    Territory::analyze(board).is_game_over()
}
