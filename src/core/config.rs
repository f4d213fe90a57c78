//! Game configuration.
//!
//! `GameConfig` fixes everything a session needs before the first
//! command: board dimension, the pieces already on the board, who owns
//! each extra placement, the movement budget, the turn time limit and
//! the RNG seed used by the timeout wall.
//!
//! Defaults reproduce the standard game:
//!
//! ```
//! use wall_go::core::{GameConfig, Player};
//!
//! let config = GameConfig::default();
//! assert_eq!(config.board_size, 7);
//! assert_eq!(config.move_budget, 2);
//! assert_eq!(
//!     config.placement_order,
//!     vec![Player::Red, Player::Blue, Player::Blue, Player::Red],
//! );
//! assert!(config.validate().is_ok());
//! ```

use std::time::Duration;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::Player;
use crate::board::Cell;

/// Board dimension of the standard game.
pub const DEFAULT_BOARD_SIZE: usize = 7;

/// A piece present on the board before placement starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingPiece {
    pub cell: Cell,
    pub owner: Player,
}

impl StartingPiece {
    #[must_use]
    pub const fn new(x: usize, y: usize, owner: Player) -> Self {
        Self {
            cell: Cell::new(x, y),
            owner,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width and height of the square board (default: 7).
    pub board_size: usize,

    /// Pieces on the board when a game starts.
    /// Default: Red at (1,1) and (5,5), Blue at (1,5) and (5,1).
    pub starting_pieces: Vec<StartingPiece>,

    /// Owner of each extra piece placed during the placement phase, in order.
    /// Default: Red, Blue, Blue, Red.
    pub placement_order: Vec<Player>,

    /// Maximum steps a piece may take in one turn (default: 2).
    pub move_budget: u8,

    /// Time a player has to finish a turn (default: 90 seconds).
    pub turn_time_limit: Duration,

    /// Seed for the timeout wall RNG.
    /// Same seed and commands produce the same game.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            starting_pieces: vec![
                StartingPiece::new(1, 1, Player::Red),
                StartingPiece::new(5, 5, Player::Red),
                StartingPiece::new(1, 5, Player::Blue),
                StartingPiece::new(5, 1, Player::Blue),
            ],
            placement_order: vec![Player::Red, Player::Blue, Player::Blue, Player::Red],
            move_budget: 2,
            turn_time_limit: Duration::from_secs(90),
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Parse a config from TOML. Missing keys keep their defaults.
    ///
    /// ```
    /// use wall_go::core::GameConfig;
    ///
    /// let config = GameConfig::from_toml_str("seed = 7\nmove_budget = 3").unwrap();
    /// assert_eq!(config.seed, 7);
    /// assert_eq!(config.move_budget, 3);
    /// assert_eq!(config.board_size, 7);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that a game can be started from this config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::EmptyBoard);
        }
        if self.move_budget == 0 {
            return Err(ConfigError::ZeroMoveBudget);
        }

        let mut seen = FxHashSet::default();
        for start in &self.starting_pieces {
            if start.cell.x >= self.board_size || start.cell.y >= self.board_size {
                return Err(ConfigError::StartOffBoard(start.cell, self.board_size));
            }
            if !seen.insert(start.cell) {
                return Err(ConfigError::StartOverlap(start.cell));
            }
        }

        Ok(())
    }

    /// Set the board dimension.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Replace the starting pieces.
    #[must_use]
    pub fn with_starting_pieces(mut self, pieces: Vec<StartingPiece>) -> Self {
        self.starting_pieces = pieces;
        self
    }

    /// Replace the placement order.
    #[must_use]
    pub fn with_placement_order(mut self, order: Vec<Player>) -> Self {
        self.placement_order = order;
        self
    }

    /// Set the movement budget.
    #[must_use]
    pub fn with_move_budget(mut self, budget: u8) -> Self {
        self.move_budget = budget;
        self
    }

    /// Set the turn time limit.
    #[must_use]
    pub fn with_turn_time_limit(mut self, limit: Duration) -> Self {
        self.turn_time_limit = limit;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
