//! # wall-go
//!
//! A rules engine for Wall Go, a two-player territory game on a square
//! grid of cells separated by walls.
//!
//! ## Design Principles
//!
//! 1. **Rules Only**: No rendering, input handling or clock. Callers feed
//!    `Command`s in and read state back out.
//!
//! 2. **All-or-Nothing Commands**: A rejected command returns a
//!    `RuleError` and leaves the game exactly as it was.
//!
//! 3. **Reproducible**: The only randomness is the timeout wall, drawn from
//!    a seeded `GameRng`. Same config and same commands give the same game.
//!
//! ## Modules
//!
//! - `core`: players, configuration, commands, errors, RNG
//! - `board`: grid geometry, the wall ledger and the piece registry
//! - `rules`: movement, territory analysis, scoring and the winner
//! - `game`: the placement → action → game over state machine

pub mod core;
pub mod board;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    Player, PlayerMap,
    GameRng, GameRngState,
    GameConfig, StartingPiece,
    Command, ActionRecord,
    ConfigError, RuleError,
};

pub use crate::board::{Board, Cell, Direction, Piece, PieceId, Side, Wall, WallLedger};

pub use crate::rules::{Claim, GameResult, Region, Territory};

pub use crate::game::{GameState, Phase, Selection};
