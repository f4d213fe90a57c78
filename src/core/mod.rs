//! Core engine types: players, RNG, configuration, errors, commands.
//!
//! These are the building blocks shared by the board, the rules and the
//! game state machine.

pub mod player;
pub mod rng;
pub mod config;
pub mod error;
pub mod action;

pub use player::{Player, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, StartingPiece, DEFAULT_BOARD_SIZE};
pub use error::{ConfigError, RuleError};
pub use action::{ActionRecord, Command};
