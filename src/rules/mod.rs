//! Game rules over a board.
//!
//! - `movement`: legal destinations within the move budget
//! - `territory`: wall-bounded regions, game over, scoring, winner
//! - `result`: the final `GameResult`
//!
//! Everything here is a pure function of a `Board`; the game state
//! machine decides when to ask.

pub mod movement;
pub mod territory;
pub mod result;

pub use movement::{legal_destinations, reachable_from, DEFAULT_MOVE_BUDGET};
pub use result::GameResult;
pub use territory::{is_game_over, partition, Claim, Region, Territory};
