//! Turn and phase state machine.
//!
//! ## Phases
//!
//! - `Placement`: extra pieces go on the board in the configured order
//!   (Red, Blue, Blue, Red by default).
//! - `Action`: the player to act selects an unacted piece, optionally
//!   moves it, then builds one wall next to it. That ends the turn.
//! - `GameOver`: every piece is walled in with its own kind. Only a
//!   restart leaves this phase.
//!
//! `GameState` exposes one method per command plus `apply`, which takes
//! a `Command` on behalf of a player.

mod phase;
mod state;

pub use phase::{Phase, Selection};
pub use state::GameState;
