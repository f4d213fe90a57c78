//! Deterministic random number generation.
//!
//! The only random decision in Wall Go is the wall chosen when a turn
//! times out. The game owns a seeded `GameRng` so that the same seed and
//! the same command sequence always produce the same game.
//!
//! ```
//! use wall_go::board::Side;
//! use wall_go::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.choose(&Side::ALL), b.choose(&Side::ALL));
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Seeded stream that survives a save and load.
///
/// ChaCha8 gives the same sequence on every platform. Serialized as its
/// seed plus stream position, so a restored game draws exactly what the
/// original would have drawn next.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "GameRngState", into = "GameRngState")]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this stream started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick one element uniformly; `None` for an empty slice, which
    /// consumes nothing from the stream.
    pub fn choose<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        options.choose(&mut self.inner)
    }

    /// Seed and position, enough to rebuild this stream.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Rebuild a stream at a saved position.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Saved position of a `GameRng`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}

impl From<GameRngState> for GameRng {
    fn from(state: GameRngState) -> Self {
        GameRng::from_state(&state)
    }
}

impl From<GameRng> for GameRngState {
    fn from(rng: GameRng) -> Self {
        rng.state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Side;

    fn draws(rng: &mut GameRng, n: usize) -> Vec<Side> {
        (0..n).filter_map(|_| rng.choose(&Side::ALL).copied()).collect()
    }

    #[test]
    fn test_same_seed_same_walls() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);
        assert_eq!(draws(&mut a, 50), draws(&mut b, 50));
    }

    #[test]
    fn test_seeds_diverge() {
        let mut a = GameRng::new(1);
        let mut b = GameRng::new(2);
        assert_ne!(draws(&mut a, 20), draws(&mut b, 20));
    }

    #[test]
    fn test_every_side_can_come_up() {
        let mut rng = GameRng::new(7);
        let drawn = draws(&mut rng, 200);
        for side in Side::ALL {
            assert!(drawn.contains(&side));
        }
    }

    #[test]
    fn test_empty_choice_draws_nothing() {
        let mut rng = GameRng::new(3);
        let before = rng.state();
        let empty: [Side; 0] = [];

        assert!(rng.choose(&empty).is_none());
        assert_eq!(rng.state(), before);
    }

    #[test]
    fn test_restore_resumes_stream() {
        let mut rng = GameRng::new(42);
        draws(&mut rng, 13);

        let mut restored = GameRng::from_state(&rng.state());
        assert_eq!(draws(&mut rng, 10), draws(&mut restored, 10));
    }

    #[test]
    fn test_serde_resumes_stream() {
        let mut rng = GameRng::new(9);
        draws(&mut rng, 1);

        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: GameRng = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.seed(), 9);
        assert_eq!(draws(&mut rng, 5), draws(&mut restored, 5));
    }
}
