//! Seeded randomness for automated players.
//!
//! A match seeds one root stream and forks a stream per seat, so adding or
//! removing a seat never perturbs the choices of the others. The stream
//! position can be captured and restored, which lets a paused simulated
//! match resume with exactly the choices it would have made.
//!
//! ```
//! use supersymmetry::core::GameRng;
//!
//! let mut root = GameRng::new(42);
//! let mut seat = root.fork();
//!
//! let mut again = GameRng::new(42).fork();
//! let cells = [1, 2, 3, 4, 5, 6];
//! assert_eq!(seat.choose(&cells), again.choose(&cells));
//! ```

use rand::{seq::SliceRandom, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Golden-ratio increment spreading fork seeds across the seed space.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream that remembers its seed and how often it forked.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Split off an independent stream. The k-th fork of a given seed is
    /// always the same stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// `true` with the given probability, clamped to `[0, 1]`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability.clamp(0.0, 1.0))
    }

    /// A uniformly chosen element, `None` on an empty slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }

    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            forks: self.forks,
        }
    }

    /// Resume a stream exactly where [`GameRng::state`] captured it.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            forks: state.forks,
        }
    }
}

/// Captured stream position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
    pub forks: u64,
}
