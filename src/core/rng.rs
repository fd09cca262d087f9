//! Deterministic random number generation.
//!
//! All randomness in the crate - the computer's throws and the sketch pad's
//! random paint color - flows through [`GameRng`], a seeded ChaCha8 stream.
//! The same seed replays the same match, which is what makes the otherwise
//! random computer opponent testable.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG wrapping ChaCha8.
///
/// ChaCha8 is fast and produces identical sequences across platforms, so a
/// logged seed is enough to reproduce a session exactly.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}
