//! Random Replacement Policy.
//!
//! This policy evicts a uniformly chosen line from the set. One generator is
//! shared by every set of a cache and seeded once, so a run replays exactly
//! given the same seed and trace.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::ReplacementPolicy;

/// Random Policy state.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    /// Generator consumed once per eviction, in trace order.
    rng: ChaCha8Rng,
}

impl RandomPolicy {
    /// Creates a new Random policy instance.
    ///
    /// # Arguments
    ///
    /// * `seed` - Seed for the victim generator.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl ReplacementPolicy for RandomPolicy {
    /// Draws a way uniformly from `[0, ways)`.
    fn get_victim(&mut self, _lru_way: usize, ways: usize) -> usize {
        self.rng.gen_range(0..ways.max(1))
    }
}
