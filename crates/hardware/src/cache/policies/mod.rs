//! Cache Replacement Policies.
//!
//! Implements the algorithms for selecting victim lines in a full set.
//!
//! # Policies
//!
//! - `Lru`: Least Recently Used, driven by the per-line recency stamps.
//! - `Random`: Uniform selection from a seeded generator.

use std::fmt;

use crate::config::ReplacementPolicy as PolicyType;

/// Least Recently Used replacement policy.
pub mod lru;

/// Random replacement policy.
pub mod random;

pub use lru::LruPolicy;
pub use random::RandomPolicy;

/// Trait for cache replacement policies.
///
/// A policy is only consulted when a set is full. The set performs the scan and
/// hands over the least-recently-used candidate it found along the way, so a
/// policy never needs to inspect the lines itself.
pub trait ReplacementPolicy: fmt::Debug + Send + Sync {
    /// Selects a victim line to evict from a full set.
    ///
    /// # Arguments
    ///
    /// * `lru_way` - Way with the lowest recency stamp (first in scan order on ties).
    /// * `ways` - Associativity of the set.
    ///
    /// # Returns
    ///
    /// The index of the way to evict; must be `< ways`.
    fn get_victim(&mut self, lru_way: usize, ways: usize) -> usize;
}

/// Builds the policy selected by the configuration.
///
/// # Arguments
///
/// * `policy` - Configured policy type.
/// * `seed` - Seed for policies that draw random numbers; ignored by LRU.
pub fn build(policy: PolicyType, seed: u64) -> Box<dyn ReplacementPolicy + Send + Sync> {
    match policy {
        PolicyType::Lru => Box::new(LruPolicy),
        PolicyType::Random => Box::new(RandomPolicy::new(seed)),
    }
}
