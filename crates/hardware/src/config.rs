//! Configuration system for the cache simulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Baseline cache dimensions used when a field is omitted.
//! 2. **Structures:** The user-facing [`CacheConfig`] and the validated [`CacheGeometry`].
//! 3. **Enums:** The replacement policy selector.
//!
//! Configuration is supplied from the command line or as JSON; either way it must
//! pass [`CacheConfig::validate`] before a simulator can be built.

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::addr::floor_log2;
use crate::common::constants::BYTES_PER_KB;
use crate::common::error::ConfigError;

/// Default configuration values applied to omitted JSON fields.
mod defaults {
    /// Default cache capacity in kilobytes (4 KiB).
    pub const CAPACITY_KB: u64 = 4;

    /// Default associativity (1 way = direct-mapped).
    pub const ASSOCIATIVITY: u64 = 1;

    /// Default block size in bytes (64 bytes).
    ///
    /// Matches typical modern processor cache line sizes.
    pub const BLOCK_SIZE: u64 = 64;
}

/// Cache replacement policy algorithms.
///
/// Specifies the algorithm used to select which line to evict when a new
/// block must be installed in a full set.
///
/// Deserialization accepts the same case-insensitive tokens as [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum ReplacementPolicy {
    /// Least Recently Used replacement policy.
    ///
    /// Evicts the line whose recency stamp is the oldest in its set.
    #[default]
    Lru,
    /// Random replacement policy.
    ///
    /// Evicts a uniformly chosen line from the set.
    Random,
}

impl FromStr for ReplacementPolicy {
    type Err = ConfigError;

    /// Parses a case-insensitive policy token (`l`, `lru`, `r`, `random`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "l" | "lru" => Ok(Self::Lru),
            "r" | "random" => Ok(Self::Random),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

impl TryFrom<String> for ReplacementPolicy {
    type Error = ConfigError;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lru => write!(f, "LRU"),
            Self::Random => write!(f, "RANDOM"),
        }
    }
}

/// Root configuration structure for a simulation run.
///
/// # Examples
///
/// ```
/// use cachesim_core::config::{CacheConfig, ReplacementPolicy};
///
/// let config = CacheConfig::from_json(
///     r#"{ "capacity_kb": 1, "associativity": 1, "block_size": 16, "policy": "l" }"#,
/// )
/// .unwrap();
/// assert_eq!(config.policy, ReplacementPolicy::Lru);
///
/// let geometry = config.validate().unwrap();
/// assert_eq!(geometry.num_sets, 64);
/// assert_eq!(geometry.offset_bits, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Total capacity in kilobytes.
    #[serde(default = "CacheConfig::default_capacity_kb")]
    pub capacity_kb: u64,
    /// Lines per set.
    #[serde(default = "CacheConfig::default_associativity")]
    pub associativity: u64,
    /// Bytes per line.
    #[serde(default = "CacheConfig::default_block_size")]
    pub block_size: u64,
    /// Victim selection algorithm for full sets.
    #[serde(default)]
    pub policy: ReplacementPolicy,
    /// Seed for the random replacement generator; `None` lets the caller pick one.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl CacheConfig {
    const fn default_capacity_kb() -> u64 {
        defaults::CAPACITY_KB
    }

    const fn default_associativity() -> u64 {
        defaults::ASSOCIATIVITY
    }

    const fn default_block_size() -> u64 {
        defaults::BLOCK_SIZE
    }

    /// Parses a configuration from a JSON document.
    ///
    /// Omitted fields take their defaults. The result is not validated.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read and
    /// [`ConfigError::Json`] when its contents do not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Checks the dimensions and derives the cache geometry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroDimension`] when any dimension is zero,
    /// [`ConfigError::Overflow`] when the capacity in bytes does not fit, and
    /// [`ConfigError::NoSets`] when one set is larger than the whole cache.
    pub fn validate(&self) -> Result<CacheGeometry, ConfigError> {
        for (name, value) in [
            ("capacity", self.capacity_kb),
            ("associativity", self.associativity),
            ("block size", self.block_size),
        ] {
            if value < 1 {
                return Err(ConfigError::ZeroDimension { name, value });
            }
        }

        let capacity_bytes = self
            .capacity_kb
            .checked_mul(BYTES_PER_KB)
            .ok_or(ConfigError::Overflow("capacity"))?;
        let set_bytes = self
            .associativity
            .checked_mul(self.block_size)
            .ok_or(ConfigError::Overflow("associativity x block size"))?;

        let num_sets = capacity_bytes / set_bytes;
        if num_sets < 1 {
            return Err(ConfigError::NoSets {
                capacity_bytes,
                associativity: self.associativity,
                block_size: self.block_size,
            });
        }

        let num_sets = usize::try_from(num_sets).map_err(|_| ConfigError::Overflow("set count"))?;
        let ways = usize::try_from(self.associativity)
            .map_err(|_| ConfigError::Overflow("associativity"))?;
        if num_sets.checked_mul(ways).is_none() {
            return Err(ConfigError::Overflow("line count"));
        }

        Ok(CacheGeometry {
            capacity_bytes,
            block_size: self.block_size,
            ways,
            num_sets,
            offset_bits: floor_log2(self.block_size),
            index_bits: floor_log2(num_sets as u64),
            policy: self.policy,
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity_kb: defaults::CAPACITY_KB,
            associativity: defaults::ASSOCIATIVITY,
            block_size: defaults::BLOCK_SIZE,
            policy: ReplacementPolicy::default(),
            seed: None,
        }
    }
}

/// Validated, immutable cache dimensions derived from a [`CacheConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheGeometry {
    /// Total capacity in bytes.
    pub capacity_bytes: u64,
    /// Bytes per line.
    pub block_size: u64,
    /// Lines per set.
    pub ways: usize,
    /// Number of sets; always at least 1.
    pub num_sets: usize,
    /// `floor(log2(block_size))`.
    pub offset_bits: u32,
    /// `floor(log2(num_sets))`.
    pub index_bits: u32,
    /// Victim selection algorithm.
    pub policy: ReplacementPolicy,
}

impl CacheGeometry {
    /// Total number of lines (`num_sets * ways`).
    pub const fn total_lines(&self) -> usize {
        self.num_sets * self.ways
    }
}
