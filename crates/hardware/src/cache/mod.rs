//! Set-Associative Cache Simulator.
//!
//! This module implements a configurable set-associative cache model. It
//! tracks which blocks are resident, not their contents, and reports for every
//! access whether it hit, filled an empty way, or evicted a resident line.
//!
//! Lines for all sets live in one contiguous array sized once from the
//! geometry; set `s` owns ways `s * ways .. (s + 1) * ways`.

/// Cache replacement policy implementations (LRU, Random).
pub mod policies;

/// Per-set line storage and the lookup / fill / replace sequence.
pub mod set;

use std::fmt;

use self::policies::ReplacementPolicy;
pub use self::set::{AccessOutcome, CacheLine, ReplacementSet};
use crate::common::addr::AddressDecoder;
use crate::config::CacheGeometry;

/// Cache simulator implementing a set-associative cache with a configurable policy.
pub struct CacheSim {
    geometry: CacheGeometry,
    decoder: AddressDecoder,
    lines: Vec<CacheLine>,
    clocks: Vec<u64>,
    policy: Box<dyn ReplacementPolicy + Send + Sync>,
}

impl CacheSim {
    /// Creates a new cache with the policy named by `geometry`.
    ///
    /// # Arguments
    ///
    /// * `geometry` - Validated cache dimensions.
    /// * `seed` - Seed for the random policy's generator; unused under LRU.
    pub fn new(geometry: CacheGeometry, seed: u64) -> Self {
        Self::with_policy(geometry, policies::build(geometry.policy, seed))
    }

    /// Creates a new cache with an explicit replacement policy.
    ///
    /// The policy named in `geometry` is ignored.
    pub fn with_policy(
        geometry: CacheGeometry,
        policy: Box<dyn ReplacementPolicy + Send + Sync>,
    ) -> Self {
        tracing::debug!(
            sets = geometry.num_sets,
            ways = geometry.ways,
            block_size = geometry.block_size,
            offset_bits = geometry.offset_bits,
            index_bits = geometry.index_bits,
            "cache geometry"
        );
        Self {
            decoder: AddressDecoder::new(geometry.block_size, geometry.num_sets as u64),
            lines: vec![CacheLine::default(); geometry.total_lines()],
            clocks: vec![0; geometry.num_sets],
            geometry,
            policy,
        }
    }

    /// Dimensions this cache was built with.
    pub const fn geometry(&self) -> &CacheGeometry {
        &self.geometry
    }

    /// Decoder used to split addresses into tag and set index.
    pub const fn decoder(&self) -> &AddressDecoder {
        &self.decoder
    }

    /// Total number of lines allocated (`num_sets * ways`).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines of set `set_index` in way order, or `None` if the index is out of range.
    pub fn set_lines(&self, set_index: usize) -> Option<&[CacheLine]> {
        let base = set_index.checked_mul(self.geometry.ways)?;
        self.lines.get(base..base + self.geometry.ways)
    }

    /// Recency clock of set `set_index`, or `None` if the index is out of range.
    pub fn set_clock(&self, set_index: usize) -> Option<u64> {
        self.clocks.get(set_index).copied()
    }

    /// Checks whether the block containing `addr` is resident.
    ///
    /// Does not touch recency state.
    pub fn contains(&self, addr: u64) -> bool {
        let decoded = self.decoder.decode(addr);
        self.set_lines(decoded.set_index)
            .is_some_and(|lines| lines.iter().any(|l| l.valid && l.tag == decoded.tag))
    }

    /// Accesses the cache for the specified address.
    ///
    /// Looks the block up in its set, stamping it on a hit and installing it on
    /// a miss (evicting a resident line if the set is full).
    ///
    /// # Panics
    ///
    /// This function will not panic. `set_index` is reduced modulo `num_sets`
    /// by the decoder, so the slice `base..base + ways` lies within `lines`.
    pub fn access(&mut self, addr: u64) -> AccessOutcome {
        let decoded = self.decoder.decode(addr);
        let ways = self.geometry.ways;
        let base = decoded.set_index * ways;

        let mut set = ReplacementSet::new(
            &mut self.lines[base..base + ways],
            &mut self.clocks[decoded.set_index],
        );
        set.access(decoded.tag, self.policy.as_mut())
    }
}

impl fmt::Debug for CacheSim {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheSim")
            .field("geometry", &self.geometry)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
