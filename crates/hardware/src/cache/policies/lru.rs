//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the line that has not been touched for the longest time.
//! Every hit or fill stamps the line with the set's next recency value, so the
//! lowest stamp identifies the LRU line. The set tracks that minimum during its
//! lookup scan, leaving this policy stateless.
//!
//! # Performance
//!
//! - **Time Complexity:** O(1) per victim (the O(W) scan is shared with lookup)
//! - **Space Complexity:** One 64-bit stamp per line plus one counter per set
//! - **Best Case:** Workloads with strong temporal locality
//! - **Worst Case:** Cyclic scans slightly larger than a set (every access misses)

use super::ReplacementPolicy;

/// LRU Policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct LruPolicy;

impl ReplacementPolicy for LruPolicy {
    /// Returns the candidate with the oldest recency stamp.
    fn get_victim(&mut self, lru_way: usize, _ways: usize) -> usize {
        lru_way
    }
}
