//! Associative Set.
//!
//! A set is a fixed run of lines inside the cache's contiguous line array plus
//! the set's recency clock. [`ReplacementSet`] borrows both for the duration of
//! one access and runs the lookup / fill / replace sequence:
//! 1. **Lookup:** Scan every way in order; a valid line with the probe tag is a hit.
//! 2. **Fill:** Otherwise the first invalid way is populated (compulsory miss).
//! 3. **Replace:** Otherwise the policy picks a victim (conflict or capacity miss).
//!
//! Every touch stamps the line with the next value of the set clock, which is
//! never reset, so stamps are unique within a set and only their order matters.

use super::policies::ReplacementPolicy;

/// Cache line entry containing validity, tag, and recency stamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheLine {
    /// Whether the line currently holds a block.
    pub valid: bool,
    /// Tag of the resident block; meaningless while `valid` is false.
    pub tag: u64,
    /// Set clock value at the last touch; 0 for a line never touched.
    pub recency: u64,
}

/// Result of presenting one tag to a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The tag was resident.
    Hit,
    /// The tag was absent and an empty way was filled.
    CompulsoryMiss,
    /// The tag was absent, the set was full, and a resident line was evicted.
    ConflictMiss,
}

impl AccessOutcome {
    /// Returns `true` for either kind of miss.
    #[inline]
    pub const fn is_miss(self) -> bool {
        !matches!(self, Self::Hit)
    }
}

/// Mutable view of one set: its lines and its recency clock.
#[derive(Debug)]
pub struct ReplacementSet<'a> {
    lines: &'a mut [CacheLine],
    clock: &'a mut u64,
}

impl<'a> ReplacementSet<'a> {
    /// Wraps the lines and clock of a single set.
    ///
    /// `lines` must be non-empty; its length is the associativity.
    pub const fn new(lines: &'a mut [CacheLine], clock: &'a mut u64) -> Self {
        Self { lines, clock }
    }

    /// Lines of this set in way order.
    pub fn lines(&self) -> &[CacheLine] {
        self.lines
    }

    /// Installs `tag` in `way` and stamps it as most recently used.
    #[inline]
    fn occupy(&mut self, way: usize, tag: u64) {
        *self.clock += 1;
        self.lines[way] = CacheLine {
            valid: true,
            tag,
            recency: *self.clock,
        };
    }

    /// Presents `tag` to the set.
    ///
    /// # Arguments
    ///
    /// * `tag` - Tag of the accessed block.
    /// * `policy` - Victim selector, consulted only when the set is full.
    ///
    /// # Returns
    ///
    /// Whether the access hit, filled an empty way, or evicted a resident line.
    pub fn access(&mut self, tag: u64, policy: &mut dyn ReplacementPolicy) -> AccessOutcome {
        let mut first_invalid = None;
        let mut lru_way = 0;
        let mut lru_recency = u64::MAX;

        for way in 0..self.lines.len() {
            let line = self.lines[way];
            if line.valid && line.tag == tag {
                *self.clock += 1;
                self.lines[way].recency = *self.clock;
                return AccessOutcome::Hit;
            }
            if !line.valid && first_invalid.is_none() {
                first_invalid = Some(way);
            }
            if line.recency < lru_recency {
                lru_way = way;
                lru_recency = line.recency;
            }
        }

        if let Some(way) = first_invalid {
            self.occupy(way, tag);
            return AccessOutcome::CompulsoryMiss;
        }

        let victim = policy.get_victim(lru_way, self.lines.len());
        debug_assert!(victim < self.lines.len(), "victim way out of range");
        tracing::trace!(
            way = victim,
            evicted = self.lines[victim].tag,
            installed = tag,
            "evict"
        );
        self.occupy(victim, tag);
        AccessOutcome::ConflictMiss
    }
}
