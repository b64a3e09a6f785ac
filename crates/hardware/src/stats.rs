//! Simulation statistics collection and reporting.
//!
//! This module tracks the outcome counters of a run. It provides:
//! 1. **Per-class counters:** Accesses and misses for reads and for writes.
//! 2. **Totals:** Always derived as read + write, never stored separately.
//! 3. **Miss rates:** `100 * misses / accesses` per class; a class with no
//!    accesses has no rate (`None`), reported as `nan`.

use std::fmt;

use serde::Serialize;

use crate::common::constants::PERCENT;
use crate::common::data::AccessType;

/// Access and miss counters for one access class.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ClassCounters {
    /// Number of accesses recorded.
    pub accesses: u64,
    /// Number of those accesses that missed.
    pub misses: u64,
}

impl ClassCounters {
    /// Miss percentage, or `None` when no accesses were recorded.
    pub fn miss_rate(&self) -> Option<f64> {
        (self.accesses != 0).then(|| PERCENT * self.misses as f64 / self.accesses as f64)
    }

    fn summary(self) -> ClassSummary {
        ClassSummary {
            accesses: self.accesses,
            misses: self.misses,
            miss_rate: self.miss_rate(),
        }
    }
}

/// Running statistics for a simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Read counters.
    pub read: ClassCounters,
    /// Write counters.
    pub write: ClassCounters,
}

impl CacheStats {
    /// Records one access of the given kind.
    pub const fn record(&mut self, kind: AccessType, is_miss: bool) {
        let counters = match kind {
            AccessType::Read => &mut self.read,
            AccessType::Write => &mut self.write,
        };
        counters.accesses += 1;
        if is_miss {
            counters.misses += 1;
        }
    }

    /// Counters for a single access class.
    pub const fn class(&self, kind: AccessType) -> ClassCounters {
        match kind {
            AccessType::Read => self.read,
            AccessType::Write => self.write,
        }
    }

    /// Combined read + write counters.
    pub const fn total(&self) -> ClassCounters {
        ClassCounters {
            accesses: self.read.accesses + self.write.accesses,
            misses: self.read.misses + self.write.misses,
        }
    }

    /// Produces an immutable summary with derived totals and miss rates.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            total: self.total().summary(),
            read: self.read.summary(),
            write: self.write.summary(),
        }
    }
}

/// Counters and miss rate for one class in a [`StatsSnapshot`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ClassSummary {
    /// Number of accesses.
    pub accesses: u64,
    /// Number of misses.
    pub misses: u64,
    /// Miss percentage; `None` when `accesses == 0`.
    pub miss_rate: Option<f64>,
}

/// Six-counter summary of a run plus derived miss percentages.
///
/// `Display` renders the single report line
/// `<misses> <pct>% <read misses> <pct>% <write misses> <pct>% ` with six decimals.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StatsSnapshot {
    /// Reads and writes combined.
    pub total: ClassSummary,
    /// Reads only.
    pub read: ClassSummary,
    /// Writes only.
    pub write: ClassSummary,
}

/// Formats a miss rate with six decimals, or `nan` when undefined.
struct Rate(Option<f64>);

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(rate) => write!(f, "{rate:.6}%"),
            None => write!(f, "nan%"),
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for class in [&self.total, &self.read, &self.write] {
            write!(f, "{} {} ", class.misses, Rate(class.miss_rate))?;
        }
        Ok(())
    }
}
