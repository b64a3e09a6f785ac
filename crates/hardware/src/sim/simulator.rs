//! Simulator: owns the cache model and its statistics side-by-side.
//!
//! Accesses are processed strictly in trace order. The cache never fails once
//! built, so the only errors a run can report come from decoding the trace;
//! they stop the run but leave the statistics gathered up to that point intact.

use std::io::BufRead;

use crate::cache::{AccessOutcome, CacheSim};
use crate::common::constants::MAX_TRACE_LINES;
use crate::common::data::AccessRecord;
use crate::common::error::{ConfigError, TraceError};
use crate::config::{CacheConfig, CacheGeometry};
use crate::sim::trace::TraceReader;
use crate::stats::{CacheStats, StatsSnapshot};

/// Seed used for the random policy when the configuration leaves it unset.
const FALLBACK_SEED: u64 = 0;

/// Outcome of running a whole trace.
#[derive(Debug)]
pub struct RunReport {
    /// Statistics for every access processed before the run ended.
    pub snapshot: StatsSnapshot,
    /// Number of accesses simulated.
    pub accesses: u64,
    /// The error that stopped the run early, if any.
    pub error: Option<TraceError>,
}

/// Top-level simulator: cache state + statistics.
#[derive(Debug)]
pub struct Simulator {
    /// Cache model (sets, lines, replacement policy).
    pub cache: CacheSim,
    /// Per-class access and miss counters.
    pub stats: CacheStats,
}

impl Simulator {
    /// Validates `config` and builds a simulator with an empty cache.
    ///
    /// The random policy is seeded with `config.seed`, or a fixed fallback
    /// when it is `None`.
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        let geometry = config.validate()?;
        Ok(Self::from_geometry(
            geometry,
            config.seed.unwrap_or(FALLBACK_SEED),
        ))
    }

    /// Builds a simulator for already validated dimensions.
    pub fn from_geometry(geometry: CacheGeometry, seed: u64) -> Self {
        Self {
            cache: CacheSim::new(geometry, seed),
            stats: CacheStats::default(),
        }
    }

    /// Simulates one access and records its outcome.
    pub fn process(&mut self, record: &AccessRecord) -> AccessOutcome {
        let outcome = self.cache.access(record.address);
        self.stats.record(record.kind, outcome.is_miss());
        outcome
    }

    /// Summarises the accesses processed so far.
    pub fn finalize(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Runs every access in a text trace.
    ///
    /// Stops at end of input, at the first undecodable line, or after
    /// [`MAX_TRACE_LINES`] lines, whichever comes first.
    pub fn run<R: BufRead>(&mut self, reader: R) -> RunReport {
        self.run_with_limit(reader, MAX_TRACE_LINES)
    }

    /// Runs a text trace, simulating at most `limit` accesses.
    ///
    /// Reaching the limit is not an error; the report covers the accesses
    /// simulated up to that point.
    pub fn run_with_limit<R: BufRead>(&mut self, reader: R, limit: u64) -> RunReport {
        let mut trace = TraceReader::new(reader);
        let mut accesses = 0;
        let mut error = None;

        for item in trace.by_ref() {
            if accesses >= limit {
                tracing::warn!(limit, "trace line limit reached");
                break;
            }
            match item {
                Ok(record) => {
                    let _ = self.process(&record);
                    accesses += 1;
                }
                Err(e) => {
                    error = Some(e);
                    break;
                }
            }
        }

        tracing::debug!(lines = trace.line_number(), accesses, "trace finished");
        RunReport {
            snapshot: self.finalize(),
            accesses,
            error,
        }
    }
}
