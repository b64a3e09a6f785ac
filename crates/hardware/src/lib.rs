//! Trace-driven set-associative cache simulator library.
//!
//! This crate models a single-level cache fed by a trace of memory accesses:
//! 1. **Common:** Address decoding, access records, constants, and error types.
//! 2. **Configuration:** Cache dimensions, replacement policy, and derived geometry.
//! 3. **Cache:** Set-associative line storage with LRU and random replacement.
//! 4. **Statistics:** Per-class (read/write) access and miss counters.
//! 5. **Simulation:** Trace parsing and the driver that feeds the cache.

/// Set-associative cache model and replacement policies.
pub mod cache;
/// Common types and constants (address decoding, access records, errors).
pub mod common;
/// Cache configuration (dimensions, replacement policy, derived geometry).
pub mod config;
/// Trace parsing and the simulation driver.
pub mod sim;
/// Access and miss statistics.
pub mod stats;

/// Root configuration type; build it directly or deserialize it from JSON.
pub use crate::config::CacheConfig;
/// Simulation driver owning the cache and its statistics.
pub use crate::sim::Simulator;
/// Immutable statistics summary produced at the end of a run.
pub use crate::stats::StatsSnapshot;
