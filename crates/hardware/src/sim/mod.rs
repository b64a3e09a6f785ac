//! Trace decoding and the simulation driver.
//!
//! Provides the reader that turns trace text into access records and the
//! simulator that feeds those records through the cache model.

/// Drives a cache with a stream of accesses and collects statistics.
pub mod simulator;

/// Trace line parsing.
pub mod trace;

pub use simulator::{RunReport, Simulator};
pub use trace::{TraceReader, parse_line};
