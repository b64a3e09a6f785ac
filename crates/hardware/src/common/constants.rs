//! Global Simulator Constants.
//!
//! This module defines constants shared by the configuration layer and the trace
//! driver. It includes:
//! 1. **Configuration Constants:** Unit conversions for cache dimensions.
//! 2. **Trace Constants:** Access markers and the hexadecimal radix prefix.
//! 3. **Simulation Constants:** The safety bound on trace length.

/// Bytes per kilobyte; capacities are supplied in KB.
pub const BYTES_PER_KB: u64 = 1024;

/// Upper bound on the number of trace lines processed in a single run (one trillion).
///
/// Guards against unbounded or malformed input streams. Real traces never reach it.
pub const MAX_TRACE_LINES: u64 = 1_000_000_000_000;

/// First character of a trace line describing a read.
pub const READ_MARKER: char = 'r';

/// First character of a trace line describing a write.
pub const WRITE_MARKER: char = 'w';

/// Radix prefix accepted in front of trace addresses.
pub const HEX_PREFIX: &str = "0x";

/// Percentage scale applied to miss ratios.
pub const PERCENT: f64 = 100.0;
