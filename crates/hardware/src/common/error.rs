//! Configuration and Trace Error definitions.
//!
//! This module defines the two error families the simulator can report. It provides:
//! 1. **Configuration Errors:** Rejected cache dimensions or policy tokens, raised
//!    before any simulation starts.
//! 2. **Trace Errors:** Lines that cannot be decoded into an access, and I/O failures
//!    while reading the trace. These stop the run but keep the statistics gathered so far.
//!
//! The cache model itself is total over valid input and has no error type.

use thiserror::Error;

/// A cache configuration that cannot be simulated.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Capacity, associativity, or block size was zero.
    #[error("invalid {name}: {value} (must be at least 1)")]
    ZeroDimension {
        /// Name of the offending parameter.
        name: &'static str,
        /// Value that was supplied.
        value: u64,
    },

    /// The replacement policy token was not recognised.
    #[error("invalid replacement policy '{0}', use l for LRU or r for random")]
    UnknownPolicy(String),

    /// `associativity * block_size` exceeds the capacity, leaving no sets.
    #[error(
        "invalid cache dimensions: {capacity_bytes} bytes cannot hold one set of {associativity} x {block_size}-byte lines"
    )]
    NoSets {
        /// Total capacity in bytes.
        capacity_bytes: u64,
        /// Lines per set.
        associativity: u64,
        /// Bytes per line.
        block_size: u64,
    },

    /// A dimension overflowed while deriving the geometry.
    #[error("cache dimensions overflow: {0}")]
    Overflow(&'static str),

    /// The JSON configuration could not be parsed.
    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("could not read configuration: {0}")]
    Io(#[from] std::io::Error),
}

/// A trace that could not be read to completion.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The line does not start with a read or write marker.
    #[error("line {line_number}: unknown access kind in '{line}'")]
    UnknownKind {
        /// 1-based line number in the trace.
        line_number: u64,
        /// The offending line.
        line: String,
    },

    /// The address field is not a hexadecimal 64-bit value.
    #[error("line {line_number}: invalid address '{text}'")]
    InvalidAddress {
        /// 1-based line number in the trace.
        line_number: u64,
        /// The offending address text.
        text: String,
    },

    /// Reading the trace failed.
    #[error("failed to read trace: {0}")]
    Io(#[from] std::io::Error),
}
