//! Common utilities and types shared by the cache model and the trace driver.
//!
//! This module provides the building blocks used across the simulator:
//! 1. **Address Decoding:** Splitting raw addresses into tag, set index, and offset.
//! 2. **Constants:** Run-wide limits and trace syntax.
//! 3. **Access Records:** Classification of trace entries as reads or writes.
//! 4. **Error Handling:** Configuration and trace parse errors.

/// Address decoding (tag / set index / block offset).
pub mod addr;

/// Common constants used throughout the simulator.
pub mod constants;

/// Access type and access record definitions.
pub mod data;

/// Error types for configuration and trace parsing.
pub mod error;

pub use addr::{AddressDecoder, DecodedAddr};
pub use constants::MAX_TRACE_LINES;
pub use data::{AccessRecord, AccessType};
pub use error::{ConfigError, TraceError};
