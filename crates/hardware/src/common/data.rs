//! Memory Access Types.
//!
//! This module defines the classification of trace entries. Access types are used for:
//! 1. **Statistics Tracking:** Reads and writes are counted separately.
//! 2. **Trace Decoding:** Each trace line is decoded into one [`AccessRecord`].

use serde::{Deserialize, Serialize};

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessType {
    /// Data read access (trace marker `r`).
    Read,

    /// Data write access (trace marker `w`).
    Write,
}

/// A single decoded trace entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRecord {
    /// Whether the access reads or writes memory.
    pub kind: AccessType,
    /// Byte address touched by the access.
    pub address: u64,
}

impl AccessRecord {
    /// Creates a read of `address`.
    pub const fn read(address: u64) -> Self {
        Self {
            kind: AccessType::Read,
            address,
        }
    }

    /// Creates a write of `address`.
    pub const fn write(address: u64) -> Self {
        Self {
            kind: AccessType::Write,
            address,
        }
    }
}
