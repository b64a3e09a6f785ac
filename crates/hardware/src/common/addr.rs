//! Address Decoding.
//!
//! This module splits raw trace addresses into the fields a set-associative
//! cache uses. It provides the following:
//! 1. **Bit Widths:** Offset and index widths derived once from the cache geometry.
//! 2. **Set Selection:** The set index an address maps to.
//! 3. **Tagging:** The tag stored alongside a line to identify its block.
//!
//! Widths are `floor(log2(n))`, so a block size or set count that is not a power
//! of two still produces a usable (if under-masked) decomposition. The set index
//! is always reduced modulo the set count and therefore stays in range.

/// Result of decoding a single address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodedAddr {
    /// Block tag (address with offset and index bits removed).
    pub tag: u64,
    /// Index of the set the address maps to, always `< num_sets`.
    pub set_index: usize,
    /// Byte offset within the block.
    pub offset: u64,
}

/// Splits addresses into (tag, set index, block offset) for a fixed geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressDecoder {
    offset_bits: u32,
    index_bits: u32,
    num_sets: u64,
}

/// Returns `floor(log2(n))`, or 0 for `n == 0`.
#[inline]
pub const fn floor_log2(n: u64) -> u32 {
    match n.checked_ilog2() {
        Some(bits) => bits,
        None => 0,
    }
}

impl AddressDecoder {
    /// Creates a decoder for the given block size and set count.
    ///
    /// # Arguments
    ///
    /// * `block_size` - Bytes per cache line.
    /// * `num_sets` - Number of sets in the cache (must be at least 1).
    pub const fn new(block_size: u64, num_sets: u64) -> Self {
        Self {
            offset_bits: floor_log2(block_size),
            index_bits: floor_log2(num_sets),
            num_sets,
        }
    }

    /// Number of low address bits treated as the block offset.
    #[inline]
    pub const fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Number of address bits above the offset treated as the set index.
    #[inline]
    pub const fn index_bits(&self) -> u32 {
        self.index_bits
    }

    /// Decodes `addr` into its tag, set index, and block offset.
    ///
    /// Shifts of 64 bits or more produce zero rather than overflowing.
    #[inline]
    pub fn decode(&self, addr: u64) -> DecodedAddr {
        let block = addr.checked_shr(self.offset_bits).unwrap_or(0);
        let set_index = (block % self.num_sets.max(1)) as usize;
        let tag = addr
            .checked_shr(self.offset_bits + self.index_bits)
            .unwrap_or(0);
        let offset = addr & (1u64 << self.offset_bits).wrapping_sub(1);
        DecodedAddr {
            tag,
            set_index,
            offset,
        }
    }
}
