//! Byte and Block Address types.
//!
//! This module defines strong types for the two address spaces the hierarchy
//! works in. It provides the following:
//! 1. **Type Safety:** Distinguishes raw byte addresses issued by a caller from
//!    block addresses tracked by the cache levels.
//! 2. **Address Manipulation:** Byte-to-block conversion and set index selection.
//!
//! Addresses are unsigned. Negative inputs cannot be represented and are
//! rejected by whatever harness parses them (see `sim::trace`).

use std::fmt;

/// A byte address issued by a caller of the hierarchy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ByteAddr(pub u64);

/// The address of a fixed-size chunk of the address space.
///
/// Derived from a [`ByteAddr`] by integer division by the block size. This is
/// the only value a cache set stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockAddr(pub u64);

impl ByteAddr {
    /// Creates a new byte address from a raw 64-bit value.
    #[inline(always)]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw 64-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u64 {
        self.0
    }

    /// Converts this byte address into the block that contains it.
    ///
    /// # Arguments
    ///
    /// * `block_bytes` - Block size in bytes. Must be non-zero; cache levels
    ///   reject a zero block size at construction.
    #[inline(always)]
    pub const fn block(self, block_bytes: usize) -> BlockAddr {
        BlockAddr(self.0 / block_bytes as u64)
    }
}

impl BlockAddr {
    /// Creates a new block address from a raw 64-bit value.
    #[inline(always)]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw 64-bit block number.
    #[inline(always)]
    pub const fn val(self) -> u64 {
        self.0
    }

    /// Selects the set this block maps to.
    ///
    /// Uses `block mod num_sets` rather than masking low bits, so `num_sets`
    /// need not be a power of two.
    #[inline(always)]
    pub const fn set_index(self, num_sets: usize) -> usize {
        (self.0 % num_sets as u64) as usize
    }
}

impl From<u64> for ByteAddr {
    fn from(addr: u64) -> Self {
        Self(addr)
    }
}

impl From<u64> for BlockAddr {
    fn from(addr: u64) -> Self {
        Self(addr)
    }
}

impl fmt::Display for ByteAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

impl fmt::Display for BlockAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blk#{}", self.0)
    }
}
