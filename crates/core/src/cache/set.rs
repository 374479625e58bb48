//! A single associative set.
//!
//! Resident blocks are kept in one queue ordered victim-first. The set never
//! holds more than `ways` blocks: `insert` pops the front before appending once
//! the set is full.

use std::collections::VecDeque;

use super::policies::ReplacementPolicy;
use crate::common::BlockAddr;

/// Bounded, ordered collection of resident block addresses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheSet {
    blocks: VecDeque<BlockAddr>,
}

impl CacheSet {
    /// Creates an empty set with room for `ways` blocks.
    pub fn with_capacity(ways: usize) -> Self {
        Self {
            blocks: VecDeque::with_capacity(ways),
        }
    }

    /// Looks up `block`, letting the policy reorder the set on a hit.
    ///
    /// # Returns
    ///
    /// `true` if the block is resident.
    pub fn touch(&mut self, block: BlockAddr, policy: &dyn ReplacementPolicy) -> bool {
        match self.position(block) {
            Some(way) => {
                policy.on_hit(&mut self.blocks, way);
                true
            }
            None => false,
        }
    }

    /// Installs `block`, evicting the front block if the set is full.
    ///
    /// A block that is already resident is not duplicated: the call behaves
    /// like a hit (LRU moves it to the back, FIFO leaves the order alone) and
    /// nothing is evicted.
    ///
    /// # Arguments
    ///
    /// * `block` - Block to install.
    /// * `ways` - Capacity of the set.
    /// * `policy` - Reorders the set when `block` is already resident.
    ///
    /// # Returns
    ///
    /// The evicted block, if any.
    pub fn insert(
        &mut self,
        block: BlockAddr,
        ways: usize,
        policy: &dyn ReplacementPolicy,
    ) -> Option<BlockAddr> {
        if self.touch(block, policy) {
            return None;
        }
        let evicted = if self.blocks.len() < ways {
            None
        } else {
            self.blocks.pop_front()
        };
        self.blocks.push_back(block);
        evicted
    }

    /// Removes the first occurrence of `block`. Absent blocks are ignored.
    ///
    /// # Returns
    ///
    /// `true` if a block was removed.
    pub fn remove(&mut self, block: BlockAddr) -> bool {
        self.position(block)
            .and_then(|way| self.blocks.remove(way))
            .is_some()
    }

    /// Checks residency without touching the recency order.
    pub fn contains(&self, block: BlockAddr) -> bool {
        self.blocks.contains(&block)
    }

    /// Number of resident blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Returns `true` if no block is resident.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterates resident blocks from next victim to most recent.
    pub fn iter(&self) -> impl Iterator<Item = BlockAddr> + '_ {
        self.blocks.iter().copied()
    }

    fn position(&self, block: BlockAddr) -> Option<usize> {
        self.blocks.iter().position(|&b| b == block)
    }
}
