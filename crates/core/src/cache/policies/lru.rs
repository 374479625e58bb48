//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the block that has not been accessed for the longest
//! time. The set queue doubles as the usage stack: a hit moves the block to the
//! back (most recently used), leaving the least recently used block at the
//! front where eviction takes it.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `on_hit()`: O(W) where W is the number of ways (associativity)
//!   - eviction: O(1) (front of the set)
//! - **Best Case:** Working sets that fit in a set with good temporal locality
//! - **Worst Case:** Scanning patterns larger than cache capacity (thrashing)

use std::collections::VecDeque;

use super::ReplacementPolicy;
use crate::common::BlockAddr;

/// LRU policy. Stateless; recency lives in the set's queue order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LruPolicy;

impl ReplacementPolicy for LruPolicy {
    /// Moves the hit block to the most-recently-used end of the set.
    fn on_hit(&self, blocks: &mut VecDeque<BlockAddr>, way: usize) {
        if let Some(block) = blocks.remove(way) {
            blocks.push_back(block);
        }
    }
}
