//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the block that was installed earliest, regardless of how
//! recently it was accessed. Arrival order is the set order, so a hit leaves
//! the set untouched.
//!
//! # Performance
//!
//! - **Time Complexity:**
//!   - `on_hit()`: O(1)
//!   - eviction: O(1) (front of the set)
//! - **Best Case:** Streaming accesses where all blocks have equal importance
//! - **Worst Case:** Workloads with strong temporal locality (may evict hot blocks)

use std::collections::VecDeque;

use super::ReplacementPolicy;
use crate::common::BlockAddr;

/// FIFO policy. Stateless; the set's queue order is the arrival order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FifoPolicy;

impl ReplacementPolicy for FifoPolicy {
    /// FIFO never reorders on a hit.
    fn on_hit(&self, _blocks: &mut VecDeque<BlockAddr>, _way: usize) {}
}
