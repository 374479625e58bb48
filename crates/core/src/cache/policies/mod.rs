//! Cache Replacement Policies.
//!
//! Implements the victim-selection behaviour for the ordered cache sets.
//!
//! Every set keeps its resident blocks in a single queue: the front holds the
//! next victim and the back holds the newest (or most recently used) block.
//! Eviction is therefore always a pop from the front, and a policy only decides
//! what happens to that order when a resident block is hit.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lru`: Least Recently Used.

use std::collections::VecDeque;

use crate::common::BlockAddr;
use crate::config::ReplacementPolicy as PolicyType;

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Least Recently Used replacement policy.
pub mod lru;

pub use fifo::FifoPolicy;
pub use lru::LruPolicy;

/// Trait for cache replacement policies.
///
/// Defines how a set's recency order reacts to hits. The victim is always the
/// front of the set.
pub trait ReplacementPolicy: Send + Sync {
    /// Updates the set order after a hit.
    ///
    /// # Arguments
    ///
    /// * `blocks` - The set's resident blocks, victim first.
    /// * `way` - Position of the block that was hit. Always `< blocks.len()`.
    fn on_hit(&self, blocks: &mut VecDeque<BlockAddr>, way: usize);
}

/// Returns the policy implementation for a configured policy tag.
pub fn policy_for(kind: PolicyType) -> &'static dyn ReplacementPolicy {
    match kind {
        PolicyType::Fifo => &FifoPolicy,
        PolicyType::Lru => &LruPolicy,
    }
}
