//! Set-Associative Cache Level.
//!
//! This module implements one level of the hierarchy: an array of bounded
//! associative sets selected by `block mod num_sets`, plus hit and miss
//! counters. Only block presence is modelled; no data is stored.
//!
//! A level never inserts on its own. `access` is a lookup that updates the
//! counters and the replacement order, while `insert` and `remove` are driven
//! by the hierarchy's promotion and demotion protocol.

/// Cache replacement policy implementations (FIFO, LRU).
pub mod policies;

/// A single associative set.
pub mod set;

use self::policies::{ReplacementPolicy, policy_for};
use self::set::CacheSet;
use crate::common::{BlockAddr, GeometryError};
use crate::config::{CacheConfig, ReplacementPolicy as PolicyType};

/// One level of a set-associative cache.
///
/// Geometry is fixed at construction, so a block's set index never changes for
/// the lifetime of the level.
#[derive(Clone, Debug)]
pub struct CacheLevel {
    size_bytes: usize,
    block_bytes: usize,
    ways: usize,
    num_sets: usize,
    policy: PolicyType,
    sets: Vec<CacheSet>,
    hits: u64,
    misses: u64,
}

impl CacheLevel {
    /// Creates an empty cache level.
    ///
    /// # Arguments
    ///
    /// * `size_bytes` - Total capacity in bytes
    /// * `block_bytes` - Block size in bytes
    /// * `ways` - Associativity
    /// * `policy` - Replacement policy
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] when any parameter is zero or the geometry
    /// yields no sets.
    pub fn new(
        size_bytes: usize,
        block_bytes: usize,
        ways: usize,
        policy: PolicyType,
    ) -> Result<Self, GeometryError> {
        Self::from_config(&CacheConfig::new(size_bytes, block_bytes, ways, policy))
    }

    /// Creates an empty cache level from its configuration.
    ///
    /// # Errors
    ///
    /// See [`CacheLevel::new`].
    pub fn from_config(config: &CacheConfig) -> Result<Self, GeometryError> {
        let num_sets = config.num_sets()?;
        Ok(Self {
            size_bytes: config.size_bytes,
            block_bytes: config.block_bytes,
            ways: config.ways,
            num_sets,
            policy: config.policy,
            sets: vec![CacheSet::with_capacity(config.ways); num_sets],
            hits: 0,
            misses: 0,
        })
    }

    /// Looks up a block, counting the result as a hit or a miss.
    ///
    /// A hit lets the replacement policy reorder the set. A miss does not
    /// install the block.
    ///
    /// # Returns
    ///
    /// `true` on a hit.
    pub fn access(&mut self, block: BlockAddr) -> bool {
        let policy = self.replacement();
        let index = block.set_index(self.num_sets);
        let hit = self.sets[index].touch(block, policy);
        if hit {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        hit
    }

    /// Installs a block, evicting a victim if its set is full.
    ///
    /// Does not affect the hit and miss counters. Re-installing a resident
    /// block only updates its recency.
    ///
    /// # Returns
    ///
    /// The evicted block, so the caller can pass it to the next level.
    pub fn insert(&mut self, block: BlockAddr) -> Option<BlockAddr> {
        let policy = self.replacement();
        let index = block.set_index(self.num_sets);
        self.sets[index].insert(block, self.ways, policy)
    }

    /// Removes a block if resident. Does not affect the counters.
    pub fn remove(&mut self, block: BlockAddr) {
        let index = block.set_index(self.num_sets);
        if !self.sets[index].remove(block) {
            tracing::trace!(%block, "remove of non-resident block ignored");
        }
    }

    /// Checks residency without touching counters or recency.
    pub fn contains(&self, block: BlockAddr) -> bool {
        self.sets[block.set_index(self.num_sets)].contains(block)
    }

    /// Returns the set at `index`, if it exists.
    pub fn set(&self, index: usize) -> Option<&CacheSet> {
        self.sets.get(index)
    }

    /// Iterates over all sets in index order.
    pub fn sets(&self) -> impl Iterator<Item = &CacheSet> + '_ {
        self.sets.iter()
    }

    /// Total number of resident blocks across all sets.
    pub fn resident_blocks(&self) -> usize {
        self.sets.iter().map(CacheSet::len).sum()
    }

    /// Clears the hit and miss counters. Resident blocks are kept.
    pub const fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }

    /// Number of hits since construction or the last reset.
    pub const fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of misses since construction or the last reset.
    pub const fn misses(&self) -> u64 {
        self.misses
    }

    /// Block size in bytes.
    pub const fn block_bytes(&self) -> usize {
        self.block_bytes
    }

    /// Total capacity in bytes.
    pub const fn size_bytes(&self) -> usize {
        self.size_bytes
    }

    /// Associativity.
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Number of sets.
    pub const fn num_sets(&self) -> usize {
        self.num_sets
    }

    /// Configured replacement policy.
    pub const fn policy(&self) -> PolicyType {
        self.policy
    }

    fn replacement(&self) -> &'static dyn ReplacementPolicy {
        policy_for(self.policy)
    }
}
