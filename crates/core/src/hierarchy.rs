//! Exclusive Two-Level Cache Hierarchy.
//!
//! This module chains two [`CacheLevel`]s into an exclusive hierarchy backed by
//! an implicit, infinite main memory. It performs:
//! 1. **Lookup:** Probe L1, then L2 on an L1 miss.
//! 2. **Promotion:** An L2 hit moves the block into L1 and out of L2.
//! 3. **Demotion:** A block evicted from L1 moves into L2.
//! 4. **Discard:** A block evicted from L2 by a demotion leaves the hierarchy.
//!
//! After every access the requested block is resident in L1 and absent from
//! L2, and no block is ever resident in both levels.

use crate::cache::CacheLevel;
use crate::common::{BlockAddr, ByteAddr, SimError};
use crate::config::HierarchyConfig;
use crate::stats::{HierarchyStats, LevelStats};

/// Two cache levels run as an exclusive hierarchy.
///
/// The hierarchy owns both levels. Callers that need to inspect them use
/// [`CacheHierarchy::l1`] and [`CacheHierarchy::l2`].
///
/// `access` takes `&mut self`, so the whole lookup/promotion/demotion sequence
/// runs as one critical section. Share a hierarchy between threads only behind
/// a lock.
#[derive(Clone, Debug)]
pub struct CacheHierarchy {
    l1: CacheLevel,
    l2: CacheLevel,
    accesses: u64,
}

impl CacheHierarchy {
    /// Composes a hierarchy from two levels, taking ownership of both.
    ///
    /// Block addresses are derived with L1's block size. Mismatched block
    /// sizes are accepted but logged.
    pub fn new(l1: CacheLevel, l2: CacheLevel) -> Self {
        if l1.block_bytes() != l2.block_bytes() {
            tracing::warn!(
                l1_block = l1.block_bytes(),
                l2_block = l2.block_bytes(),
                "L1 and L2 block sizes differ; block addresses follow L1"
            );
        }
        tracing::info!(
            l1_sets = l1.num_sets(),
            l1_ways = l1.ways(),
            l1_policy = ?l1.policy(),
            l2_sets = l2.num_sets(),
            l2_ways = l2.ways(),
            l2_policy = ?l2.policy(),
            "cache hierarchy built"
        );
        Self {
            l1,
            l2,
            accesses: 0,
        }
    }

    /// Builds both levels from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Geometry`] naming the level whose geometry is
    /// invalid.
    pub fn from_config(config: &HierarchyConfig) -> Result<Self, SimError> {
        let l1 = CacheLevel::from_config(&config.l1).map_err(|e| SimError::geometry("L1", e))?;
        let l2 = CacheLevel::from_config(&config.l2).map_err(|e| SimError::geometry("L2", e))?;
        Ok(Self::new(l1, l2))
    }

    /// Issues one byte address to the hierarchy.
    ///
    /// The outcome is only observable through [`CacheHierarchy::stats`] and
    /// the emitted `tracing` events.
    pub fn access(&mut self, addr: ByteAddr) {
        self.accesses += 1;
        let block = addr.block(self.l1.block_bytes());

        if self.l1.access(block) {
            tracing::debug!(%addr, %block, "L1 hit");
            return;
        }

        if self.l2.access(block) {
            tracing::debug!(%addr, %block, "L2 hit, promoting to L1");
            let evicted = self.l1.insert(block);
            self.l2.remove(block);
            if let Some(victim) = evicted {
                self.demote(victim);
            }
            return;
        }

        tracing::debug!(%addr, %block, "miss in both levels, fetching from memory");
        if let Some(victim) = self.l1.insert(block) {
            self.demote(victim);
        }
    }

    /// Moves a block evicted from L1 into L2, discarding whatever L2 evicts.
    fn demote(&mut self, block: BlockAddr) {
        tracing::debug!(%block, "demoting L1 victim to L2");
        if let Some(discarded) = self.l2.insert(block) {
            tracing::debug!(block = %discarded, "L2 victim leaves the hierarchy");
        }
    }

    /// Returns a snapshot of the hierarchy's counters.
    pub const fn stats(&self) -> HierarchyStats {
        HierarchyStats {
            accesses: self.accesses,
            l1: LevelStats {
                hits: self.l1.hits(),
                misses: self.l1.misses(),
            },
            l2: LevelStats {
                hits: self.l2.hits(),
                misses: self.l2.misses(),
            },
        }
    }

    /// Prints the statistics report to stdout.
    pub fn print_stats(&self) {
        self.stats().print();
    }

    /// Clears both levels' counters and the access count. Resident blocks are
    /// kept.
    pub fn reset_stats(&mut self) {
        self.l1.reset_stats();
        self.l2.reset_stats();
        self.accesses = 0;
        tracing::info!("statistics reset");
    }

    /// Number of addresses issued since construction or the last reset.
    pub const fn accesses(&self) -> u64 {
        self.accesses
    }

    /// The first level.
    pub const fn l1(&self) -> &CacheLevel {
        &self.l1
    }

    /// The second level.
    pub const fn l2(&self) -> &CacheLevel {
        &self.l2
    }
}
