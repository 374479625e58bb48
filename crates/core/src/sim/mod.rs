//! Simulation driver and trace loading.
//!
//! Provides utilities for reading address traces and feeding them through a
//! hierarchy.

/// Address trace parsing and loading.
pub mod trace;

use crate::common::ByteAddr;
use crate::hierarchy::CacheHierarchy;
use crate::stats::HierarchyStats;

/// Feeds every address through the hierarchy in order.
///
/// # Returns
///
/// The statistics snapshot after the last access.
pub fn run<I>(hierarchy: &mut CacheHierarchy, addrs: I) -> HierarchyStats
where
    I: IntoIterator<Item = ByteAddr>,
{
    for addr in addrs {
        hierarchy.access(addr);
    }
    hierarchy.stats()
}
