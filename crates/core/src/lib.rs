//! Two-level cache hierarchy simulator library.
//!
//! This crate models an exclusive L1/L2 set-associative cache hierarchy backed
//! by an implicit infinite main memory, and reports its hit/miss behaviour
//! under a stream of byte addresses:
//! 1. **Cache:** Bounded associative sets, FIFO/LRU replacement, cache levels.
//! 2. **Hierarchy:** Exclusive lookup, promotion, demotion and eviction.
//! 3. **Simulation:** Configuration, trace loading, and statistics reporting.
//!
//! Only block presence is tracked; memory contents are never stored.
//!
//! ```
//! use cachesim_core::{ByteAddr, CacheHierarchy, HierarchyConfig};
//!
//! let mut cache = CacheHierarchy::from_config(&HierarchyConfig::default()).unwrap();
//! for addr in [0, 64, 0] {
//!     cache.access(ByteAddr(addr));
//! }
//! let stats = cache.stats();
//! assert_eq!((stats.l1.hits, stats.l1.misses), (1, 2));
//! assert_eq!((stats.l2.hits, stats.l2.misses), (0, 2));
//! ```

/// Set-associative cache level, sets, and replacement policies.
pub mod cache;
/// Common types (addresses, errors).
pub mod common;
/// Simulator configuration (defaults, policy enum, level and hierarchy config).
pub mod config;
/// Exclusive two-level hierarchy.
pub mod hierarchy;
/// Trace loading and the simulation driver.
pub mod sim;
/// Statistics snapshot and reporting.
pub mod stats;

/// A single cache level; construct with `CacheLevel::new`.
pub use crate::cache::CacheLevel;
/// Address and error types.
pub use crate::common::{BlockAddr, ByteAddr, GeometryError, SimError};
/// Configuration types; use `HierarchyConfig::default()` or load from JSON.
pub use crate::config::{CacheConfig, HierarchyConfig, ReplacementPolicy};
/// The two-level hierarchy.
pub use crate::hierarchy::CacheHierarchy;
/// Statistics snapshot types.
pub use crate::stats::{HierarchyStats, LevelStats};
