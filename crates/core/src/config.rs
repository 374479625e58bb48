//! Configuration system for the cache simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! hierarchy. It provides:
//! 1. **Defaults:** Baseline geometry for each level.
//! 2. **Structures:** Per-level geometry and the two-level hierarchy config.
//! 3. **Enums:** The replacement policy tag.
//!
//! Configuration is supplied as JSON (`HierarchyConfig::from_json` /
//! `HierarchyConfig::load`) or built with `HierarchyConfig::default()`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::{GeometryError, SimError};

/// Default configuration constants for the simulator.
///
/// The defaults describe a small hierarchy with eight sets per level, which
/// keeps hand-traced examples readable.
mod defaults {
    /// Default L1 size in bytes.
    pub const L1_SIZE: usize = 64;

    /// Default L1 associativity (2-way).
    pub const L1_WAYS: usize = 2;

    /// Default L2 size in bytes.
    pub const L2_SIZE: usize = 128;

    /// Default L2 associativity (4-way).
    pub const L2_WAYS: usize = 4;

    /// Default block size in bytes, shared by both levels.
    pub const BLOCK_BYTES: usize = 4;
}

/// Cache replacement policy algorithms.
///
/// Both policies keep the victim at the front of a set and the newest block
/// at the back. They differ only in whether a hit reorders the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReplacementPolicy {
    /// First In First Out replacement policy.
    ///
    /// Evicts the block that arrived earliest; hits do not reorder.
    #[default]
    #[serde(alias = "Fifo", alias = "fifo")]
    Fifo,
    /// Least Recently Used replacement policy.
    ///
    /// A hit moves the block to the most-recently-used end.
    #[serde(alias = "Lru", alias = "lru")]
    Lru,
}

/// Geometry and policy of a single cache level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Total cache size in bytes
    #[serde(default = "CacheConfig::default_size")]
    pub size_bytes: usize,

    /// Block (line) size in bytes
    #[serde(default = "CacheConfig::default_block")]
    pub block_bytes: usize,

    /// Associativity (blocks per set)
    #[serde(default = "CacheConfig::default_ways")]
    pub ways: usize,

    /// Replacement policy
    #[serde(default)]
    pub policy: ReplacementPolicy,
}

impl CacheConfig {
    /// Builds a level configuration from explicit values.
    pub const fn new(
        size_bytes: usize,
        block_bytes: usize,
        ways: usize,
        policy: ReplacementPolicy,
    ) -> Self {
        Self {
            size_bytes,
            block_bytes,
            ways,
            policy,
        }
    }

    /// Returns the default cache size in bytes.
    const fn default_size() -> usize {
        defaults::L1_SIZE
    }

    /// Returns the default block size in bytes.
    const fn default_block() -> usize {
        defaults::BLOCK_BYTES
    }

    /// Returns the default associativity.
    const fn default_ways() -> usize {
        defaults::L1_WAYS
    }

    /// Computes the number of sets this geometry yields.
    ///
    /// `size_bytes / (block_bytes * ways)`, truncating. Capacity left over by a
    /// non-dividing geometry is simply unused.
    ///
    /// # Errors
    ///
    /// Returns a [`GeometryError`] for any zero parameter, or when the result
    /// (or the intermediate product) leaves no room for a single set.
    pub const fn num_sets(&self) -> Result<usize, GeometryError> {
        if self.size_bytes == 0 {
            return Err(GeometryError::ZeroSize);
        }
        if self.block_bytes == 0 {
            return Err(GeometryError::ZeroBlockSize);
        }
        if self.ways == 0 {
            return Err(GeometryError::ZeroWays);
        }
        let no_sets = GeometryError::NoSets {
            size_bytes: self.size_bytes,
            block_bytes: self.block_bytes,
            ways: self.ways,
        };
        let Some(set_bytes) = self.block_bytes.checked_mul(self.ways) else {
            return Err(no_sets);
        };
        match self.size_bytes / set_bytes {
            0 => Err(no_sets),
            n => Ok(n),
        }
    }

    /// Checks that this geometry can be built.
    ///
    /// # Errors
    ///
    /// See [`CacheConfig::num_sets`].
    pub const fn validate(&self) -> Result<(), GeometryError> {
        match self.num_sets() {
            Ok(_) => Ok(()),
            Err(e) => Err(e),
        }
    }
}

impl Default for CacheConfig {
    /// Creates the default L1 geometry.
    fn default() -> Self {
        Self {
            size_bytes: defaults::L1_SIZE,
            block_bytes: defaults::BLOCK_BYTES,
            ways: defaults::L1_WAYS,
            policy: ReplacementPolicy::default(),
        }
    }
}

/// Two-level hierarchy configuration.
///
/// # Examples
///
/// ```
/// use cachesim_core::config::{HierarchyConfig, ReplacementPolicy};
///
/// let json = r#"{
///     "l1": { "size_bytes": 64, "block_bytes": 4, "ways": 2, "policy": "LRU" },
///     "l2": { "size_bytes": 128, "block_bytes": 4, "ways": 4, "policy": "Lru" }
/// }"#;
///
/// let config = HierarchyConfig::from_json(json).unwrap();
/// assert_eq!(config.l1.policy, ReplacementPolicy::Lru);
/// assert_eq!(config.l2.num_sets(), Ok(8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct HierarchyConfig {
    /// L1 geometry
    #[serde(default)]
    pub l1: CacheConfig,
    /// L2 geometry
    #[serde(default = "HierarchyConfig::default_l2")]
    pub l2: CacheConfig,
}

impl HierarchyConfig {
    /// Returns the default L2 geometry.
    const fn default_l2() -> CacheConfig {
        CacheConfig {
            size_bytes: defaults::L2_SIZE,
            block_bytes: defaults::BLOCK_BYTES,
            ways: defaults::L2_WAYS,
            policy: ReplacementPolicy::Fifo,
        }
    }

    /// Parses a hierarchy configuration from JSON. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Config`] if the text is not a valid configuration.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Io`] if the file cannot be read and
    /// [`SimError::Config`] if its contents do not parse.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SimError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Sets the same replacement policy on both levels.
    #[must_use]
    pub const fn with_policy(mut self, policy: ReplacementPolicy) -> Self {
        self.l1.policy = policy;
        self.l2.policy = policy;
        self
    }

    /// Checks that both levels can be built.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::Geometry`] naming the first invalid level.
    pub fn validate(&self) -> Result<(), SimError> {
        self.l1
            .validate()
            .map_err(|e| SimError::geometry("L1", e))?;
        self.l2
            .validate()
            .map_err(|e| SimError::geometry("L2", e))
    }
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            l1: CacheConfig::default(),
            l2: Self::default_l2(),
        }
    }
}
