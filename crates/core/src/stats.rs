//! Simulation statistics collection and reporting.
//!
//! This module holds the snapshot a hierarchy reports. It provides:
//! 1. **Per-level counters:** Hits, misses and the derived hit ratio.
//! 2. **Miss propagation:** How often L2 and the backing memory were consulted.
//! 3. **Reporting:** A plain-text report (`Display`) and a JSON form (`Serialize`).

use std::fmt;

use serde::Serialize;

/// Hit and miss counters of one cache level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LevelStats {
    /// Lookups that found the block resident.
    pub hits: u64,
    /// Lookups that did not.
    pub misses: u64,
}

impl LevelStats {
    /// Total lookups at this level.
    pub const fn accesses(&self) -> u64 {
        self.hits + self.misses
    }

    /// `hits / (hits + misses)`, or `0.0` when the level was never consulted.
    ///
    /// Always within `[0, 1]`.
    pub fn hit_ratio(&self) -> f64 {
        match self.accesses() {
            0 => 0.0,
            total => self.hits as f64 / total as f64,
        }
    }
}

/// Statistics snapshot of a two-level hierarchy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HierarchyStats {
    /// Addresses issued to the hierarchy.
    pub accesses: u64,
    /// L1 counters.
    pub l1: LevelStats,
    /// L2 counters.
    pub l2: LevelStats,
}

impl HierarchyStats {
    /// Times L2 was consulted (equal to the L1 miss count).
    pub const fn l1_to_l2(&self) -> u64 {
        self.l1.misses
    }

    /// Times the backing memory was consulted (equal to the L2 miss count).
    pub const fn l2_to_memory(&self) -> u64 {
        self.l2.misses
    }

    /// Renders the report as pretty-printed JSON, including the derived
    /// ratios and propagation counts.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let level = |s: &LevelStats| {
            serde_json::json!({
                "hits": s.hits,
                "misses": s.misses,
                "hit_ratio": s.hit_ratio(),
            })
        };
        serde_json::to_string_pretty(&serde_json::json!({
            "accesses": self.accesses,
            "l1": level(&self.l1),
            "l2": level(&self.l2),
            "miss_propagation": {
                "l1_to_l2": self.l1_to_l2(),
                "l2_to_memory": self.l2_to_memory(),
            },
        }))
    }

    /// Prints the text report to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for HierarchyStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Accesses : {}", self.accesses)?;
        writeln!(f)?;
        for (name, level) in [("L1", &self.l1), ("L2", &self.l2)] {
            writeln!(f, "{name} Hits : {}", level.hits)?;
            writeln!(f, "{name} Misses : {}", level.misses)?;
            writeln!(f, "{name} Hit Ratio : {:.4}", level.hit_ratio())?;
            writeln!(f)?;
        }
        writeln!(f, "Miss Propagation:")?;
        writeln!(f, "  L1 -> L2 accesses : {}", self.l1_to_l2())?;
        writeln!(f, "  L2 -> Memory accesses : {}", self.l2_to_memory())
    }
}
