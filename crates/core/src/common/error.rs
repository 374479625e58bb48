//! Error definitions.
//!
//! The hierarchy itself has no runtime failure modes: every access, insert and
//! removal is a total function. Errors surface in two places only:
//! 1. **Geometry validation:** A level whose parameters yield zero sets is
//!    rejected when it is built, so set selection can never divide by zero.
//! 2. **Harness input:** Loading configuration files and address traces.

use std::path::PathBuf;

use thiserror::Error;

/// A cache level geometry that cannot be built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// Total cache size of zero bytes.
    #[error("cache size must be non-zero")]
    ZeroSize,

    /// Block size of zero bytes.
    #[error("block size must be non-zero")]
    ZeroBlockSize,

    /// Associativity of zero ways.
    #[error("associativity must be non-zero")]
    ZeroWays,

    /// `size_bytes / (block_bytes * ways)` truncates to zero sets.
    ///
    /// Also reported when `block_bytes * ways` overflows.
    #[error(
        "geometry yields no sets: {size_bytes} bytes cannot hold one set of {ways} x {block_bytes}-byte blocks"
    )]
    NoSets {
        /// Configured total size in bytes.
        size_bytes: usize,
        /// Configured block size in bytes.
        block_bytes: usize,
        /// Configured associativity.
        ways: usize,
    },
}

/// Errors raised while configuring or driving a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// One of the hierarchy's levels has an invalid geometry.
    #[error("{level}: {source}")]
    Geometry {
        /// Level name, `"L1"` or `"L2"`.
        level: &'static str,
        /// The underlying geometry problem.
        #[source]
        source: GeometryError,
    },

    /// Configuration JSON could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A configuration or trace file could not be read.
    #[error("could not read {path:?}: {source}")]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A trace token is not an unsigned decimal or hexadecimal integer.
    #[error("trace line {line}: invalid address '{token}'")]
    Trace {
        /// 1-based line number of the offending token.
        line: usize,
        /// The token as written.
        token: String,
    },
}

impl SimError {
    /// Attaches a level name to a geometry error.
    pub const fn geometry(level: &'static str, source: GeometryError) -> Self {
        Self::Geometry { level, source }
    }
}
