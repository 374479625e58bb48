//! Common types shared across the simulator.
//!
//! This module provides the fundamental building blocks used by every other
//! component. It includes:
//! 1. **Address Types:** Strong types for byte and block addresses.
//! 2. **Error Handling:** Geometry validation and harness error types.

/// Address type definitions (byte and block addresses).
pub mod addr;

/// Error types.
pub mod error;

pub use addr::{BlockAddr, ByteAddr};
pub use error::{GeometryError, SimError};
