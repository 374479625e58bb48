//! Unit tests for common types.


/// Error display and sources.
pub mod error;
