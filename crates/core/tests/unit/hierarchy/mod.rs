//! Unit tests for the exclusive two-level hierarchy.
