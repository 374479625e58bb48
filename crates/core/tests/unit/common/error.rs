//! # Error Tests
//!
//! This module contains unit tests for geometry and harness error reporting.

use std::error::Error;

use cachesim_core::common::{GeometryError, SimError};

#[test]
fn test_geometry_error_display() {
    assert_eq!(GeometryError::ZeroSize.to_string(), "cache size must be non-zero");
    assert_eq!(
        GeometryError::ZeroBlockSize.to_string(),
        "block size must be non-zero"
    );
    assert_eq!(GeometryError::ZeroWays.to_string(), "associativity must be non-zero");
}

#[test]
fn test_no_sets_display_names_geometry() {
    let err = GeometryError::NoSets {
        size_bytes: 16,
        block_bytes: 4,
        ways: 8,
    };
    let msg = err.to_string();
    assert!(msg.contains("16 bytes"));
    assert!(msg.contains("8 x 4-byte"));
}

#[test]
fn test_sim_error_geometry_has_level_and_source() {
    let err = SimError::geometry("L2", GeometryError::ZeroWays);
    assert_eq!(err.to_string(), "L2: associativity must be non-zero");
    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "associativity must be non-zero");
}

#[test]
fn test_sim_error_trace_display() {
    let err = SimError::Trace {
        line: 3,
        token: "-4".to_string(),
    };
    assert_eq!(err.to_string(), "trace line 3: invalid address '-4'");
}

#[test]
fn test_sim_error_from_json_error() {
    let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
    let err = SimError::from(json_err);
    assert!(matches!(err, SimError::Config(_)));
    assert!(err.to_string().starts_with("invalid configuration"));
}
