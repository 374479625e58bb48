//! # Configuration Tests
//!
//! Tests for configuration defaults, JSON deserialization, file loading and
//! geometry validation.

use std::io::Write;

use cachesim_core::common::{GeometryError, SimError};
use cachesim_core::config::*;
use rstest::rstest;
use tempfile::NamedTempFile;

#[test]
fn test_cache_config_defaults() {
    let cache = CacheConfig::default();
    assert_eq!(cache.size_bytes, 64);
    assert_eq!(cache.block_bytes, 4);
    assert_eq!(cache.ways, 2);
    assert_eq!(cache.policy, ReplacementPolicy::Fifo);
    assert_eq!(cache.num_sets(), Ok(8));
}

#[test]
fn test_hierarchy_defaults_match_reference_geometry() {
    let config = HierarchyConfig::default();
    assert_eq!(config.l1, CacheConfig::new(64, 4, 2, ReplacementPolicy::Fifo));
    assert_eq!(config.l2, CacheConfig::new(128, 4, 4, ReplacementPolicy::Fifo));
    assert_eq!(config.l2.num_sets(), Ok(8));
    assert!(config.validate().is_ok());
}

#[test]
fn test_json_full() {
    let json = r#"{
        "l1": { "size_bytes": 256, "block_bytes": 16, "ways": 4, "policy": "LRU" },
        "l2": { "size_bytes": 1024, "block_bytes": 16, "ways": 8, "policy": "FIFO" }
    }"#;
    let config = HierarchyConfig::from_json(json).unwrap();
    assert_eq!(config.l1, CacheConfig::new(256, 16, 4, ReplacementPolicy::Lru));
    assert_eq!(config.l2, CacheConfig::new(1024, 16, 8, ReplacementPolicy::Fifo));
    assert_eq!(config.l1.num_sets(), Ok(4));
    assert_eq!(config.l2.num_sets(), Ok(8));
}

#[test]
fn test_json_empty_object_is_default() {
    let config = HierarchyConfig::from_json("{}").unwrap();
    assert_eq!(config, HierarchyConfig::default());
}

#[test]
fn test_json_partial_level_fills_defaults() {
    let config = HierarchyConfig::from_json(r#"{ "l1": { "ways": 1 } }"#).unwrap();
    assert_eq!(config.l1.ways, 1);
    assert_eq!(config.l1.size_bytes, 64);
    assert_eq!(config.l1.block_bytes, 4);
    assert_eq!(config.l2, HierarchyConfig::default().l2);
}

#[rstest]
#[case("\"FIFO\"", ReplacementPolicy::Fifo)]
#[case("\"Fifo\"", ReplacementPolicy::Fifo)]
#[case("\"fifo\"", ReplacementPolicy::Fifo)]
#[case("\"LRU\"", ReplacementPolicy::Lru)]
#[case("\"Lru\"", ReplacementPolicy::Lru)]
#[case("\"lru\"", ReplacementPolicy::Lru)]
fn test_policy_names(#[case] json: &str, #[case] expected: ReplacementPolicy) {
    let policy: ReplacementPolicy = serde_json::from_str(json).unwrap();
    assert_eq!(policy, expected);
}

#[test]
fn test_unknown_policy_rejected() {
    let err = HierarchyConfig::from_json(r#"{ "l1": { "policy": "MRU" } }"#).unwrap_err();
    assert!(matches!(err, SimError::Config(_)));
}

#[test]
fn test_policy_serializes_uppercase() {
    assert_eq!(serde_json::to_string(&ReplacementPolicy::Lru).unwrap(), "\"LRU\"");
    let json = serde_json::to_string(&HierarchyConfig::default()).unwrap();
    let back = HierarchyConfig::from_json(&json).unwrap();
    assert_eq!(back, HierarchyConfig::default());
}

#[test]
fn test_with_policy_sets_both_levels() {
    let config = HierarchyConfig::default().with_policy(ReplacementPolicy::Lru);
    assert_eq!(config.l1.policy, ReplacementPolicy::Lru);
    assert_eq!(config.l2.policy, ReplacementPolicy::Lru);
}

#[rstest]
#[case(0, 4, 2, GeometryError::ZeroSize)]
#[case(64, 0, 2, GeometryError::ZeroBlockSize)]
#[case(64, 4, 0, GeometryError::ZeroWays)]
#[case(16, 4, 8, GeometryError::NoSets { size_bytes: 16, block_bytes: 4, ways: 8 })]
#[case(
    64,
    usize::MAX,
    2,
    GeometryError::NoSets { size_bytes: 64, block_bytes: usize::MAX, ways: 2 }
)]
fn test_invalid_geometry(
    #[case] size: usize,
    #[case] block: usize,
    #[case] ways: usize,
    #[case] expected: GeometryError,
) {
    let config = CacheConfig::new(size, block, ways, ReplacementPolicy::Fifo);
    assert_eq!(config.num_sets(), Err(expected));
    assert_eq!(config.validate(), Err(expected));
}

#[rstest]
#[case(64, 4, 2, 8)]
#[case(128, 4, 4, 8)]
#[case(100, 4, 2, 12)] // remainder capacity is wasted
#[case(8, 4, 2, 1)] // fully associative
#[case(64, 4, 1, 16)] // direct mapped
fn test_num_sets_truncates(
    #[case] size: usize,
    #[case] block: usize,
    #[case] ways: usize,
    #[case] sets: usize,
) {
    let config = CacheConfig::new(size, block, ways, ReplacementPolicy::Lru);
    assert_eq!(config.num_sets(), Ok(sets));
}

#[test]
fn test_hierarchy_validate_names_level() {
    let mut config = HierarchyConfig::default();
    config.l2.ways = 64;
    match config.validate() {
        Err(SimError::Geometry { level, source }) => {
            assert_eq!(level, "L2");
            assert!(matches!(source, GeometryError::NoSets { .. }));
        }
        other => panic!("expected L2 geometry error, got {other:?}"),
    }
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "l1": { "policy": "LRU" } }"#).unwrap();
    file.flush().unwrap();

    let config = HierarchyConfig::load(file.path()).unwrap();
    assert_eq!(config.l1.policy, ReplacementPolicy::Lru);
}

#[test]
fn test_load_missing_file() {
    let err = HierarchyConfig::load("/nonexistent/cachesim/config.json").unwrap_err();
    assert!(matches!(err, SimError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/cachesim/config.json"));
}
