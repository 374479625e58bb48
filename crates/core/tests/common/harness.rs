//! Hierarchy builders and invariant assertions shared by the test suite.

use std::collections::HashSet;

use cachesim_core::{BlockAddr, ByteAddr, CacheHierarchy, CacheLevel, ReplacementPolicy};

/// Installs a test subscriber so `RUST_LOG=debug cargo test` shows protocol events.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Builds the reference hierarchy.
///
/// L1: 64 bytes, 4-byte blocks, 2-way (8 sets).
/// L2: 128 bytes, 4-byte blocks, 4-way (8 sets).
pub fn build_cache(policy: ReplacementPolicy) -> CacheHierarchy {
    init_tracing();
    let l1 = CacheLevel::new(64, 4, 2, policy).unwrap();
    let l2 = CacheLevel::new(128, 4, 4, policy).unwrap();
    CacheHierarchy::new(l1, l2)
}

/// Issues each byte address in order.
pub fn access_all(cache: &mut CacheHierarchy, addrs: &[u64]) {
    for &addr in addrs {
        cache.access(ByteAddr(addr));
    }
}

/// Collects every block resident in a level.
pub fn resident(level: &CacheLevel) -> HashSet<BlockAddr> {
    level.sets().flat_map(|set| set.iter()).collect()
}

/// Asserts no set in the level holds more than `ways` blocks.
pub fn assert_capacity(level: &CacheLevel) {
    for (index, set) in level.sets().enumerate() {
        assert!(
            set.len() <= level.ways(),
            "set {index} holds {} blocks with {} ways",
            set.len(),
            level.ways()
        );
    }
}

/// Asserts every resident block sits in the set its address maps to.
pub fn assert_placement(level: &CacheLevel) {
    for (index, set) in level.sets().enumerate() {
        for block in set.iter() {
            assert_eq!(block.set_index(level.num_sets()), index, "{block} misplaced");
        }
    }
}

/// Asserts no block is resident in both levels.
pub fn assert_exclusive(cache: &CacheHierarchy) {
    let l1 = resident(cache.l1());
    let l2 = resident(cache.l2());
    let both: Vec<_> = l1.intersection(&l2).collect();
    assert!(both.is_empty(), "blocks resident in both levels: {both:?}");
}
