//! Shared test utilities and strategies.

#![allow(dead_code, unused_imports)]

use proptest::prelude::*;

// Re-export canonical test utilities from levscript::testing
pub use levscript::testing::{
    assert_engines_agree, assert_script_valid, bounded_distance, canonical_script,
    reference_distance,
};

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short strings over a tiny alphabet, so matches and ties are common.
pub fn small_alphabet(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"abc".to_vec()), 0..=max_len)
}

/// Arbitrary bytes, including NUL and high bytes.
pub fn any_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Mix of both: most cases small-alphabet, some raw bytes.
pub fn input(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        3 => small_alphabet(max_len),
        1 => any_bytes(max_len),
    ]
}

// ============================================================================
// ORACLES
// ============================================================================

/// Independent Levenshtein implementation from the `strsim` crate.
pub fn strsim_distance(a: &[u8], b: &[u8]) -> usize {
    strsim::generic_levenshtein(&a.to_vec(), &b.to_vec())
}
