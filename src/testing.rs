//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::bounded::{BoundedDistance, DistanceError};
use crate::engine::ReferenceEngine;
use crate::types::EditScript;
use crate::verify::replay;

/// Reference distance with the self-check on.
///
/// This is the canonical oracle used across all tests.
pub fn reference_distance(a: &[u8], b: &[u8]) -> usize {
    ReferenceEngine::new().distance(a, b, true)
}

/// Bounded distance with the default limit.
pub fn bounded_distance(a: &[u8], b: &[u8]) -> Result<usize, DistanceError> {
    BoundedDistance::new().distance(a, b)
}

/// Canonical edit script for a pair.
pub fn canonical_script(a: &[u8], b: &[u8]) -> EditScript {
    ReferenceEngine::new().edit_script(a, b)
}

/// Assert that both engines agree wherever the bounded one accepts the input.
pub fn assert_engines_agree(a: &[u8], b: &[u8]) {
    let expected = reference_distance(a, b);
    if let Ok(actual) = bounded_distance(a, b) {
        assert_eq!(
            actual,
            expected,
            "engines disagree on {:?} vs {:?}",
            String::from_utf8_lossy(a),
            String::from_utf8_lossy(b)
        );
    }
}

/// Assert that the canonical script replays `a` into `b` at minimal cost.
pub fn assert_script_valid(a: &[u8], b: &[u8]) {
    let script = canonical_script(a, b);
    let output = replay(&script, a, b).unwrap_or_else(|err| {
        panic!(
            "replay failed for {:?} vs {:?}: {}",
            String::from_utf8_lossy(a),
            String::from_utf8_lossy(b),
            err
        )
    });
    assert_eq!(output, b);
    assert_eq!(script.cost(), reference_distance(a, b));
}
