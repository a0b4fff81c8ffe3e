// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for backtraced edit scripts.
//!
//! The canonical script for any pair must replay the source into the target,
//! cost exactly the distance, and account for every byte on both sides.

#![no_main]

use arbitrary::Arbitrary;
use levscript::{replay, ReferenceEngine};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct PairInput {
    a: Vec<u8>,
    b: Vec<u8>,
}

fuzz_target!(|input: PairInput| {
    let a = &input.a[..input.a.len().min(128)];
    let b = &input.b[..input.b.len().min(128)];

    let mut engine = ReferenceEngine::new();
    let distance = engine.distance(a, b, false);
    let script = engine.edit_script(a, b);

    assert_eq!(script.cost(), distance, "script cost differs from distance");
    assert_eq!(script.source_len(), a.len());
    assert_eq!(script.target_len(), b.len());

    match replay(&script, a, b) {
        Ok(output) => assert_eq!(output, b),
        Err(err) => panic!("canonical script failed to replay: {}", err),
    }
});
