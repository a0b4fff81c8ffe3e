// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for engine agreement.
//!
//! Both engines implement the same recurrence with different memory layouts.
//! Whenever the bounded engine accepts a pair it must return exactly what the
//! self-checking reference engine returns. Engines are reused across inputs to
//! shake out stale scratch state.

#![no_main]

use arbitrary::Arbitrary;
use levscript::{BoundedDistance, DistanceError, ReferenceEngine, MAX_INPUT_SIZE};
use libfuzzer_sys::fuzz_target;
use std::cell::RefCell;

#[derive(Debug, Arbitrary)]
struct PairInput {
    a: Vec<u8>,
    b: Vec<u8>,
}

thread_local! {
    static ENGINES: RefCell<(BoundedDistance, ReferenceEngine)> =
        RefCell::new((BoundedDistance::new(), ReferenceEngine::new()));
}

fuzz_target!(|input: PairInput| {
    // Cap lengths to keep the O(n·m) reference engine fast
    let a = &input.a[..input.a.len().min(160)];
    let b = &input.b[..input.b.len().min(160)];

    ENGINES.with(|engines| {
        let (bounded, reference) = &mut *engines.borrow_mut();

        // verify=true: a bad backtrace panics with a contract violation
        let expected = reference.distance(a, b, true);

        // Metric bounds
        assert!(expected <= a.len().max(b.len()));
        assert!(expected >= a.len().abs_diff(b.len()));
        assert_eq!(expected == 0, a == b);

        match bounded.distance(a, b) {
            Ok(actual) => assert_eq!(
                actual, expected,
                "engines disagree on {:?} vs {:?}",
                a, b
            ),
            Err(DistanceError::InputTooLarge { shorter_len, limit }) => {
                assert_eq!(limit, MAX_INPUT_SIZE);
                assert_eq!(shorter_len, a.len().min(b.len()));
                assert!(shorter_len > MAX_INPUT_SIZE);
            }
        }
    });
});
