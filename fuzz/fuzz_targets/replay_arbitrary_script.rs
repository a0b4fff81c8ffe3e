// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for replay on hostile scripts.
//!
//! Replay must never panic, whatever the script claims. When it does accept a
//! script, the output has to be the target and both sides fully consumed.

#![no_main]

use arbitrary::Arbitrary;
use levscript::{replay, EditOp, EditScript};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum FuzzOp {
    Keep(u8),
    Delete(u8),
    Insert(u8),
    Replace(u8, u8),
}

impl From<FuzzOp> for EditOp {
    fn from(op: FuzzOp) -> Self {
        match op {
            FuzzOp::Keep(byte) => EditOp::Keep { byte },
            FuzzOp::Delete(byte) => EditOp::Delete { byte },
            FuzzOp::Insert(byte) => EditOp::Insert { byte },
            FuzzOp::Replace(removed, inserted) => EditOp::Replace { removed, inserted },
        }
    }
}

#[derive(Debug, Arbitrary)]
struct ReplayInput {
    ops: Vec<FuzzOp>,
    a: Vec<u8>,
    b: Vec<u8>,
}

fuzz_target!(|input: ReplayInput| {
    let script: EditScript = input
        .ops
        .into_iter()
        .map(EditOp::from)
        .collect::<Vec<_>>()
        .into();

    if let Ok(output) = replay(&script, &input.a, &input.b) {
        assert_eq!(output, input.b);
        assert_eq!(script.source_len(), input.a.len());
        assert_eq!(script.target_len(), input.b.len());
    }
});
