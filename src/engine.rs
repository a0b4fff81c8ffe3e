// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The reference engine: full-matrix Wagner-Fischer with an optional self-check.
//!
//! This is the gold standard the fast path is tested against. It keeps the whole
//! (|A|+1) × (|B|+1) matrix, which costs O(n·m) memory but means the answer can be
//! explained: a backtrace over the matrix yields an explicit edit script, and
//! replaying that script proves the number is right.
//!
//! # Self-check
//!
//! With `verify = true`, every call backtraces and replays before returning. A
//! failure there is a bug in this module and panics through
//! `verify::contracts`; it is never reported as an ordinary error.

use crate::backtrace::backtrace;
use crate::matrix::DistanceMatrix;
use crate::types::EditScript;
use crate::verify::contracts::check_edit_script;

/// Full-matrix edit distance engine.
///
/// The matrix is scratch space reused across calls. One engine per thread.
#[derive(Debug, Clone, Default)]
pub struct ReferenceEngine {
    matrix: DistanceMatrix,
}

impl ReferenceEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit distance between `a` and `b`, optionally self-checked.
    ///
    /// Never fails on its inputs. With `verify`, panics if the engine's own
    /// backtrace does not reproduce `b` at exactly the returned cost.
    pub fn distance(&mut self, a: &[u8], b: &[u8], verify: bool) -> usize {
        let distance = self.matrix.fill(a, b);

        if verify {
            let script = backtrace(&self.matrix, a, b);
            check_edit_script(a, b, &script, distance);
        }

        distance
    }

    /// The canonical edit script turning `a` into `b`.
    pub fn edit_script(&mut self, a: &[u8], b: &[u8]) -> EditScript {
        self.matrix.fill(a, b);
        backtrace(&self.matrix, a, b)
    }

    /// The matrix left behind by the last call.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }
}
