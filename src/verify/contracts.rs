// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the distance engines.
//!
//! These are not error handling. A contract failure means the engine itself is
//! wrong: the forward fill and the backtrace disagree, or the script doesn't
//! rebuild the target. There is nothing a caller could do about that, so the
//! contracts panic (and the release profile turns a panic into an abort).
//!
//! Two flavours:
//!
//! 1. **Debug contracts** (`debug_assert!`): cheap structural checks, zero-cost
//!    in release builds.
//! 2. **Self-check contracts**: always on, but only reached when the caller asks
//!    the reference engine to verify.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function          | Property                                       |
//! |----------------------------|------------------------------------------------|
//! | `check_matrix_boundaries`  | `m[i][0] = i`, `m[0][j] = j`                    |
//! | `check_edit_script`        | replay(script, a) = b ∧ cost(script) = distance |

use super::replay::replay;
use crate::matrix::DistanceMatrix;
use crate::types::EditScript;

// ============================================================================
// MATRIX CONTRACTS
// ============================================================================

/// Check row 0 and column 0 of a filled matrix.
///
/// # Panics (debug builds only)
/// Panics if a boundary cell doesn't hold its index.
#[inline]
pub fn check_matrix_boundaries(matrix: &DistanceMatrix) {
    if cfg!(debug_assertions) {
        for i in 0..matrix.rows() {
            debug_assert_eq!(
                matrix.get(i, 0),
                i,
                "Contract violation: matrix column 0 - m[{}][0] = {}",
                i,
                matrix.get(i, 0)
            );
        }
        for j in 0..matrix.cols() {
            debug_assert_eq!(
                matrix.get(0, j),
                j,
                "Contract violation: matrix row 0 - m[0][{}] = {}",
                j,
                matrix.get(0, j)
            );
        }
    }
}

// ============================================================================
// EDIT SCRIPT CONTRACTS
// ============================================================================

/// Check that `script` turns `a` into `b` at a cost of exactly `distance`.
///
/// # Panics
/// Panics in all builds if replay fails or the cost disagrees with `distance`.
pub fn check_edit_script(a: &[u8], b: &[u8], script: &EditScript, distance: usize) {
    if let Err(err) = replay(script, a, b) {
        consistency_violation(&format!("edit script replay failed - {}", err), a, b);
    }

    let cost = script.cost();
    if cost != distance {
        consistency_violation(
            &format!("edit script costs {} but distance is {}", cost, distance),
            a,
            b,
        );
    }
}

#[cold]
#[inline(never)]
fn consistency_violation(message: &str, a: &[u8], b: &[u8]) -> ! {
    panic!(
        "Contract violation: {} (a = {:?}, b = {:?})",
        message,
        String::from_utf8_lossy(a),
        String::from_utf8_lossy(b)
    );
}
