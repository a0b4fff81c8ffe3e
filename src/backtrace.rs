// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit script recovery from a filled distance matrix.
//!
//! This is "Algorithm Y" from Wagner and Fischer: start at the bottom-right cell
//! and ask, at each step, which neighbour this value came from. Several minimal
//! scripts can exist for the same pair; the order of the checks picks exactly one.
//!
//! # Tie-break order
//!
//! Delete, then Insert, then the diagonal (Replace or Keep). The first transition
//! that reproduces the current value wins. Changing this order changes which
//! script comes out, and the fixed order is part of the contract.

use crate::matrix::DistanceMatrix;
use crate::types::{EditOp, EditScript};

/// Walk `matrix` back from the bottom-right cell and return the canonical edit
/// script, in left-to-right order.
///
/// `matrix` must have been filled from exactly `a` and `b`.
pub fn backtrace(matrix: &DistanceMatrix, a: &[u8], b: &[u8]) -> EditScript {
    debug_assert_eq!(
        (matrix.rows(), matrix.cols()),
        (a.len() + 1, b.len() + 1),
        "Contract violation: matrix shape does not match inputs"
    );

    let mut ia = a.len();
    let mut ib = b.len();

    // Every step consumes at least one byte of A or B
    let mut ops = Vec::with_capacity(a.len() + b.len());

    while ia > 0 && ib > 0 {
        let current = matrix.get(ia, ib);

        if current == matrix.get(ia - 1, ib) + 1 {
            ia -= 1;
            ops.push(EditOp::Delete { byte: a[ia] });
        } else if current == matrix.get(ia, ib - 1) + 1 {
            ib -= 1;
            ops.push(EditOp::Insert { byte: b[ib] });
        } else {
            ia -= 1;
            ib -= 1;
            if a[ia] == b[ib] {
                ops.push(EditOp::Keep { byte: a[ia] });
            } else {
                ops.push(EditOp::Replace {
                    removed: a[ia],
                    inserted: b[ib],
                });
            }
        }
    }

    // One side is used up; the rest of the other is pure deletes or inserts
    while ia > 0 {
        ia -= 1;
        ops.push(EditOp::Delete { byte: a[ia] });
    }

    while ib > 0 {
        ib -= 1;
        ops.push(EditOp::Insert { byte: b[ib] });
    }

    ops.reverse();
    EditScript::new(ops)
}
