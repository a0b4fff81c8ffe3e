// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dense distance matrix with grow-only backing storage.
//!
//! The matrix is (|A|+1) × (|B|+1), row-major. Storage is reused across calls and
//! only ever grows, so a long-lived engine stops allocating once it has seen its
//! largest input. The active region is whatever `rows × cols` the last `fill` set;
//! cells past that are stale leftovers and never read.
//!
//! # Invariants
//!
//! - `m[i][0] = i` (delete the first i bytes of A)
//! - `m[0][j] = j` (insert the first j bytes of B)
//! - `m[i][j] = min(m[i-1][j] + 1, m[i][j-1] + 1, m[i-1][j-1] + [A[i-1] ≠ B[j-1]])`

use crate::verify::contracts::check_matrix_boundaries;

#[derive(Debug, Clone, Default)]
pub struct DistanceMatrix {
    cells: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl DistanceMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// Cell value in the active region.
    ///
    /// # Panics
    /// Panics if `(row, col)` is outside the active region.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({}, {}) outside {}x{} matrix",
            row,
            col,
            self.rows,
            self.cols
        );
        self.cells[self.index(row, col)]
    }

    #[inline]
    fn set(&mut self, row: usize, col: usize, value: usize) {
        let index = self.index(row, col);
        self.cells[index] = value;
    }

    /// Rows in the active region (|A| + 1).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Columns in the active region (|B| + 1).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cells of backing storage. Never decreases.
    pub fn capacity(&self) -> usize {
        self.cells.len()
    }

    /// Set the active region, growing storage only if it is too small.
    pub fn reshape(&mut self, rows: usize, cols: usize) {
        let required = rows * cols;
        if required > self.cells.len() {
            self.cells.resize(required, 0);
        }
        self.rows = rows;
        self.cols = cols;
    }

    /// Fill the whole matrix for `a` (rows) against `b` (columns) and return the
    /// bottom-right cell.
    pub fn fill(&mut self, a: &[u8], b: &[u8]) -> usize {
        self.reshape(a.len() + 1, b.len() + 1);

        // Column 0 represents deletions from A
        for ia in 0..=a.len() {
            self.set(ia, 0, ia);
        }

        // Row 0 represents insertions from B
        for ib in 1..=b.len() {
            self.set(0, ib, ib);
        }

        // Row by row, left to right: every neighbour is already final
        for (ia, &ca) in a.iter().enumerate() {
            let row = ia + 1;
            for (ib, &cb) in b.iter().enumerate() {
                let col = ib + 1;
                let deletion = self.get(row - 1, col) + 1;
                let insertion = self.get(row, col - 1) + 1;
                let replacement = self.get(row - 1, col - 1) + usize::from(ca != cb);
                self.set(row, col, deletion.min(insertion).min(replacement));
            }
        }

        check_matrix_boundaries(self);

        self.final_distance()
    }

    /// Bottom-right cell of the active region.
    pub fn final_distance(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }
}
