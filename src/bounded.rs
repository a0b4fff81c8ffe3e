// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fast path: Wagner-Fischer with a single rolling row.
//!
//! The full distance matrix is never needed just to get the number out. Each cell
//! depends only on its left, upper and upper-left neighbours, so one row plus a
//! carried scalar is enough. The row is sized to the shorter input, which is why
//! the shorter side is capped by a limit while the longer side is unbounded.
//!
//! Wagner, R. A. and Fischer, M. J., "The String-to-String Correction Problem",
//! Journal of the ACM 21(1), 1974. <https://doi.org/10.1145/321796.321811>

use std::fmt;

/// Default limit on the length of the shorter input.
///
/// There is no limit on the longer input.
pub const MAX_INPUT_SIZE: usize = 100;

/// A declinable result: the inputs are valid, this engine just won't take them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceError {
    /// The shorter input exceeds the configured limit.
    InputTooLarge { shorter_len: usize, limit: usize },
}

impl DistanceError {
    /// Conventional sentinel for callers that want a plain integer back.
    pub const SENTINEL: i64 = -1;
}

impl fmt::Display for DistanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceError::InputTooLarge { shorter_len, limit } => write!(
                f,
                "shorter input has {} bytes, limit is {}",
                shorter_len, limit
            ),
        }
    }
}

impl std::error::Error for DistanceError {}

/// Space-optimized edit distance: O(min(n, m)) memory, O(n·m) time.
///
/// Holds its rolling row between calls so repeated use doesn't reallocate. Not
/// shareable across threads mid-call; use one instance per worker.
#[derive(Debug, Clone)]
pub struct BoundedDistance {
    limit: usize,
    row: Vec<usize>,
}

impl Default for BoundedDistance {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundedDistance {
    /// Engine with the default `MAX_INPUT_SIZE` limit.
    pub fn new() -> Self {
        Self::with_limit(MAX_INPUT_SIZE)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit,
            row: Vec::new(),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Minimum number of single-byte insertions, deletions and replacements that
    /// turn `a` into `b`.
    ///
    /// Returns `InputTooLarge` when the shorter input is longer than the limit. An
    /// empty shorter input always succeeds, whatever the length of the other one.
    pub fn distance(&mut self, a: &[u8], b: &[u8]) -> Result<usize, DistanceError> {
        // The row runs along the shorter input
        let (longer, shorter) = if b.len() > a.len() { (b, a) } else { (a, b) };

        if shorter.is_empty() {
            return Ok(longer.len());
        }

        if shorter.len() > self.limit {
            return Err(DistanceError::InputTooLarge {
                shorter_len: shorter.len(),
                limit: self.limit,
            });
        }

        // Row 0: cost of building each prefix of `shorter` from nothing
        self.row.clear();
        self.row.extend(0..=shorter.len());

        let row = &mut self.row;
        let mut distance = shorter.len();

        for (ia, &ca) in longer.iter().enumerate() {
            // Column 0 of row ia+1: delete the first ia+1 bytes
            distance = ia + 1;

            for (ib, &cb) in shorter.iter().enumerate() {
                // row[ib] still holds the previous row: the upper-left neighbour
                let replacement = row[ib] + usize::from(ca != cb);

                // Commit the cell to the left before it is lost
                row[ib] = distance;

                let insertion = distance + 1;
                let deletion = row[ib + 1] + 1;

                distance = replacement.min(insertion).min(deletion);
            }

            row[shorter.len()] = distance;
        }

        Ok(distance)
    }
}

/// Edit distance with the default limit on the shorter input.
pub fn distance_bounded(a: &[u8], b: &[u8]) -> Result<usize, DistanceError> {
    BoundedDistance::new().distance(a, b)
}

/// Like [`distance_bounded`], but folds the error into the `-1` sentinel.
pub fn distance_or_sentinel(a: &[u8], b: &[u8]) -> i64 {
    match distance_bounded(a, b) {
        Ok(distance) => distance as i64,
        Err(_) => DistanceError::SENTINEL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical() {
        assert_eq!(distance_bounded(b"hello", b"hello"), Ok(0));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(distance_bounded(b"", b""), Ok(0));
        assert_eq!(distance_bounded(b"a", b""), Ok(1));
        assert_eq!(distance_bounded(b"", b"abcd"), Ok(4));
    }

    #[test]
    fn test_literal_scenarios() {
        assert_eq!(distance_bounded(b"ab", b"cd"), Ok(2));
        assert_eq!(distance_bounded(b"abcdefg", b"abdefg"), Ok(1));
        assert_eq!(distance_bounded(b"abcdefg", b"ABbXdfg"), Ok(4));
        assert_eq!(distance_bounded(b"1234567890abcdefghijklmnop", b"ABCDEF"), Ok(26));
    }

    #[test]
    fn test_argument_order_does_not_matter() {
        assert_eq!(distance_bounded(b"kitten", b"sitting"), Ok(3));
        assert_eq!(distance_bounded(b"sitting", b"kitten"), Ok(3));
    }

    #[test]
    fn test_limit_applies_to_shorter_input() {
        let long = vec![b'x'; MAX_INPUT_SIZE + 1];
        let longer = vec![b'y'; MAX_INPUT_SIZE + 50];
        assert_eq!(
            distance_bounded(&long, &longer),
            Err(DistanceError::InputTooLarge {
                shorter_len: MAX_INPUT_SIZE + 1,
                limit: MAX_INPUT_SIZE
            })
        );
        assert_eq!(distance_or_sentinel(&long, &longer), -1);
    }

    #[test]
    fn test_longer_input_is_unbounded() {
        let short = vec![b'x'; MAX_INPUT_SIZE];
        let long = vec![b'x'; 10 * MAX_INPUT_SIZE];
        assert_eq!(distance_bounded(&short, &long), Ok(9 * MAX_INPUT_SIZE));
    }

    #[test]
    fn test_empty_shorter_wins_over_limit() {
        let mut engine = BoundedDistance::with_limit(0);
        assert_eq!(engine.distance(b"", b"abc"), Ok(3));
        assert!(engine.distance(b"a", b"abc").is_err());
    }

    #[test]
    fn test_custom_limit() {
        let mut engine = BoundedDistance::with_limit(3);
        assert_eq!(engine.limit(), 3);
        assert_eq!(engine.distance(b"abc", b"abcdefgh"), Ok(5));
        assert_eq!(
            engine.distance(b"abcd", b"abcdefgh"),
            Err(DistanceError::InputTooLarge {
                shorter_len: 4,
                limit: 3
            })
        );
    }

    #[test]
    fn test_row_is_reused_across_calls() {
        let mut engine = BoundedDistance::new();
        assert_eq!(engine.distance(b"abcdefgh", b"abcdefgh"), Ok(0));
        // A shorter second call must not see stale cells from the first
        assert_eq!(engine.distance(b"ab", b"ba"), Ok(2));
        assert_eq!(engine.distance(b"a", b"b"), Ok(1));
    }

    #[test]
    fn test_error_display() {
        let err = DistanceError::InputTooLarge {
            shorter_len: 101,
            limit: 100,
        };
        assert_eq!(err.to_string(), "shorter input has 101 bytes, limit is 100");
    }
}
