// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What can go wrong when an edit script is replayed.
//!
//! None of these should ever show up for a script produced by the engine. They
//! exist so replay can say precisely where the script and the inputs disagree,
//! and so tests can feed it broken scripts on purpose.

use crate::types::EditOp;
use std::fmt;

/// Which input sequence a replay step reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The source sequence A.
    Source,
    /// The target sequence B.
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => f.write_str("source"),
            Side::Target => f.write_str("target"),
        }
    }
}

/// Error type for edit script replay failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// The byte recorded in the operation is not the next byte of the input.
    ByteMismatch {
        step: usize,
        op: EditOp,
        side: Side,
        expected: u8,
        found: u8,
    },
    /// The operation wants a byte, but that input is already fully consumed.
    Exhausted { step: usize, op: EditOp, side: Side },
    /// The script ended with bytes of an input left over.
    Unconsumed {
        side: Side,
        consumed: usize,
        len: usize,
    },
    /// The rebuilt output is not the target sequence.
    OutputMismatch { output_len: usize, target_len: usize },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::ByteMismatch {
                step,
                op,
                side,
                expected,
                found,
            } => write!(
                f,
                "step {} ({}): {} byte is {:?}, operation records {:?}",
                step,
                op,
                side,
                char::from(*found),
                char::from(*expected)
            ),
            ReplayError::Exhausted { step, op, side } => {
                write!(f, "step {} ({}): {} already fully consumed", step, op, side)
            }
            ReplayError::Unconsumed {
                side,
                consumed,
                len,
            } => write!(
                f,
                "script consumed {} of {} {} bytes",
                consumed, len, side
            ),
            ReplayError::OutputMismatch {
                output_len,
                target_len,
            } => write!(
                f,
                "edited output ({} bytes) differs from target ({} bytes)",
                output_len, target_len
            ),
        }
    }
}

impl std::error::Error for ReplayError {}
