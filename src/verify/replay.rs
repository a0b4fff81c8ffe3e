// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Replay an edit script against both inputs.
//!
//! A and B are both treated as sources of truth: every operation must agree with
//! the next unconsumed byte of whichever side it touches. The bytes that land in
//! the output are rebuilt from the script alone, then compared with B at the end.

use super::types::{ReplayError, Side};
use crate::types::{EditOp, EditScript};

/// Cursor over one input sequence.
struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
    side: Side,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8], side: Side) -> Self {
        Self {
            bytes,
            pos: 0,
            side,
        }
    }

    /// Consume the next byte and require it to equal `expected`.
    fn take(&mut self, step: usize, op: EditOp, expected: u8) -> Result<u8, ReplayError> {
        let found = *self.bytes.get(self.pos).ok_or(ReplayError::Exhausted {
            step,
            op,
            side: self.side,
        })?;
        if found != expected {
            return Err(ReplayError::ByteMismatch {
                step,
                op,
                side: self.side,
                expected,
                found,
            });
        }
        self.pos += 1;
        Ok(found)
    }

    fn finish(&self) -> Result<(), ReplayError> {
        if self.pos == self.bytes.len() {
            Ok(())
        } else {
            Err(ReplayError::Unconsumed {
                side: self.side,
                consumed: self.pos,
                len: self.bytes.len(),
            })
        }
    }
}

/// Apply `script` to `a`, cross-checking every step against `a` and `b`, and
/// return the rebuilt output.
///
/// On success the output equals `b` and both inputs were consumed completely.
pub fn replay(script: &EditScript, a: &[u8], b: &[u8]) -> Result<Vec<u8>, ReplayError> {
    let mut source = Reader::new(a, Side::Source);
    let mut target = Reader::new(b, Side::Target);
    let mut output = Vec::with_capacity(b.len());

    for (step, &op) in script.iter().enumerate() {
        match op {
            EditOp::Delete { byte } => {
                source.take(step, op, byte)?;
            }
            EditOp::Insert { byte } => {
                target.take(step, op, byte)?;
                output.push(byte);
            }
            EditOp::Replace { removed, inserted } => {
                source.take(step, op, removed)?;
                target.take(step, op, inserted)?;
                output.push(inserted);
            }
            EditOp::Keep { byte } => {
                source.take(step, op, byte)?;
                target.take(step, op, byte)?;
                output.push(byte);
            }
        }
    }

    source.finish()?;
    target.finish()?;

    if output != b {
        return Err(ReplayError::OutputMismatch {
            output_len: output.len(),
            target_len: b.len(),
        });
    }

    Ok(output)
}
