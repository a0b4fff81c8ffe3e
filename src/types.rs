// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of an edit script.
//!
//! An edit script is the explicit answer to "how do I turn A into B?". The distance
//! engines only produce a number; the reference engine can additionally walk its
//! matrix backwards and write down which byte was kept, deleted, inserted or
//! replaced at every step.
//!
//! # Invariants
//!
//! - **EditScript**: `cost() == distance(a, b)` for the pair it was built from.
//!   Keeps are free, everything else costs one.
//!
//! - **EditScript**: `source_len() == a.len() ∧ target_len() == b.len()`.
//!   Every byte of both inputs is accounted for exactly once.
//!
//! `verify::replay` is what actually checks these. The types only describe them.

use serde::Serialize;
use std::fmt;

/// A single step of an edit script, relative to the source sequence A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum EditOp {
    /// The byte appears unchanged in both sequences. Free.
    Keep { byte: u8 },
    /// The byte of A is dropped.
    Delete { byte: u8 },
    /// The byte of B is added.
    Insert { byte: u8 },
    /// The byte of A is swapped for a different byte of B.
    Replace { removed: u8, inserted: u8 },
}

impl EditOp {
    /// Cost of this operation in the classic unit-cost model.
    #[inline]
    pub fn cost(&self) -> usize {
        match self {
            EditOp::Keep { .. } => 0,
            EditOp::Delete { .. } | EditOp::Insert { .. } | EditOp::Replace { .. } => 1,
        }
    }

    /// Byte consumed from A, if any.
    #[inline]
    pub fn source_byte(&self) -> Option<u8> {
        match *self {
            EditOp::Keep { byte } | EditOp::Delete { byte } => Some(byte),
            EditOp::Replace { removed, .. } => Some(removed),
            EditOp::Insert { .. } => None,
        }
    }

    /// Byte produced into B, if any.
    #[inline]
    pub fn target_byte(&self) -> Option<u8> {
        match *self {
            EditOp::Keep { byte } | EditOp::Insert { byte } => Some(byte),
            EditOp::Replace { inserted, .. } => Some(inserted),
            EditOp::Delete { .. } => None,
        }
    }
}

/// Write a byte the way a Rust byte literal would show it (`a`, `\n`, `\xff`).
fn write_byte(f: &mut fmt::Formatter<'_>, byte: u8) -> fmt::Result {
    write!(f, "{}", std::ascii::escape_default(byte))
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            EditOp::Keep { byte } => {
                f.write_str("=")?;
                write_byte(f, byte)
            }
            EditOp::Delete { byte } => {
                f.write_str("-")?;
                write_byte(f, byte)
            }
            EditOp::Insert { byte } => {
                f.write_str("+")?;
                write_byte(f, byte)
            }
            EditOp::Replace { removed, inserted } => {
                f.write_str("~")?;
                write_byte(f, removed)?;
                f.write_str(">")?;
                write_byte(f, inserted)
            }
        }
    }
}

/// Per-kind operation tally for an edit script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EditCounts {
    pub keeps: usize,
    pub deletes: usize,
    pub inserts: usize,
    pub replaces: usize,
}

impl EditCounts {
    /// Number of operations that cost something.
    pub fn edits(&self) -> usize {
        self.deletes + self.inserts + self.replaces
    }
}

/// An ordered list of edit operations, read left to right, that turns A into B.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EditScript(Vec<EditOp>);

impl EditScript {
    pub fn new(ops: Vec<EditOp>) -> Self {
        Self(ops)
    }

    pub fn ops(&self) -> &[EditOp] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EditOp> {
        self.0.iter()
    }

    /// Total cost of the script. Equals the edit distance for a canonical script.
    pub fn cost(&self) -> usize {
        self.0.iter().map(EditOp::cost).sum()
    }

    pub fn counts(&self) -> EditCounts {
        let mut counts = EditCounts::default();
        for op in &self.0 {
            match op {
                EditOp::Keep { .. } => counts.keeps += 1,
                EditOp::Delete { .. } => counts.deletes += 1,
                EditOp::Insert { .. } => counts.inserts += 1,
                EditOp::Replace { .. } => counts.replaces += 1,
            }
        }
        counts
    }

    /// Number of bytes of A the script consumes.
    pub fn source_len(&self) -> usize {
        self.0.iter().filter(|op| op.source_byte().is_some()).count()
    }

    /// Number of bytes of B the script produces.
    pub fn target_len(&self) -> usize {
        self.0.iter().filter(|op| op.target_byte().is_some()).count()
    }
}

impl From<Vec<EditOp>> for EditScript {
    fn from(ops: Vec<EditOp>) -> Self {
        Self(ops)
    }
}

impl IntoIterator for EditScript {
    type Item = EditOp;
    type IntoIter = std::vec::IntoIter<EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a EditOp;
    type IntoIter = std::slice::Iter<'a, EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for EditScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, op) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", op)?;
        }
        Ok(())
    }
}
