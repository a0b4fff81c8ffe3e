//! Levenshtein edit distance with a self-verifying reference engine.
//!
//! Two engines share the Wagner-Fischer recurrence and trade memory for
//! explainability:
//!
//! - [`BoundedDistance`]: one rolling row, O(min(n, m)) memory. Declines inputs
//!   whose shorter side exceeds a limit (default [`MAX_INPUT_SIZE`]).
//! - [`ReferenceEngine`]: the full matrix, O(n·m) memory. Can backtrace an
//!   explicit [`EditScript`] and replay it to prove its own answer.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  bounded.rs  │     │  matrix.rs   │────▶│ backtrace.rs │
//! │ (rolling row)│     │ (full fill)  │     │ (Algorithm Y)│
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                    │                    │
//!        │                    ▼                    ▼
//!        │             ┌──────────────┐     ┌──────────────┐
//!        │             │  engine.rs   │────▶│   verify/    │
//!        │             │ (reference)  │     │(replay, contracts)
//!        │             └──────────────┘     └──────────────┘
//!        │                    │
//!        ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    selftest.rs                       │
//! │   fixed vectors + seeded random differential run     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! Inputs are raw bytes. There is no Unicode awareness: a multi-byte character
//! counts as several units.
//!
//! # Usage
//!
//! ```
//! use levscript::{distance_bounded, ReferenceEngine};
//!
//! assert_eq!(distance_bounded(b"kitten", b"sitting"), Ok(3));
//!
//! let mut engine = ReferenceEngine::new();
//! assert_eq!(engine.distance(b"kitten", b"sitting", true), 3);
//! assert_eq!(engine.edit_script(b"ab", b"cd").cost(), 2);
//! ```

// Module declarations
mod backtrace;
mod bounded;
mod engine;
mod matrix;
pub mod selftest;
pub mod testing;
mod types;
pub mod verify;

// Re-exports for public API
pub use backtrace::backtrace;
pub use bounded::{
    distance_bounded, distance_or_sentinel, BoundedDistance, DistanceError, MAX_INPUT_SIZE,
};
pub use engine::ReferenceEngine;
pub use matrix::DistanceMatrix;
pub use selftest::{Mismatch, RandomSummary, SelfTestConfig, SelfTestReport, FIXED_CASES};
pub use types::{EditCounts, EditOp, EditScript};
pub use verify::{replay, ReplayError, Side};
