// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: edit script replay and runtime contracts.
//!
//! Two complementary pieces:
//!
//! 1. **Replay** (`replay`) applies an edit script to A while cross-checking it
//!    against both A and B, and reports exactly where they disagree.
//!
//! 2. **Runtime contracts** that panic when an engine invariant is violated.
//!    Replay failures on engine-produced scripts are routed through here, because
//!    they mean the engine is broken, not that the caller did something wrong.

mod replay;
mod types;
pub mod contracts;

pub use replay::replay;
pub use types::*;
