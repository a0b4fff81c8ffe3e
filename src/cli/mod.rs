// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the levscript command-line interface.
//!
//! Three subcommands: `distance` to compute a single distance with either
//! engine, `script` to show the canonical edit script for a pair, and
//! `selftest` to run the fixed and random differential checks.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use levscript::MAX_INPUT_SIZE;

#[derive(Parser)]
#[command(
    name = "levscript",
    about = "Levenshtein distance with self-verifying edit scripts",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Which distance engine to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    /// Rolling-row engine, limited on the shorter input
    Bounded,
    /// Full-matrix engine, no input limit
    Reference,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the edit distance between two byte strings
    Distance {
        /// Source sequence
        a: String,

        /// Target sequence
        b: String,

        /// Engine to use
        #[arg(long, value_enum, default_value_t = EngineKind::Bounded)]
        engine: EngineKind,

        /// Self-check the result by replaying the edit script
        ///
        /// Only the reference engine can verify, so this selects it.
        #[arg(long)]
        verify: bool,

        /// Maximum length of the shorter input for the bounded engine
        #[arg(long, default_value_t = MAX_INPUT_SIZE)]
        limit: usize,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show the canonical edit script turning A into B
    Script {
        /// Source sequence
        a: String,

        /// Target sequence
        b: String,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Run the fixed and random differential self-tests
    Selftest {
        /// Number of random pairs
        #[arg(short = 'n', long, default_value = "10000")]
        count: usize,

        /// Seed for the random workload
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Maximum length of each random input
        #[arg(long, default_value = "90")]
        max_len: usize,

        /// Number of distinct letters in random inputs (1-26)
        #[arg(long, default_value = "5", value_parser = clap::value_parser!(u8).range(1..=26))]
        alphabet: u8,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}
