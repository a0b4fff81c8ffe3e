// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Differential self-test: the fast path against the reference engine.
//!
//! Two phases. The fixed phase runs a table of hand-picked pairs with known
//! distances through both engines in both argument orders, with the reference
//! engine verifying its own backtrace. The random phase generates pairs from a
//! small alphabet (so there are plenty of matches and ties) and uses the
//! reference engine as the oracle for the bounded one.
//!
//! Random pairs are generated up front from a seeded `StdRng`, so a seed always
//! produces the same workload regardless of how many threads check it. With the
//! `parallel` feature the checks run on rayon, one engine pair per worker, and
//! the lowest-numbered failure is reported.

use crate::bounded::BoundedDistance;
use crate::engine::ReferenceEngine;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fmt;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Hand-picked pairs with their known distances.
pub const FIXED_CASES: &[(&str, &str, usize)] = &[
    ("1234567890abcdefghijklmnop", "ABCDEF", 26),
    ("1234567890abcdefX", "X", 16),
    ("1234567890abcdefg", "X", 17),
    ("1234567890Xabcdefg", "X", 17),
    ("a", "", 1),
    ("a", "b", 1),
    ("ab", "a", 1),
    ("ab", "b", 1),
    ("ab", "", 2),
    ("ab", "c", 2),
    ("ab", "cd", 2),
    ("abc", "bc", 1),
    ("abc", "ac", 1),
    ("abc", "ab", 1),
    ("abcd", "", 4),
    ("abcd", "e", 4),
    ("abcd", "cd", 2),
    ("abcd", "ad", 2),
    ("abcd", "ab", 2),
    ("abcdefg", "Xabcdefg", 1),
    ("abcdefg", "abXcdefg", 1),
    ("abcdefg", "abcdXefg", 1),
    ("abcdefg", "abcdefXg", 1),
    ("abcdefg", "AabXcdefg", 2),
    ("abcdefg", "abAcdXefg", 2),
    ("abcdefg", "abcdefXgA", 2),
    ("abcdefg", "ABabXcdefg", 3),
    ("abcdefg", "abAcdXBefg", 3),
    ("abcdefg", "abcBdefXgA", 3),
    ("abcdefg", "abdefg", 1),
    ("abcdefg", "abcdfg", 1),
    ("abcdefg", "abcdef", 1),
    ("abcdefg", "bdefg", 2),
    ("abcdefg", "acdfg", 2),
    ("abcdefg", "abdef", 2),
    ("abcdefg", "bdfg", 3),
    ("abcdefg", "acfg", 3),
    ("abcdefg", "abdf", 3),
    ("abcdefg", "bXdfg", 3),
    ("abcdefg", "acYfg", 3),
    ("abcdefg", "abdZf", 3),
    ("abcdefg", "AbXdfg", 3),
    ("abcdefg", "acYAfg", 3),
    ("abcdefg", "abdZfA", 3),
    ("abcdefg", "ABbXdfg", 4),
    ("abcdefg", "acYABfg", 4),
    ("abcdefg", "abdZfAB", 4),
    ("abcdefg", "ABXdfg", 4),
    ("abcdefg", "acYABg", 4),
    ("abcdefg", "abdZAB", 4),
];

/// Random phase settings.
#[derive(Debug, Clone, Serialize)]
pub struct SelfTestConfig {
    /// Number of random pairs.
    pub random_cases: usize,
    pub seed: u64,
    /// Inputs are 1..=max_len bytes long.
    pub max_len: usize,
    /// Inputs draw from the first `alphabet_size` lowercase letters.
    pub alphabet_size: u8,
}

impl Default for SelfTestConfig {
    fn default() -> Self {
        Self {
            random_cases: 10_000,
            seed: 0,
            max_len: 90,
            alphabet_size: 5,
        }
    }
}

/// Which engine call produced a wrong answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    Reference,
    ReferenceReversed,
    Bounded,
    BoundedReversed,
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::Reference => f.write_str("reference engine"),
            Check::ReferenceReversed => f.write_str("reference engine (reversed)"),
            Check::Bounded => f.write_str("bounded distance"),
            Check::BoundedReversed => f.write_str("bounded distance (reversed)"),
        }
    }
}

/// First disagreement found by a self-test phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    /// Index of the failing pair within its phase.
    pub case: usize,
    pub check: Check,
    pub a: String,
    pub b: String,
    pub expected: usize,
    /// `None` when the bounded engine declined the input.
    pub actual: Option<usize>,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.actual {
            Some(actual) => write!(
                f,
                "invalid result from {} in case {}: expected {}, got {}",
                self.check, self.case, self.expected, actual
            )?,
            None => write!(
                f,
                "{} declined case {}: expected {}",
                self.check, self.case, self.expected
            )?,
        }
        write!(f, " (a = {:?}, b = {:?})", self.a, self.b)
    }
}

impl std::error::Error for Mismatch {}

/// Outcome of a full self-test run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelfTestReport {
    pub fixed_passed: usize,
    pub random_passed: usize,
    /// Random pairs checked by the reference engine alone.
    pub bounded_skipped: usize,
    pub seed: u64,
}

/// One engine of each kind. Each worker owns its own pair.
#[derive(Debug, Default)]
struct Engines {
    reference: ReferenceEngine,
    bounded: BoundedDistance,
}

impl Engines {
    fn mismatch(
        case: usize,
        check: Check,
        a: &[u8],
        b: &[u8],
        expected: usize,
        actual: Option<usize>,
    ) -> Mismatch {
        Mismatch {
            case,
            check,
            a: String::from_utf8_lossy(a).into_owned(),
            b: String::from_utf8_lossy(b).into_owned(),
            expected,
            actual,
        }
    }

    /// Both engines, both orders, against a known answer.
    fn check_fixed(
        &mut self,
        case: usize,
        a: &[u8],
        b: &[u8],
        expected: usize,
    ) -> Result<(), Mismatch> {
        let forward = self.reference.distance(a, b, true);
        if forward != expected {
            return Err(Self::mismatch(case, Check::Reference, a, b, expected, Some(forward)));
        }

        let reversed = self.reference.distance(b, a, true);
        if reversed != expected {
            return Err(Self::mismatch(
                case,
                Check::ReferenceReversed,
                a,
                b,
                expected,
                Some(reversed),
            ));
        }

        self.check_bounded(case, a, b, expected, true).map(|_| ())
    }

    /// Reference engine as the oracle for the bounded one. `Ok(true)` means the
    /// bounded engine declined the pair.
    fn check_random(&mut self, case: usize, a: &[u8], b: &[u8]) -> Result<bool, Mismatch> {
        let expected = self.reference.distance(a, b, true);
        self.check_bounded(case, a, b, expected, false)
    }

    /// With `strict`, a declined input counts as a failure; otherwise it is
    /// skipped and reported as `Ok(true)`.
    fn check_bounded(
        &mut self,
        case: usize,
        a: &[u8],
        b: &[u8],
        expected: usize,
        strict: bool,
    ) -> Result<bool, Mismatch> {
        let mut skipped = false;
        for (check, x, y) in [(Check::Bounded, a, b), (Check::BoundedReversed, b, a)] {
            match self.bounded.distance(x, y) {
                Ok(actual) if actual == expected => {}
                Ok(actual) => {
                    return Err(Self::mismatch(case, check, a, b, expected, Some(actual)));
                }
                Err(_) if strict => {
                    return Err(Self::mismatch(case, check, a, b, expected, None));
                }
                Err(_) => skipped = true,
            }
        }
        Ok(skipped)
    }
}

/// Run every entry of `FIXED_CASES`. Returns the number of cases checked.
pub fn run_fixed() -> Result<usize, Mismatch> {
    let mut engines = Engines::default();
    for (case, &(a, b, expected)) in FIXED_CASES.iter().enumerate() {
        engines.check_fixed(case, a.as_bytes(), b.as_bytes(), expected)?;
    }
    Ok(FIXED_CASES.len())
}

fn random_input(rng: &mut StdRng, config: &SelfTestConfig) -> Vec<u8> {
    let len = rng.gen_range(1..=config.max_len.max(1));
    let alphabet = config.alphabet_size.clamp(1, 26);
    (0..len).map(|_| b'a' + rng.gen_range(0..alphabet)).collect()
}

/// The random workload for `config`, identical for identical configs.
pub fn random_pairs(config: &SelfTestConfig) -> Vec<(Vec<u8>, Vec<u8>)> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.random_cases)
        .map(|_| {
            let b = random_input(&mut rng, config);
            let a = random_input(&mut rng, config);
            (a, b)
        })
        .collect()
}

/// Counts from a random phase that found no mismatch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RandomSummary {
    /// Pairs checked against the reference engine.
    pub passed: usize,
    /// Pairs the bounded engine declined, so only the reference engine ran.
    pub bounded_skipped: usize,
}

/// Fold per-case outcomes, in case order, into a summary or the first mismatch.
fn summarize<I>(outcomes: I) -> Result<RandomSummary, Mismatch>
where
    I: IntoIterator<Item = Result<bool, Mismatch>>,
{
    let mut summary = RandomSummary::default();
    for outcome in outcomes {
        if outcome? {
            summary.bounded_skipped += 1;
        }
        summary.passed += 1;
    }
    Ok(summary)
}

/// Run the random phase.
#[cfg(feature = "parallel")]
pub fn run_random(config: &SelfTestConfig) -> Result<RandomSummary, Mismatch> {
    run_random_with_progress(config, &ProgressBar::hidden())
}

/// Run the random phase with progress reporting.
#[cfg(feature = "parallel")]
pub fn run_random_with_progress(
    config: &SelfTestConfig,
    progress: &ProgressBar,
) -> Result<RandomSummary, Mismatch> {
    let pairs = random_pairs(config);
    progress.set_length(pairs.len() as u64);

    // collect keeps case order, so the first error is the lowest-numbered one
    let outcomes: Vec<Result<bool, Mismatch>> = pairs
        .par_iter()
        .enumerate()
        .map_init(Engines::default, |engines, (case, (a, b))| {
            let outcome = engines.check_random(case, a, b);
            progress.inc(1);
            outcome
        })
        .collect();

    progress.finish();
    summarize(outcomes)
}

/// Run the random phase.
#[cfg(not(feature = "parallel"))]
pub fn run_random(config: &SelfTestConfig) -> Result<RandomSummary, Mismatch> {
    let pairs = random_pairs(config);
    let mut engines = Engines::default();
    summarize(
        pairs
            .iter()
            .enumerate()
            .map(|(case, (a, b))| engines.check_random(case, a, b)),
    )
}

/// Fixed phase, then random phase.
pub fn run(config: &SelfTestConfig) -> Result<SelfTestReport, Mismatch> {
    let fixed_passed = run_fixed()?;
    let random = run_random(config)?;
    Ok(SelfTestReport {
        fixed_passed,
        random_passed: random.passed,
        bounded_skipped: random.bounded_skipped,
        seed: config.seed,
    })
}
