// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use serde::Serialize;
use std::process::ExitCode;

use levscript::selftest::{self, RandomSummary, SelfTestConfig};
use levscript::verify::contracts::check_edit_script;
use levscript::{BoundedDistance, EditCounts, EditScript, ReferenceEngine};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

mod cli;
use cli::display::{self, section_bot, section_top};
use cli::{Cli, Commands, EngineKind};

/// Exit code when the bounded engine declines its input.
const EXIT_TOO_LARGE: u8 = 2;

#[derive(Serialize)]
struct DistanceOutput<'a> {
    a: &'a str,
    b: &'a str,
    engine: &'static str,
    verified: bool,
    distance: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
struct ScriptOutput<'a> {
    a: &'a str,
    b: &'a str,
    distance: usize,
    counts: EditCounts,
    script: &'a EditScript,
}

fn main() -> ExitCode {
    // Argument errors exit 1; clap's own code 2 would read as "input too large"
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let result = match cli.command {
        Commands::Distance {
            a,
            b,
            engine,
            verify,
            limit,
            json,
        } => run_distance(&a, &b, engine, verify, limit, json),
        Commands::Script { a, b, json } => run_script(&a, &b, json),
        Commands::Selftest {
            count,
            seed,
            max_len,
            alphabet,
            json,
        } => {
            let config = SelfTestConfig {
                random_cases: count,
                seed,
                max_len,
                alphabet_size: alphabet,
            };
            run_selftest(&config, json)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| format!("JSON error: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn run_distance(
    a: &str,
    b: &str,
    engine: EngineKind,
    verify: bool,
    limit: usize,
    json: bool,
) -> Result<ExitCode, String> {
    // Only the reference engine can check itself
    let engine = if verify { EngineKind::Reference } else { engine };

    let (name, outcome) = match engine {
        EngineKind::Bounded => (
            "bounded",
            BoundedDistance::with_limit(limit).distance(a.as_bytes(), b.as_bytes()),
        ),
        EngineKind::Reference => (
            "reference",
            Ok(ReferenceEngine::new().distance(a.as_bytes(), b.as_bytes(), verify)),
        ),
    };

    if json {
        print_json(&DistanceOutput {
            a,
            b,
            engine: name,
            verified: verify,
            distance: outcome.as_ref().ok().copied(),
            error: outcome.as_ref().err().map(ToString::to_string),
        })?;
    } else {
        match &outcome {
            Ok(distance) => {
                let suffix = if verify { " (verified)" } else { "" };
                println!("{}{}", display::distance(*distance), suffix);
            }
            Err(e) => eprintln!("❌ {} engine declined: {}", name, e),
        }
    }

    Ok(match outcome {
        Ok(_) => ExitCode::SUCCESS,
        Err(_) => ExitCode::from(EXIT_TOO_LARGE),
    })
}

fn run_script(a: &str, b: &str, json: bool) -> Result<ExitCode, String> {
    let mut engine = ReferenceEngine::new();
    let script = engine.edit_script(a.as_bytes(), b.as_bytes());
    let distance = engine.matrix().final_distance();
    check_edit_script(a.as_bytes(), b.as_bytes(), &script, distance);
    let counts = script.counts();

    if json {
        print_json(&ScriptOutput {
            a,
            b,
            distance,
            counts,
            script: &script,
        })?;
        return Ok(ExitCode::SUCCESS);
    }

    let ops: Vec<String> = script.iter().map(display::edit_op).collect();
    println!("{}", ops.join(" "));
    println!(
        "distance {}  ({} kept, {} deleted, {} inserted, {} replaced)",
        display::distance(distance),
        counts.keeps,
        counts.deletes,
        counts.inserts,
        counts.replaces
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(feature = "parallel")]
fn create_progress_bar(hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(0);
    if let Ok(style) =
        ProgressStyle::with_template("{spinner:.cyan} {prefix:<8} [{bar:40.cyan/dim}] {pos}/{len}")
    {
        bar.set_style(style.progress_chars("━━╸"));
    }
    bar.set_prefix("Random");
    bar
}

#[cfg(feature = "parallel")]
fn run_random_phase(
    config: &SelfTestConfig,
    json: bool,
) -> Result<RandomSummary, selftest::Mismatch> {
    let progress = create_progress_bar(json || !display::use_colors());
    selftest::run_random_with_progress(config, &progress)
}

#[cfg(not(feature = "parallel"))]
fn run_random_phase(
    config: &SelfTestConfig,
    _json: bool,
) -> Result<RandomSummary, selftest::Mismatch> {
    selftest::run_random(config)
}

fn run_selftest(config: &SelfTestConfig, json: bool) -> Result<ExitCode, String> {
    if !json {
        section_top("SELF-TEST");
        display::row(&format!(
            " seed {}  ·  {} random pairs  ·  max length {}  ·  alphabet {}",
            config.seed, config.random_cases, config.max_len, config.alphabet_size
        ));
        section_bot();
    }

    let result = selftest::run_fixed().and_then(|fixed_passed| {
        if !json {
            println!("{}", display::pass(&format!("{} fixed cases", fixed_passed)));
        }
        let random = run_random_phase(config, json)?;
        Ok(selftest::SelfTestReport {
            fixed_passed,
            random_passed: random.passed,
            bounded_skipped: random.bounded_skipped,
            seed: config.seed,
        })
    });

    match result {
        Ok(report) => {
            if json {
                print_json(&report)?;
            } else {
                println!(
                    "{}",
                    display::pass(&format!("{} random cases", report.random_passed))
                );
                if report.bounded_skipped > 0 {
                    println!(
                        "  {} of them past the bounded limit, reference engine only",
                        report.bounded_skipped
                    );
                }
                println!("{}", display::pass("All tests passed"));
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(mismatch) => {
            if json {
                print_json(&mismatch)?;
            } else {
                println!("{}", display::fail(&mismatch.to_string()));
            }
            Ok(ExitCode::FAILURE)
        }
    }
}
