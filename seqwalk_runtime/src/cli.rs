//! Command-line surface of the `seqwalk` binary.
//!
//! Without arguments it prints the demo sequence once per traversal
//! mode. Values, modes and a config file can be supplied; `--fixtures`
//! switches to the fixture harness.

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use seqwalk::{try_validate_equivalence, Sequence, TraversalMode};

use crate::config::RunConfig;
use crate::console;
use crate::drift;
use crate::error::Result;
use crate::fixtures;

#[derive(Debug, Parser)]
#[command(
    name = "seqwalk",
    version,
    about = "Walk a sequence three equivalent ways, printing one value per visit"
)]
pub struct Cli {
    /// Values to traverse [default: 1 2 3 4 5]
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// Traversal mode to run
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Path to a JSON run config
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run the fixture harness over this JSON file instead of printing
    #[arg(long)]
    pub fixtures: Option<PathBuf>,

    /// Verify mode equivalence and determinism after printing
    #[arg(long, conflicts_with = "fixtures")]
    pub check: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Indexed,
    Elements,
    Callback,
    All,
}

impl ModeArg {
    pub fn modes(self) -> Vec<TraversalMode> {
        match self {
            ModeArg::Indexed => vec![TraversalMode::Indexed],
            ModeArg::Elements => vec![TraversalMode::Elements],
            ModeArg::Callback => vec![TraversalMode::Callback],
            ModeArg::All => TraversalMode::ALL.to_vec(),
        }
    }
}

/// Build the effective config: file (or defaults), then flag overrides.
pub fn resolve_config(cli: &Cli) -> Result<RunConfig> {
    let mut config = match &cli.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    if let Some(mode) = cli.mode {
        config.modes = mode.modes();
    }
    if !cli.values.is_empty() {
        config.values = cli.values.clone();
    }
    config.validate()?;
    Ok(config)
}

/// Execute one invocation. `Ok(false)` means a check or fixture failed.
pub fn run<W, E>(cli: &Cli, config: &RunConfig, out: &mut W, err: &mut E) -> Result<bool>
where
    W: Write,
    E: Write,
{
    match &cli.fixtures {
        Some(path) => run_fixtures(path, config, out),
        None => run_print(cli.check, config, out, err),
    }
}

fn run_print<W: Write, E: Write>(
    check: bool,
    config: &RunConfig,
    out: &mut W,
    err: &mut E,
) -> Result<bool> {
    let sequence = Sequence::new(config.values.clone());
    let written = console::emit(&sequence, &config.modes, &mut *out)?;
    tracing::info!(written, modes = config.modes.len(), "printed sequence");

    if !check {
        return Ok(true);
    }

    // Covers count, order, positions, non-mutation and repeatability.
    try_validate_equivalence(&sequence)?;

    let report = drift::compare_modes(&sequence);
    for summary in &report.modes {
        writeln!(
            err,
            "{}: visits={} hash={}",
            summary.mode, summary.visits, summary.hash
        )?;
    }
    writeln!(err, "equivalent: {}", report.equivalent)?;
    Ok(report.equivalent)
}

fn run_fixtures<W: Write>(path: &std::path::Path, config: &RunConfig, out: &mut W) -> Result<bool> {
    let loaded = fixtures::load_fixtures(path)?;
    tracing::info!(path = %path.display(), count = loaded.len(), "loaded fixtures");

    let outcomes = fixtures::run_fixtures(&loaded, &config.modes);
    let mut passed = 0;
    for outcome in &outcomes {
        if outcome.passed() {
            passed += 1;
            writeln!(out, "[PASS] {}: hash={}", outcome.name, outcome.hash)?;
        } else {
            writeln!(out, "[FAIL] {}:", outcome.name)?;
            for failure in &outcome.failures {
                writeln!(out, "  {}", failure)?;
            }
        }
    }

    writeln!(out)?;
    writeln!(out, "Results: {}/{} passed", passed, outcomes.len())?;
    Ok(passed == outcomes.len())
}
