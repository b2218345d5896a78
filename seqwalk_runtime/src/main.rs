//! seqwalk: print a sequence once per traversal mode.

use std::io;
use std::process::ExitCode;

use clap::Parser;

use seqwalk_runtime::cli::{self, Cli};
use seqwalk_runtime::logging::init_logging;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match cli::resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config.log_level);

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    match cli::run(&cli, &config, &mut out, &mut err) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            tracing::error!(error = %e, "run failed");
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
