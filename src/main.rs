//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `config_string` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing summary and exit code
//!
//! All core functionality is implemented in the library crate.

use std::io;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;

use config_string::config::Opt;
use config_string::initialization::init_logger_with;
use config_string::{evaluate_exit_code, run_parse, Config};

fn main() -> Result<()> {
    let config = Config::from(Opt::parse());

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = config.validate() {
        eprintln!("config_string error: {}", e);
        process::exit(1);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_parse(&config, &mut out) {
        Ok(report) => {
            eprintln!(
                "Parsed {} line{} ({} ok, {} failed) in {:.3}s",
                report.total_lines,
                if report.total_lines == 1 { "" } else { "s" },
                report.parsed,
                report.failed,
                report.elapsed_seconds
            );
            process::exit(evaluate_exit_code(&config.fail_on, &report));
        }
        Err(e) => {
            eprintln!("config_string error: {:#}", e);
            process::exit(1);
        }
    }
}
