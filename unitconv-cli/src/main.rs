//! unitconv - convert values between units from the command line
//!
//! Commands:
//! - convert: Convert a value between two units of a family
//! - length / weight / temperature / volume: Family shortcuts with defaults
//! - units: List the units of each family
//! - tips: Show quick tips
//! - repl: Answer '<family> <value> <from> <to>' lines from stdin
//!
//! Results are written to stdout, logs and errors to stderr.

mod cli;
mod commands;
mod config;
mod error;
mod repl;

use std::io;
use std::process::ExitCode;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::Config;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e.report());
            return ExitCode::FAILURE;
        }
    };

    init_logging(&config, cli.verbose);
    debug!(?config, "configuration loaded");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match commands::execute(cli.command, &config, stdin.lock(), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.code(), "command failed");
            eprintln!("error: {}", e.report());
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins when set; otherwise the configured level, or debug with --verbose
fn init_logging(config: &Config, verbose: bool) {
    let level = if verbose { "debug" } else { config.log_level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
