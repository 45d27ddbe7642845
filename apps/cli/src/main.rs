//! fieldrules CLI.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;

use crate::cli::{Cli, Command};
use crate::commands::{read_request, run_check, run_rules};
use crate::config::{CliConfig, CliOverrides};

/// Environment variable holding the log filter; `RUST_LOG` is the fallback.
const LOG_ENV: &str = "FIELDRULES_LOG";

const EXIT_FAILED: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::from(EXIT_FAILED),
        Ok(false) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

/// Dispatches the subcommand; `Ok(true)` means validation failed.
fn run(cli: Cli) -> anyhow::Result<bool> {
    match cli.command {
        Command::Check(args) => {
            let overrides = CliOverrides {
                date_pattern: args.date_pattern,
            };
            let config = CliConfig::load(cli.config.as_deref(), &overrides)?;
            let request = read_request(&args.request)?;
            let (report, failed) = run_check(request, config.validator_config(), args.compact)?;
            println!("{report}");
            Ok(failed)
        }
        Command::Rules => {
            println!("{}", run_rules());
            Ok(false)
        }
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
