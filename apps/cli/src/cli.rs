//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use fieldrules_validator::DatePattern;

#[derive(Debug, Parser)]
#[command(
    name = "fieldrules",
    version,
    about = "Validate field values against rule chains",
    long_about = "Validate field values against rule chains.\n\n\
                  A request is a JSON document holding `values`, per-field `rules` \
                  and optional `messages` templates keyed `field.Rule`."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase log verbosity (-v for debug, -vv for trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (default: ./fieldrules.toml if present).
    #[arg(long, value_name = "PATH", env = "FIELDRULES_CONFIG", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a request file and print a JSON report.
    ///
    /// Exits with 0 when every field passes, 1 when any rule fails and 2 on
    /// configuration or I/O errors.
    Check(CheckArgs),

    /// List the registered rule names.
    Rules,
}

#[derive(Debug, Parser)]
pub struct CheckArgs {
    /// Request file, or `-` for stdin.
    #[arg(value_name = "REQUEST")]
    pub request: PathBuf,

    /// Canonical date layout used by the `Date` rule (e.g. `MM/dd/yyyy`).
    #[arg(long, value_name = "PATTERN")]
    pub date_pattern: Option<DatePattern>,

    /// Print the report on a single line.
    #[arg(long)]
    pub compact: bool,
}
