//! Defines the command-line arguments and subcommands for the `wkt` tool.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "wkt",
    version,
    about = "Parse and validate Well-Known-Text shape definitions."
)]
pub struct WktArgs {
    #[command(subcommand)]
    pub command: Command,

    /// How results are printed.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). Logs go to stderr.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    pub log_json: bool,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse shape definitions and print the resulting shapes.
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// Report unknown shapes as unsupported instead of failing.
        #[arg(long)]
        lenient: bool,
    },
    /// Check that shape definitions are well formed, printing only failures and a summary.
    Check {
        #[command(flatten)]
        input: InputArgs,
    },
    /// List the registered shape keywords.
    Keywords,
}

/// Where shape definitions are read from: arguments, a file (one per line), or stdin.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Shape definitions, e.g. "POINT (1 2)".
    pub shapes: Vec<String>,

    /// Read definitions from a file, one per line. Use "-" for stdin.
    #[arg(short, long, conflicts_with = "shapes")]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
