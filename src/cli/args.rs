// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

use super::parsers::{DurationArg, parse_positive_usize};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "remote_index",
    version = crate::VERSION,
    about = "Report the files below a directory from a cached, staleness-aware index"
)]
pub struct Args {
    /// Home directory used to expand `~/` paths (defaults to the current user's)
    #[arg(long, global = true, value_hint = ValueHint::DirPath, help_heading = "Environment")]
    pub home: Option<PathBuf>,

    /// Directory walker threads (defaults to the number of CPUs)
    #[arg(long, global = true, value_parser = parse_positive_usize, help_heading = "Scan")]
    pub threads: Option<usize>,

    /// Follow symbolic links while scanning
    #[arg(long, global = true, help_heading = "Scan")]
    pub follow_links: bool,

    /// Maximum directory depth to descend (root is depth 0)
    #[arg(long, global = true, help_heading = "Scan")]
    pub max_depth: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the file count and total size of a directory
    Head(LookupArgs),
    /// Print the complete index of a directory
    Get(LookupArgs),
    /// Answer JSON-lines requests on stdin until EOF
    Serve,
}

#[derive(clap::Args, Debug)]
pub struct LookupArgs {
    /// Absolute directory path, or `~/`-prefixed path below the home directory
    pub path: String,

    /// Rescan if the cached index is older than this (e.g. 500ms, 5s, 2m, 1h)
    #[arg(long, default_value = "0s")]
    pub rescan: DurationArg,

    /// Output format
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}
