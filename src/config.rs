// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use remote_index_infra::{ScanOptions, ScanOptionsBuilder, filesystem::ScanOptionsBuilderError};
use remote_index_usecase::IndexRequest;
use thiserror::Error;

use crate::cli::{Args, Command, LookupArgs, OutputFormat};

/// What the process was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Head(Lookup),
    Get(Lookup),
    Serve,
}

/// A single `head`/`get` invocation from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub request: IndexRequest,
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    /// Overrides the detected home directory.
    #[builder(default)]
    pub home: Option<PathBuf>,
    #[builder(default)]
    pub scan: ScanOptions,
    #[builder(default)]
    pub verbosity: u8,
    pub mode: Mode,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid scan options: {0}")]
    Scan(#[from] ScanOptionsBuilderError),

    #[error("invalid configuration: {0}")]
    Build(#[from] ConfigBuilderError),
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let scan = scan_options_from_args(&args)?;
        let mode = match args.command {
            Command::Head(lookup) => Mode::Head(lookup.into()),
            Command::Get(lookup) => Mode::Get(lookup.into()),
            Command::Serve => Mode::Serve,
        };

        Ok(ConfigBuilder::default()
            .home(args.home)
            .scan(scan)
            .verbosity(args.verbose)
            .mode(mode)
            .build()?)
    }
}

impl From<LookupArgs> for Lookup {
    fn from(args: LookupArgs) -> Self {
        Self { request: IndexRequest::new(args.path, args.rescan.0), format: args.format }
    }
}

fn scan_options_from_args(args: &Args) -> Result<ScanOptions, ScanOptionsBuilderError> {
    let mut builder = ScanOptionsBuilder::default();
    builder.follow_links(args.follow_links).max_depth(args.max_depth);
    if let Some(threads) = args.threads {
        builder.threads(threads);
    }
    builder.build()
}
