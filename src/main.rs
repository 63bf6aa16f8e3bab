// src/main.rs
use std::process::ExitCode;

use clap::Parser;
use remote_index::{app, cli::Args, config::Config, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Configuration Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = logging::init(config.verbosity) {
        eprintln!("[warn] logging disabled: {err}");
    }

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
