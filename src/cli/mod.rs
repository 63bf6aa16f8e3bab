// src/cli/mod.rs
pub mod args;
pub mod parsers;

pub use args::{Args, Command, LookupArgs, OutputFormat};
pub use parsers::DurationArg;
