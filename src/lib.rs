// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod presentation;
pub mod serve;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
