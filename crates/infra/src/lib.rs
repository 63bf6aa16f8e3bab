// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod cache;
pub mod filesystem;
pub mod platform;

pub use cache::CachedIndex;
pub use filesystem::{ScanOptions, ScanOptionsBuilder, WalkScanner};
pub use platform::HomeDirectoryResolver;
