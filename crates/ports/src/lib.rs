//! # Ports
//!
//! Interface definitions for the collaborators behind the index gateway.
//!
//! - [`index_cache`]: cached summary and full-index lookups keyed by resolved path
//! - [`scanner`]: producing a fresh [`Index`](remote_index_domain::Index) for a directory
//!
//! The gateway depends only on these traits, never on a concrete cache.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod index_cache;
pub mod scanner;

pub use index_cache::IndexCache;
pub use scanner::DirectoryScanner;
