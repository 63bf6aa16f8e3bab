//! # Use Cases
//!
//! The two read operations served to remote callers:
//!
//! - [`gateway`]: request validation, path resolution and delegation to the cache
//! - [`dto`]: request and response shapes as they appear on the wire
//!
//! Use cases depend on the domain and ports, never on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod gateway;

pub use dto::{GetResponse, HeadResponse, IndexRequest};
pub use gateway::IndexGateway;
