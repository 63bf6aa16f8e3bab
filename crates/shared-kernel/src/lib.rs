// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{CacheError, CacheResult, ErrorKind, IndexError, Result};
pub use path::{HOME_MARKER, HomeDir, PathResolver, ResolvedPath};

pub mod error;
pub mod path;
pub mod value_objects;

pub use value_objects::{FilePath, FileSize, ModificationTime, lossy_path, nanos};
