// crates/shared-kernel/src/value_objects/mod.rs
pub mod file_info;
pub mod lossy_path;
pub mod nanos;

pub use file_info::{FilePath, FileSize, ModificationTime};
