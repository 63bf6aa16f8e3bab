use remote_index_shared_kernel::{FilePath, FileSize, ModificationTime};
use serde::{Deserialize, Serialize};

/// A regular file recorded in an [`Index`](super::Index).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    /// Path relative to the index root.
    pub path: FilePath,
    pub size: FileSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtime: Option<ModificationTime>,
    /// Permission bits; zero where the platform has none.
    #[serde(default)]
    pub mode: u32,
}

impl IndexEntry {
    pub fn new(path: impl Into<FilePath>, size: u64) -> Self {
        Self { path: path.into(), size: FileSize::new(size), mtime: None, mode: 0 }
    }

    #[must_use]
    pub fn with_mtime(mut self, mtime: impl Into<ModificationTime>) -> Self {
        self.mtime = Some(mtime.into());
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: u32) -> Self {
        self.mode = mode;
        self
    }
}
