// crates/usecase/src/dto.rs
use std::{path::PathBuf, time::Duration};

use remote_index_domain::Index;
use remote_index_shared_kernel::{FileSize, lossy_path, nanos};
use serde::{Deserialize, Serialize};

/// Index lookup requested by a remote caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRequest {
    /// Directory to index; absolute or `~/`-prefixed.
    #[serde(rename = "remotePath")]
    pub path: String,
    /// Rescan the directory if its cached index is older than this.
    #[serde(rename = "rescan", with = "nanos", default)]
    pub staleness_threshold: Duration,
}

impl IndexRequest {
    pub fn new(path: impl Into<String>, staleness_threshold: Duration) -> Self {
        Self { path: path.into(), staleness_threshold }
    }
}

/// Basic information about a directory index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadResponse {
    /// Resolved absolute form of the requested path.
    #[serde(with = "lossy_path")]
    pub abs_path: PathBuf,
    /// Number of files in the index.
    pub count: usize,
    /// Byte size of all files in the index.
    pub disk_size: FileSize,
}

/// Complete index of a directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetResponse {
    pub index: Index,
}
