use remote_index_shared_kernel::FileSize;
use serde::{Deserialize, Serialize};

use crate::model::Index;

/// File count and total byte size of an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndexSummary {
    pub count: usize,
    pub disk_size: FileSize,
}

impl IndexSummary {
    pub fn from_index(index: &Index) -> Self {
        Self { count: index.count(), disk_size: index.disk_size() }
    }
}
