use std::path::Path;

use remote_index_shared_kernel::{FilePath, FileSize};
use serde::{Deserialize, Serialize};

use super::IndexEntry;
use crate::model::IndexSummary;

/// Snapshot of every regular file below `root`.
///
/// Entries are kept sorted by relative path and unique, so two indexes of the
/// same tree compare equal regardless of discovery order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    root: FilePath,
    entries: Vec<IndexEntry>,
}

impl Index {
    /// Builds an index from entries in any order. Later duplicates of a path are dropped.
    pub fn from_entries(root: impl Into<FilePath>, entries: impl IntoIterator<Item = IndexEntry>) -> Self {
        let mut entries: Vec<IndexEntry> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        entries.dedup_by(|later, first| later.path == first.path);
        Self { root: root.into(), entries }
    }

    pub fn root(&self) -> &FilePath {
        &self.root
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexEntry> {
        self.entries.iter()
    }

    /// Looks up an entry by its path relative to the root.
    pub fn get(&self, relative: impl AsRef<Path>) -> Option<&IndexEntry> {
        let relative = relative.as_ref();
        self.entries
            .binary_search_by(|e| e.path.as_path().cmp(relative))
            .ok()
            .map(|pos| &self.entries[pos])
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn disk_size(&self) -> FileSize {
        self.entries.iter().map(|e| e.size).sum()
    }

    pub fn summary(&self) -> IndexSummary {
        IndexSummary::from_index(self)
    }
}

impl<'a> IntoIterator for &'a Index {
    type Item = &'a IndexEntry;
    type IntoIter = std::slice::Iter<'a, IndexEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
