// crates/infra/src/filesystem.rs
use std::path::Path;

use derive_builder::Builder;
use ignore::{DirEntry, WalkBuilder, WalkState};
use log::{debug, warn};
use remote_index_domain::{Index, IndexEntry};
use remote_index_ports::DirectoryScanner;
use remote_index_shared_kernel::{CacheError, CacheResult, ModificationTime, ResolvedPath};

use crate::platform::file_mode;

/// Options controlling a directory scan.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct ScanOptions {
    #[builder(default = "num_cpus::get()")]
    pub threads: usize,
    #[builder(default)]
    pub follow_links: bool,
    #[builder(default)]
    pub max_depth: Option<usize>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { threads: num_cpus::get(), follow_links: false, max_depth: None }
    }
}

/// Filesystem adapter implementing the `DirectoryScanner` port with a parallel walk.
///
/// Every regular file is recorded: hidden files included, ignore files not
/// honoured, since the caller wants the tree exactly as it sits on disk.
#[derive(Debug, Clone, Default)]
pub struct WalkScanner {
    options: ScanOptions,
}

impl WalkScanner {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }
}

impl DirectoryScanner for WalkScanner {
    fn scan(&self, root: &ResolvedPath) -> CacheResult<Index> {
        // The walker reports an unreadable root as an ordinary entry error; fail the scan instead.
        std::fs::read_dir(root.as_path())
            .map_err(|source| CacheError::Scan { path: root.to_path_buf(), source })?;

        let (tx, rx) = crossbeam_channel::unbounded();

        let mut builder = WalkBuilder::new(root.as_path());
        builder
            .standard_filters(false)
            .threads(self.options.threads.max(1))
            .follow_links(self.options.follow_links)
            .max_depth(self.options.max_depth);

        builder.build_parallel().run(|| {
            let tx = tx.clone();
            let root = root.as_path();
            Box::new(move |entry| {
                match entry {
                    Ok(entry) => {
                        if let Some(record) = to_index_entry(root, &entry) {
                            // The receiver outlives the walk, so sending cannot fail.
                            let _ = tx.send(record);
                        }
                    }
                    Err(err) => warn!("skipping unreadable entry under {}: {err}", root.display()),
                }
                WalkState::Continue
            })
        });
        drop(tx);

        let index = Index::from_entries(root.as_path(), rx);
        debug!("scanned {root}: {} files, {} bytes", index.count(), index.disk_size());
        Ok(index)
    }
}

fn to_index_entry(root: &Path, entry: &DirEntry) -> Option<IndexEntry> {
    if !entry.file_type().is_some_and(|ft| ft.is_file()) {
        return None;
    }

    let metadata = match entry.metadata() {
        Ok(metadata) => metadata,
        Err(err) => {
            // Vanished between listing and stat, or unreadable.
            warn!("skipping {}: {err}", entry.path().display());
            return None;
        }
    };

    let relative = entry.path().strip_prefix(root).ok()?;
    let mut record = IndexEntry::new(relative, metadata.len()).with_mode(file_mode(&metadata));
    if let Ok(modified) = metadata.modified() {
        record = record.with_mtime(ModificationTime::from(modified));
    }
    Some(record)
}
