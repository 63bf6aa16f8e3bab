// crates/ports/src/scanner.rs
use remote_index_domain::Index;
use remote_index_shared_kernel::{CacheResult, ResolvedPath};

/// Port for walking a directory and recording its regular files.
pub trait DirectoryScanner: Send + Sync {
    fn scan(&self, root: &ResolvedPath) -> CacheResult<Index>;
}
