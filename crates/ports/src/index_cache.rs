// crates/ports/src/index_cache.rs
use std::{sync::Arc, time::Duration};

use remote_index_domain::{Index, IndexSummary};
use remote_index_shared_kernel::{CacheResult, ResolvedPath};

/// Cache of directory indexes keyed by resolved path.
///
/// `max_age` bounds how old a reused snapshot may be; older snapshots must be
/// refreshed before answering. A zero `max_age` always refreshes.
///
/// Implementations are shared across callers and must tolerate concurrent
/// lookups of the same path without running duplicate rescans for it.
pub trait IndexCache: Send + Sync {
    fn summary(&self, path: &ResolvedPath, max_age: Duration) -> CacheResult<IndexSummary>;

    fn full(&self, path: &ResolvedPath, max_age: Duration) -> CacheResult<Index>;
}

impl<C: IndexCache + ?Sized> IndexCache for Arc<C> {
    fn summary(&self, path: &ResolvedPath, max_age: Duration) -> CacheResult<IndexSummary> {
        (**self).summary(path, max_age)
    }

    fn full(&self, path: &ResolvedPath, max_age: Duration) -> CacheResult<Index> {
        (**self).full(path, max_age)
    }
}
