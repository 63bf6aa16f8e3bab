// crates/usecase/src/gateway.rs
use log::debug;
use remote_index_ports::IndexCache;
use remote_index_shared_kernel::{IndexError, PathResolver, ResolvedPath, Result};

use crate::dto::{GetResponse, HeadResponse, IndexRequest};

/// Entry point for `head` and `get`.
///
/// Holds no mutable state of its own; all caching lives behind `C`, so a single
/// gateway can serve concurrent callers.
pub struct IndexGateway<C> {
    resolver: PathResolver,
    cache: C,
}

impl<C: IndexCache> IndexGateway<C> {
    pub fn new(resolver: PathResolver, cache: C) -> Self {
        Self { resolver, cache }
    }

    /// Returns the file count and total size of the requested directory.
    ///
    /// # Errors
    /// [`IndexError::InvalidRequest`] for a missing request, a
    /// [`IndexError::RemotePath`]-wrapped resolver error, or
    /// [`IndexError::IndexUnavailable`] when the cache fails.
    pub fn head(&self, request: Option<&IndexRequest>) -> Result<HeadResponse> {
        let (request, abs_path) = self.prepare(request)?;

        let summary = self
            .cache
            .summary(&abs_path, request.staleness_threshold)
            .map_err(|source| IndexError::IndexUnavailable { path: abs_path.to_path_buf(), source })?;

        debug!("head {abs_path}: {} files, {} bytes", summary.count, summary.disk_size);
        Ok(HeadResponse { abs_path: abs_path.into_path_buf(), count: summary.count, disk_size: summary.disk_size })
    }

    /// Returns the complete index of the requested directory.
    ///
    /// # Errors
    /// Same as [`head`](Self::head).
    pub fn get(&self, request: Option<&IndexRequest>) -> Result<GetResponse> {
        let (request, abs_path) = self.prepare(request)?;

        let index = self
            .cache
            .full(&abs_path, request.staleness_threshold)
            .map_err(|source| IndexError::IndexUnavailable { path: abs_path.to_path_buf(), source })?;

        debug!("get {abs_path}: {} entries", index.count());
        Ok(GetResponse { index })
    }

    fn prepare<'r>(&self, request: Option<&'r IndexRequest>) -> Result<(&'r IndexRequest, ResolvedPath)> {
        let request = request.ok_or(IndexError::InvalidRequest)?;
        let abs_path = self.resolver.resolve(&request.path).map_err(IndexError::remote_path)?;
        Ok((request, abs_path))
    }
}
