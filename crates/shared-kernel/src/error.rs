// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Closed set of failure kinds a caller of the index operations can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidRequest,
    MalformedPath,
    NotFound,
    StatFailed,
    NotADirectory,
    IndexUnavailable,
}

/// Root error type for the `head` and `get` operations.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("invalid empty request")]
    InvalidRequest,

    #[error("remote path format is invalid: {path}")]
    MalformedPath { path: String },

    #[error("remote path {} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot stat remote path {}: {source}", path.display())]
    StatFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("remote path {} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("remote path index error for {}: {source}", path.display())]
    IndexUnavailable {
        path: PathBuf,
        #[source]
        source: CacheError,
    },

    /// Marks a resolver failure as having happened while resolving a remote path.
    #[error("remote path error: {source}")]
    RemotePath {
        #[source]
        source: Box<IndexError>,
    },
}

impl IndexError {
    pub fn malformed(path: impl Into<String>) -> Self {
        Self::MalformedPath { path: path.into() }
    }

    /// Wraps a resolver failure; wrapping twice is a no-op.
    #[must_use]
    pub fn remote_path(self) -> Self {
        match self {
            Self::RemotePath { .. } => self,
            other => Self::RemotePath { source: Box::new(other) },
        }
    }

    /// Kind of the innermost error, seeing through context wrappers.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRequest => ErrorKind::InvalidRequest,
            Self::MalformedPath { .. } => ErrorKind::MalformedPath,
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::StatFailed { .. } => ErrorKind::StatFailed,
            Self::NotADirectory { .. } => ErrorKind::NotADirectory,
            Self::IndexUnavailable { .. } => ErrorKind::IndexUnavailable,
            Self::RemotePath { source } => source.kind(),
        }
    }

    /// Filesystem path the failure refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::NotFound { path }
            | Self::StatFailed { path, .. }
            | Self::NotADirectory { path }
            | Self::IndexUnavailable { path, .. } => Some(path),
            Self::RemotePath { source } => source.path(),
            Self::InvalidRequest | Self::MalformedPath { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, IndexError>;

/// Failures reported by a cache collaborator.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to scan '{}': {source}", path.display())]
    Scan {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("index slot for '{}' is poisoned by a panicked scan", path.display())]
    Poisoned { path: PathBuf },
}

pub type CacheResult<T> = std::result::Result<T, CacheError>;
