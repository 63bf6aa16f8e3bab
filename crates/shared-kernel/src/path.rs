// crates/shared-kernel/src/path.rs
//! Remote path resolution.
//!
//! A path arriving from a remote caller is accepted in exactly two forms:
//!
//! - an absolute path, used as given;
//! - `~` immediately followed by the platform separator, expanded against the
//!   injected [`HomeDir`].
//!
//! Everything else is rejected. The remote side has no working directory on
//! this machine, so relative paths have no meaning here.

use std::{
    fmt,
    io,
    path::{MAIN_SEPARATOR, Path, PathBuf},
};

use crate::error::{IndexError, Result};

/// Marker standing for the current user's home directory.
pub const HOME_MARKER: char = '~';

/// Absolute home directory of the user this process serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeDir(PathBuf);

impl HomeDir {
    /// # Errors
    /// Returns [`IndexError::MalformedPath`] when `path` is not absolute.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_absolute() {
            return Err(IndexError::malformed(path.to_string_lossy()));
        }
        // Drop trailing separators so expansion never doubles them.
        let trimmed: PathBuf = path.components().collect();
        Ok(Self(trimmed))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for HomeDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Absolute path verified to be an existing directory at resolution time.
///
/// The check can race with concurrent filesystem changes; holders must treat it
/// as a best-effort guarantee.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ResolvedPath(PathBuf);

impl ResolvedPath {
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    pub fn to_path_buf(&self) -> PathBuf {
        self.0.clone()
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }

}

impl AsRef<Path> for ResolvedPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Turns untrusted path strings into [`ResolvedPath`]s.
#[derive(Debug, Clone)]
pub struct PathResolver {
    home: HomeDir,
}

impl PathResolver {
    pub fn new(home: HomeDir) -> Self {
        Self { home }
    }

    /// Validates and resolves `raw` against the local filesystem.
    ///
    /// # Errors
    ///
    /// - [`IndexError::MalformedPath`] for empty input, NUL bytes, or any
    ///   relative form other than the home shorthand
    /// - [`IndexError::NotFound`] when the candidate does not exist
    /// - [`IndexError::StatFailed`] when metadata cannot be read for another reason
    /// - [`IndexError::NotADirectory`] when the candidate is not a directory
    pub fn resolve(&self, raw: &str) -> Result<ResolvedPath> {
        let candidate = self.expand(raw)?;

        let metadata = match std::fs::metadata(&candidate) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(IndexError::NotFound { path: candidate });
            }
            Err(source) => return Err(IndexError::StatFailed { path: candidate, source }),
        };

        if !metadata.is_dir() {
            return Err(IndexError::NotADirectory { path: candidate });
        }

        Ok(ResolvedPath(candidate))
    }

    /// Syntactic half of [`resolve`](Self::resolve): accepts an absolute path or
    /// expands the home shorthand, without touching the filesystem.
    ///
    /// # Errors
    /// Returns [`IndexError::MalformedPath`] for any other form.
    pub fn expand(&self, raw: &str) -> Result<PathBuf> {
        if raw.is_empty() || raw.contains('\0') {
            return Err(IndexError::malformed(raw));
        }

        if Path::new(raw).is_absolute() {
            return Ok(PathBuf::from(raw));
        }

        let Some(rest) = raw.strip_prefix(HOME_MARKER).and_then(|r| r.strip_prefix(MAIN_SEPARATOR)) else {
            return Err(IndexError::malformed(raw));
        };

        let rest = rest.trim_start_matches(MAIN_SEPARATOR);
        if rest.is_empty() {
            Ok(self.home.as_path().to_path_buf())
        } else {
            Ok(self.home.as_path().join(rest))
        }
    }
}
