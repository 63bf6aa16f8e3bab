// crates/infra/src/platform.rs
//! Platform-specific abstractions for cross-platform compatibility.
//!
//! Keeps OS-specific logic out of the scanner and the binary.

use std::{fs::Metadata, path::PathBuf};

use remote_index_shared_kernel::{HomeDir, Result};

// ============================================================================
// Home Directory Resolution
// ============================================================================

/// Resolves the home directory of the user running this process.
pub struct HomeDirectoryResolver;

impl HomeDirectoryResolver {
    /// Returns the explicit override when given, otherwise the platform's
    /// notion of the current user's home (`$HOME`, the passwd entry, or the
    /// Windows profile directory).
    ///
    /// Returns `Ok(None)` when no home can be determined.
    ///
    /// # Errors
    /// Returns an error when the chosen directory is not absolute.
    pub fn resolve(override_dir: Option<PathBuf>) -> Result<Option<HomeDir>> {
        override_dir.or_else(dirs::home_dir).map(HomeDir::new).transpose()
    }
}

// ============================================================================
// File Modes
// ============================================================================

/// Permission bits recorded for an index entry.
#[cfg(unix)]
pub fn file_mode(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode()
}

/// Permission bits recorded for an index entry.
///
/// Only the read-only flag exists here, so it is mapped onto the usual unix defaults.
#[cfg(not(unix))]
pub fn file_mode(metadata: &Metadata) -> u32 {
    if metadata.permissions().readonly() { 0o444 } else { 0o644 }
}
