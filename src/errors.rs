//! Error types.
//!
//! Discovery itself never fails outward: I/O trouble is logged and turned
//! into an empty or partial result. The types here cover the two places a
//! caller does need a reason, validating a folder the user picked by hand,
//! and the internal cache file plumbing.

use std::path::PathBuf;
use thiserror::Error;

/// Why a manually selected folder is not an installation.
///
/// Each variant carries an actionable suggestion for the user.
///
/// # Example
///
/// ```rust
/// use bdo_install_discovery::InstallPathError;
///
/// fn report(error: InstallPathError) {
///     eprintln!("Invalid folder: {}", error);
///     eprintln!("To fix: {}", error.fix_suggestion());
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum InstallPathError {
    /// The path does not exist or is not a directory.
    #[error("Not a directory: {}", .path.display())]
    NotADirectory {
        /// The rejected path.
        path: PathBuf,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },

    /// The directory exists but the game executable is not inside it.
    #[error("{executable} not found in: {}", .path.display())]
    MissingExecutable {
        /// The rejected directory.
        path: PathBuf,
        /// Executable that was expected.
        executable: String,
        /// Actionable suggestion for resolving the issue.
        fix: String,
    },
}

impl InstallPathError {
    /// Get an actionable suggestion for fixing this error.
    pub fn fix_suggestion(&self) -> &str {
        match self {
            Self::NotADirectory { fix, .. } => fix,
            Self::MissingExecutable { fix, .. } => fix,
        }
    }
}

/// Failures touching the cache file. Never surfaced by the public API.
#[derive(Debug, Error)]
pub(crate) enum CacheError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to remove {}: {source}", .path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
