//! Validation of user-chosen installation directories.

use crate::{GameTarget, InstallPathError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// A user selection split by current validity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Directories that still contain the executable.
    pub valid: Vec<PathBuf>,
    /// Directories that no longer do. Feed these to
    /// [`InstallCache::prune`](crate::InstallCache::prune).
    pub stale: Vec<PathBuf>,
}

impl Selection {
    /// Whether every selected directory is still an installation.
    pub fn is_all_valid(&self) -> bool {
        self.stale.is_empty()
    }
}

/// Check a folder the user picked by hand.
///
/// # Example
///
/// ```rust
/// use bdo_install_discovery::{validate_manual, GameTarget, InstallPathError};
///
/// let err = validate_manual("/definitely/not/here", &GameTarget::black_desert()).unwrap_err();
/// assert!(matches!(err, InstallPathError::NotADirectory { .. }));
/// ```
pub fn validate_manual(
    dir: impl AsRef<Path>,
    target: &GameTarget,
) -> Result<PathBuf, InstallPathError> {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        return Err(InstallPathError::NotADirectory {
            path: dir.to_path_buf(),
            fix: "Choose an existing folder".to_string(),
        });
    }

    if !target.is_installation(dir) {
        return Err(InstallPathError::MissingExecutable {
            path: dir.to_path_buf(),
            executable: target.executable.clone(),
            fix: format!(
                "Select the game folder that directly contains {}",
                target.executable
            ),
        });
    }

    debug!(path = %dir.display(), "[UI] Folder chosen");
    Ok(dir.to_path_buf())
}

/// Re-check a selection right before acting on it.
pub fn partition_selection(selected: &[PathBuf], target: &GameTarget) -> Selection {
    let (valid, stale): (Vec<PathBuf>, Vec<PathBuf>) = selected
        .iter()
        .cloned()
        .partition(|dir| target.is_installation(dir));

    if !stale.is_empty() {
        debug!(stale = ?stale, "Selected paths no longer contain the executable");
    }
    Selection { valid, stale }
}
