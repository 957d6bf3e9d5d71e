//! Quick pass over the table of common install locations.

use super::PhaseResult;
use crate::{CancelToken, GameTarget, ScanProgress};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Check each quick path under `root` for the target executable.
///
/// Candidates are tested in table order and matches are returned in that
/// order. The token is checked before every candidate; once it is set the
/// probe stops and returns what it has so far.
///
/// Errors on a single candidate (permission denied, drive not ready) are
/// logged and the candidate is treated as a miss.
///
/// # Example
///
/// ```rust
/// use bdo_install_discovery::{quick_probe, CancelToken, GameTarget};
/// use std::path::Path;
///
/// let found = quick_probe(
///     Path::new("/definitely/not/a/drive"),
///     &GameTarget::black_desert(),
///     &CancelToken::new(),
///     |_| {},
/// );
/// assert!(found.is_empty());
/// ```
pub fn quick_probe<F>(
    root: &Path,
    target: &GameTarget,
    token: &CancelToken,
    on_progress: F,
) -> Vec<PathBuf>
where
    F: Fn(ScanProgress),
{
    probe_root(root, target, token, on_progress).found
}

pub(crate) fn probe_root<F>(
    root: &Path,
    target: &GameTarget,
    token: &CancelToken,
    on_progress: F,
) -> PhaseResult
where
    F: Fn(ScanProgress),
{
    let mut result = PhaseResult::default();

    for candidate in target.quick_candidates(root) {
        if token.is_cancelled() {
            debug!(root = %root.display(), "Quick pass cancelled");
            result.cancelled = true;
            break;
        }

        on_progress(ScanProgress::Probing {
            root: root.to_path_buf(),
            candidate: candidate.clone(),
        });

        match candidate.join(&target.executable).try_exists() {
            Ok(true) => {
                debug!(path = %candidate.display(), "[QUICK] Found installation");
                result.found.push(candidate);
            }
            Ok(false) => {}
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                debug!(path = %candidate.display(), "[QUICK] Permission denied");
            }
            Err(e) => {
                debug!(
                    path = %candidate.display(),
                    error = %e,
                    "[QUICK] Error checking candidate"
                );
            }
        }
    }

    result
}
