//! Full, cancellable walk of a drive root.

use super::PhaseResult;
use crate::{CancelToken, DiscoveryOptions, GameTarget, ScanProgress};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

/// Walk `root` looking for directories that contain the target executable.
///
/// Directories named in [`DiscoveryOptions::skip_dirs`] are pruned before
/// they are entered. Symbolic links are never followed. Every directory
/// boundary checks the token; when it is set the walk stops and the matches
/// found so far are returned.
///
/// A checkpoint event is emitted every
/// [`checkpoint_interval`](DiscoveryOptions::checkpoint_interval)
/// directories. Directories that cannot be listed are logged and skipped.
///
/// # Example
///
/// ```rust
/// use bdo_install_discovery::{deep_scan, CancelToken, DiscoveryOptions, GameTarget};
/// use std::path::Path;
///
/// let found = deep_scan(
///     Path::new("/definitely/not/a/drive"),
///     &GameTarget::black_desert(),
///     &DiscoveryOptions::default(),
///     &CancelToken::new(),
///     |_| {},
/// );
/// assert!(found.is_empty());
/// ```
pub fn deep_scan<F>(
    root: &Path,
    target: &GameTarget,
    options: &DiscoveryOptions,
    token: &CancelToken,
    on_progress: F,
) -> Vec<PathBuf>
where
    F: Fn(ScanProgress),
{
    walk_root(root, target, options, token, on_progress).found
}

pub(crate) fn walk_root<F>(
    root: &Path,
    target: &GameTarget,
    options: &DiscoveryOptions,
    token: &CancelToken,
    on_progress: F,
) -> PhaseResult
where
    F: Fn(ScanProgress),
{
    let every = options.checkpoint_every();
    let mut result = PhaseResult::default();
    let mut dirs_scanned = 0usize;

    on_progress(ScanProgress::DeepStarted {
        root: root.to_path_buf(),
    });

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !is_pruned(entry, options));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                debug!(
                    path = ?err.path(),
                    error = %err,
                    "[DEEP] Unreadable entry, skipping"
                );
                continue;
            }
        };

        if entry.file_type().is_dir() {
            if token.is_cancelled() {
                result.cancelled = true;
                break;
            }
            dirs_scanned += 1;
            if dirs_scanned % every == 0 {
                on_progress(ScanProgress::DeepCheckpoint {
                    root: root.to_path_buf(),
                    dirs_scanned,
                });
            }
        } else if entry.file_name() == target.executable.as_str() {
            if let Some(dir) = entry.path().parent() {
                debug!(path = %dir.display(), "[DEEP] Found installation");
                result.found.push(dir.to_path_buf());
            }
        }
    }

    if result.cancelled {
        info!(root = %root.display(), dirs_scanned, "Deep scan cancelled");
    } else {
        info!(
            root = %root.display(),
            dirs_scanned,
            found = result.found.len(),
            "Deep scan complete"
        );
        on_progress(ScanProgress::DeepCompleted {
            root: root.to_path_buf(),
            dirs_scanned,
        });
    }

    result
}

/// Excluded system directories below the root.
fn is_pruned(entry: &DirEntry, options: &DiscoveryOptions) -> bool {
    entry.depth() > 0
        && entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| options.is_skipped(name))
}
