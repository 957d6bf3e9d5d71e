//! Persisted list of known installation directories.
//!
//! The cache is a UTF-8 text file with one directory per line. Entries may
//! be wrapped in double quotes and blank lines are ignored. Every write
//! replaces the whole file with the deduplicated, sorted list.

use crate::errors::CacheError;
use crate::GameTarget;
use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File name used next to the host executable.
pub const DEFAULT_CACHE_FILE: &str = "bdovulkan_installs.txt";

/// Cache of installation directories found by earlier runs.
///
/// Nothing here fails outward. Unreadable or missing files load as empty,
/// and failed writes are logged and ignored so the current run keeps its
/// in-memory results.
///
/// # Example
///
/// ```rust,no_run
/// use bdo_install_discovery::{discover, CancelToken, DiscoveryOptions, GameTarget, InstallCache};
///
/// let target = GameTarget::black_desert();
/// let cache = InstallCache::beside_executable("bdovulkan_installs.txt", target.clone());
///
/// let mut installs = cache.load();
/// if installs.is_empty() {
///     let outcome = discover(&target, &DiscoveryOptions::default(), &CancelToken::new(), |_| {});
///     installs = outcome.installs;
///     cache.store_scan(&installs, false);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct InstallCache {
    path: PathBuf,
    target: GameTarget,
}

impl InstallCache {
    /// Cache stored at `path`, validating entries against `target`.
    pub fn new(path: impl Into<PathBuf>, target: GameTarget) -> Self {
        Self {
            path: path.into(),
            target,
        }
    }

    /// Cache stored next to the running executable.
    ///
    /// Falls back to the working directory when the executable location
    /// cannot be determined.
    pub fn beside_executable(file_name: &str, target: GameTarget) -> Self {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        Self::new(dir.join(file_name), target)
    }

    /// Location of the cache file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cache, keeping only entries that are still installations.
    ///
    /// Stale entries are dropped from the result but left in the file.
    pub fn load(&self) -> Vec<PathBuf> {
        let contents = match self.read() {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                debug!(path = %self.path.display(), "[CACHE] No cache file");
                return Vec::new();
            }
            Err(e) => {
                debug!(error = %e, "[CACHE] Error reading cache");
                return Vec::new();
            }
        };

        let mut paths = Vec::new();
        for entry in parse_entries(&contents) {
            let dir = PathBuf::from(entry);
            if self.target.is_installation(&dir) {
                paths.push(dir);
            } else {
                debug!(path = entry, "[CACHE] Invalid or missing exe");
            }
        }

        debug!(loaded = ?paths, "[CACHE] Loaded");
        paths
    }

    /// Replace the cache with `paths`, deduplicated and sorted.
    pub fn write(&self, paths: &[PathBuf]) {
        match self.try_write(paths) {
            Ok(count) => {
                debug!(count, path = %self.path.display(), "[CACHE] Wrote path(s)");
            }
            Err(e) => warn!(error = %e, "[CACHE] Write failed"),
        }
    }

    /// Delete the cache file. A missing file is not an error.
    pub fn clear(&self) {
        match self.try_clear() {
            Ok(()) => debug!(path = %self.path.display(), "[CACHE] Cleared"),
            Err(e) => warn!(error = %e, "[CACHE] Clear failed"),
        }
    }

    /// Persist the result of a (re)scan.
    ///
    /// A non-empty result is written. An empty one clears the cache unless
    /// the caller asked to keep whatever was cached before.
    pub fn store_scan(&self, installs: &[PathBuf], keep_stale_on_empty: bool) {
        if !installs.is_empty() {
            self.write(installs);
        } else if !keep_stale_on_empty {
            self.clear();
        }
    }

    /// Remove `stale` entries from `installs` and rewrite the cache.
    ///
    /// Returns the remaining list in its original order.
    pub fn prune(&self, installs: &[PathBuf], stale: &[PathBuf]) -> Vec<PathBuf> {
        let remaining: Vec<PathBuf> = installs
            .iter()
            .filter(|path| !stale.contains(path))
            .cloned()
            .collect();
        debug!(removed = installs.len() - remaining.len(), "[CACHE] Pruned stale entries");
        self.write(&remaining);
        remaining
    }

    fn read(&self) -> Result<Option<String>, CacheError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(CacheError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn try_write(&self, paths: &[PathBuf]) -> Result<usize, CacheError> {
        let unique: BTreeSet<String> = paths
            .iter()
            .map(|path| path.to_string_lossy().into_owned())
            .collect();
        let body = unique.iter().map(String::as_str).collect::<Vec<_>>().join("\n");

        std::fs::write(&self.path, body).map_err(|source| CacheError::Write {
            path: self.path.clone(),
            source,
        })?;
        Ok(unique.len())
    }

    fn try_clear(&self) -> Result<(), CacheError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(CacheError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

/// Non-blank lines with surrounding whitespace and double quotes removed.
fn parse_entries(contents: &str) -> impl Iterator<Item = &str> {
    contents
        .lines()
        .map(|line| line.trim().trim_matches('"'))
        .filter(|entry| !entry.is_empty())
}
