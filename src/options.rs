//! Discovery options configuration.
//!
//! This module provides the [`DiscoveryOptions`] struct for configuring
//! how drives are searched, including the deep-scan exclusion set and how
//! often progress is reported.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// System directories never entered by the deep scan.
const DEFAULT_SKIP_DIRS: &[&str] = &[
    "System Volume Information",
    "$Recycle.Bin",
    "Windows",
    "Recovery",
    "PerfLogs",
];

/// Configuration options for installation discovery.
///
/// # Default Behavior
///
/// Roots come from the drive enumerator, the deep scan reports progress
/// every 100 directories, and the usual Windows system directories are
/// pruned from the walk.
///
/// # Example
///
/// ```rust
/// use bdo_install_discovery::DiscoveryOptions;
/// use std::path::PathBuf;
///
/// // Use default options
/// let opts = DiscoveryOptions::default();
///
/// // Search a single explicit root
/// let opts = DiscoveryOptions {
///     roots: Some(vec![PathBuf::from("D:\\")]),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryOptions {
    /// Directories visited between deep-scan progress checkpoints.
    ///
    /// A value of zero is treated as one.
    ///
    /// Default: 100
    pub checkpoint_interval: usize,

    /// Directory names pruned from the deep scan, compared ASCII
    /// case-insensitively.
    pub skip_dirs: Vec<String>,

    /// Roots to search. `None` asks the drive enumerator.
    ///
    /// Default: `None`
    pub roots: Option<Vec<PathBuf>>,
}

impl DiscoveryOptions {
    /// Whether a directory called `name` is pruned from the deep scan.
    pub fn is_skipped(&self, name: &str) -> bool {
        self.skip_dirs.iter().any(|skip| skip.eq_ignore_ascii_case(name))
    }

    pub(crate) fn checkpoint_every(&self) -> usize {
        self.checkpoint_interval.max(1)
    }
}

impl Default for DiscoveryOptions {
    fn default() -> Self {
        Self {
            checkpoint_interval: 100,
            skip_dirs: DEFAULT_SKIP_DIRS.iter().map(|s| s.to_string()).collect(),
            roots: None,
        }
    }
}
