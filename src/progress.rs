//! Progress reporting types for discovery runs.
//!
//! This module provides types for tracking and reporting discovery progress.
//! The [`ScanProgress`] enum represents discrete events of a run that can be
//! reported to a user interface via a callback.

use std::path::PathBuf;

/// The two tiers of the per-root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum ScanPhase {
    /// Fixed table of common install locations, no traversal.
    #[strum(serialize = "quick")]
    Quick,
    /// Full directory walk of the root.
    #[strum(serialize = "deep")]
    Deep,
}

/// Events emitted during a discovery run.
///
/// # Example
///
/// ```rust
/// use bdo_install_discovery::ScanProgress;
///
/// fn on_progress(progress: ScanProgress) {
///     match &progress {
///         ScanProgress::Probing { root, candidate } => {
///             println!("Scanning {} (quick)\n{}", root.display(), candidate.display());
///         }
///         ScanProgress::DeepCheckpoint { root, dirs_scanned } => {
///             println!("Scanning {} (deep)\nDirs scanned: {}", root.display(), dirs_scanned);
///         }
///         other => println!("{}", other.description()),
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ScanProgress {
    /// Listing the roots to search.
    DetectingRoots,

    /// About to test one quick path candidate.
    Probing {
        /// Root being searched.
        root: PathBuf,
        /// Directory that will be checked for the executable.
        candidate: PathBuf,
    },

    /// The deep scan of a root has started.
    DeepStarted {
        /// Root being walked.
        root: PathBuf,
    },

    /// Periodic deep-scan checkpoint.
    DeepCheckpoint {
        /// Root being walked.
        root: PathBuf,
        /// Directories visited so far on this root.
        dirs_scanned: usize,
    },

    /// The deep scan walked the whole root.
    DeepCompleted {
        /// Root that was walked.
        root: PathBuf,
        /// Total directories visited.
        dirs_scanned: usize,
    },

    /// The quick pass already found an installation on this root.
    DeepSkipped {
        /// Root that will not be walked.
        root: PathBuf,
    },

    /// The run is over, either finished or cancelled.
    Finished {
        /// Number of distinct installations found.
        found: usize,
    },
}

impl ScanProgress {
    /// Short human-readable description of the event.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bdo_install_discovery::ScanProgress;
    ///
    /// assert_eq!(ScanProgress::DetectingRoots.description(), "Detecting drives");
    /// ```
    pub fn description(&self) -> &'static str {
        match self {
            Self::DetectingRoots => "Detecting drives",
            Self::Probing { .. } => "Checking common install locations",
            Self::DeepStarted { .. } => "Scanning drive, this may take a while",
            Self::DeepCheckpoint { .. } => "Scanning drive",
            Self::DeepCompleted { .. } => "Drive scan complete",
            Self::DeepSkipped { .. } => "Found in quick pass, skipping full scan",
            Self::Finished { .. } => "Scan complete",
        }
    }

    /// Whether this event ends the run.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Finished { .. })
    }

    /// Phase this event belongs to, if any.
    pub fn phase(&self) -> Option<ScanPhase> {
        match self {
            Self::Probing { .. } => Some(ScanPhase::Quick),
            Self::DeepStarted { .. }
            | Self::DeepCheckpoint { .. }
            | Self::DeepCompleted { .. }
            | Self::DeepSkipped { .. } => Some(ScanPhase::Deep),
            Self::DetectingRoots | Self::Finished { .. } => None,
        }
    }
}
