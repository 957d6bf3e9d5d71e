//! Result types of a discovery run.

use crate::ScanPhase;
use std::path::PathBuf;

/// What happened on one root during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootSummary {
    /// The root that was searched.
    pub root: PathBuf,

    /// Phases that actually ran, in order.
    ///
    /// `Deep` is absent when the quick pass already found an installation
    /// on this root, or when the run was cancelled first.
    pub phases: Vec<ScanPhase>,

    /// Matches reported by this root's phases, before deduplication.
    pub found: usize,

    /// Whether cancellation stopped work on this root before it finished.
    pub cancelled: bool,
}

impl RootSummary {
    pub(crate) fn new(root: PathBuf) -> Self {
        Self {
            root,
            phases: Vec::new(),
            found: 0,
            cancelled: false,
        }
    }

    /// Whether the given phase ran on this root.
    pub fn ran(&self, phase: ScanPhase) -> bool {
        self.phases.contains(&phase)
    }
}

/// Result of a discovery run.
///
/// An empty [`installs`](Self::installs) list is not a failure; it means
/// nothing was found and the caller decides what to do next, typically
/// asking the user to pick the folder by hand.
///
/// # Example
///
/// ```rust,no_run
/// use bdo_install_discovery::{discover, CancelToken, DiscoveryOptions, GameTarget};
///
/// let outcome = discover(
///     &GameTarget::black_desert(),
///     &DiscoveryOptions::default(),
///     &CancelToken::new(),
///     |_| {},
/// );
/// if outcome.is_empty() {
///     println!("No installations found");
/// }
/// for path in &outcome.installs {
///     println!("{}", path.display());
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryOutcome {
    /// Distinct installation directories, sorted.
    pub installs: Vec<PathBuf>,

    /// Per-root summaries, in enumeration order. Roots never reached
    /// because of cancellation are absent.
    pub roots: Vec<RootSummary>,

    /// Whether the run stopped early because the token was set.
    pub cancelled: bool,
}

impl DiscoveryOutcome {
    /// Whether no installation was found.
    pub fn is_empty(&self) -> bool {
        self.installs.is_empty()
    }

    /// Summary for a given root, if it was reached.
    pub fn root(&self, root: &std::path::Path) -> Option<&RootSummary> {
        self.roots.iter().find(|summary| summary.root == root)
    }
}
