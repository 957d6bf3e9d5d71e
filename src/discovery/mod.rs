//! Leaf search routines.
//!
//! This module contains the pieces a discovery run is assembled from:
//!
//! - `enumerate_roots`: lists the drive roots worth searching
//! - `quick_probe`: checks a fixed table of common install locations
//! - `deep_scan`: cancellable full walk of one root

mod deep;
mod drives;
mod quick;

use std::path::PathBuf;

pub use deep::deep_scan;
pub use drives::enumerate_roots;
pub use quick::quick_probe;

pub(crate) use deep::walk_root;
pub(crate) use quick::probe_root;

/// Matches from one phase on one root.
#[derive(Debug, Default)]
pub(crate) struct PhaseResult {
    pub(crate) found: Vec<PathBuf>,
    /// The token stopped the phase before it covered everything.
    pub(crate) cancelled: bool,
}
