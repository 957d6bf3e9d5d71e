//! Discovery coordinator.

use crate::discovery::{enumerate_roots, probe_root, walk_root};
use crate::{
    CancelToken, DiscoveryOptions, DiscoveryOutcome, GameTarget, RootSummary, ScanPhase,
    ScanProgress,
};
use futures::future::join_all;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Find installations of `target` across all roots.
///
/// Roots come from [`DiscoveryOptions::roots`] when set, otherwise from
/// [`enumerate_roots`]. Each root is handled in order:
///
/// 1. Quick pass over the target's table of common locations
/// 2. Deep scan of the whole root, only when nothing found so far lies
///    under that root
///
/// Setting the token stops the run at the next checkpoint; the outcome then
/// carries the partial results and `cancelled == true`. Matches from both
/// phases are deduplicated and the final list is sorted.
///
/// # Known trade-off
///
/// A quick hit on a root suppresses its deep scan, so a second installation
/// elsewhere on the same root is not discovered.
///
/// # Example
///
/// ```rust,no_run
/// use bdo_install_discovery::{discover, CancelToken, DiscoveryOptions, GameTarget};
///
/// let token = CancelToken::new();
/// let outcome = discover(
///     &GameTarget::black_desert(),
///     &DiscoveryOptions::default(),
///     &token,
///     |progress| println!("{}", progress.description()),
/// );
/// println!("found {} installation(s)", outcome.installs.len());
/// ```
pub fn discover<F>(
    target: &GameTarget,
    options: &DiscoveryOptions,
    token: &CancelToken,
    on_progress: F,
) -> DiscoveryOutcome
where
    F: Fn(ScanProgress),
{
    on_progress(ScanProgress::DetectingRoots);
    let roots = resolve_roots(options);
    info!(
        roots = roots.len(),
        executable = %target.executable,
        "Starting installation discovery"
    );

    let mut merged = Merged::default();
    let mut summaries = Vec::new();
    let mut roots_skipped = false;

    for root in roots {
        let known_hit = merged.any_under(&root);
        let Some((summary, found)) =
            search_root(&root, target, options, token, known_hit, &on_progress)
        else {
            roots_skipped = true;
            break;
        };
        merged.extend(found);
        summaries.push(summary);
    }

    finish(merged, summaries, roots_skipped, &on_progress)
}

/// Parallel variant of [`discover`].
///
/// Every root is searched on its own task on the tokio blocking pool and
/// the results are merged in enumeration order, so the outcome is the same
/// as the sequential run for disjoint roots. All tasks share the token.
///
/// Must be called from within a tokio runtime.
///
/// # Example
///
/// ```rust,no_run
/// use bdo_install_discovery::{discover_async, CancelToken, DiscoveryOptions, GameTarget};
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let outcome = discover_async(
///         GameTarget::black_desert(),
///         DiscoveryOptions::default(),
///         CancelToken::new(),
///         |_| {},
///     )
///     .await;
///     println!("{:?}", outcome.installs);
/// }
/// ```
pub async fn discover_async<F>(
    target: GameTarget,
    options: DiscoveryOptions,
    token: CancelToken,
    on_progress: F,
) -> DiscoveryOutcome
where
    F: Fn(ScanProgress) + Send + Sync + 'static,
{
    on_progress(ScanProgress::DetectingRoots);
    let roots = resolve_roots(&options);
    info!(
        roots = roots.len(),
        executable = %target.executable,
        "Starting parallel installation discovery"
    );

    let target = Arc::new(target);
    let options = Arc::new(options);
    let on_progress = Arc::new(on_progress);

    let tasks: Vec<_> = roots
        .into_iter()
        .map(|root| {
            let target = Arc::clone(&target);
            let options = Arc::clone(&options);
            let token = token.clone();
            let on_progress = Arc::clone(&on_progress);
            tokio::task::spawn_blocking(move || {
                search_root(&root, &target, &options, &token, false, &*on_progress)
            })
        })
        .collect();

    let mut merged = Merged::default();
    let mut summaries = Vec::new();
    let mut roots_skipped = false;

    for result in join_all(tasks).await {
        match result {
            Ok(Some((summary, found))) => {
                merged.extend(found);
                summaries.push(summary);
            }
            Ok(None) => roots_skipped = true,
            Err(e) => warn!(error = %e, "Root search task failed"),
        }
    }

    finish(merged, summaries, roots_skipped, &*on_progress)
}

fn resolve_roots(options: &DiscoveryOptions) -> Vec<PathBuf> {
    match &options.roots {
        Some(roots) => roots.clone(),
        None => enumerate_roots(),
    }
}

/// Quick pass, then deep scan when nothing is known under `root`.
///
/// Returns `None` when the token was already set before the root started.
fn search_root<F>(
    root: &Path,
    target: &GameTarget,
    options: &DiscoveryOptions,
    token: &CancelToken,
    known_hit: bool,
    on_progress: F,
) -> Option<(RootSummary, Vec<PathBuf>)>
where
    F: Fn(ScanProgress),
{
    if token.is_cancelled() {
        return None;
    }

    let mut summary = RootSummary::new(root.to_path_buf());
    summary.phases.push(ScanPhase::Quick);
    let quick = probe_root(root, target, token, &on_progress);
    summary.cancelled = quick.cancelled;
    let mut found = quick.found;

    if known_hit || !found.is_empty() {
        debug!(root = %root.display(), "[SCAN] Skipping deep scan: found in quick pass");
        on_progress(ScanProgress::DeepSkipped {
            root: root.to_path_buf(),
        });
    } else if token.is_cancelled() {
        summary.cancelled = true;
    } else {
        summary.phases.push(ScanPhase::Deep);
        let deep = walk_root(root, target, options, token, &on_progress);
        summary.cancelled = deep.cancelled;
        found.extend(deep.found);
    }

    summary.found = found.len();
    Some((summary, found))
}

/// Cancelled only if a root was skipped or cut short; a cancel that lands
/// after all work finished leaves the outcome complete.
fn finish<F>(
    merged: Merged,
    roots: Vec<RootSummary>,
    roots_skipped: bool,
    on_progress: F,
) -> DiscoveryOutcome
where
    F: Fn(ScanProgress),
{
    let cancelled = roots_skipped || roots.iter().any(|summary| summary.cancelled);
    let installs = merged.into_sorted();

    info!(
        found = installs.len(),
        cancelled,
        installs = ?installs,
        "Scan complete"
    );
    on_progress(ScanProgress::Finished {
        found: installs.len(),
    });

    DiscoveryOutcome {
        installs,
        roots,
        cancelled,
    }
}

/// Insertion-ordered set of discovered directories.
#[derive(Debug, Default)]
struct Merged {
    paths: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl Merged {
    fn extend(&mut self, found: Vec<PathBuf>) {
        for path in found {
            if self.seen.insert(path.clone()) {
                self.paths.push(path);
            }
        }
    }

    fn any_under(&self, root: &Path) -> bool {
        self.paths.iter().any(|path| path.starts_with(root))
    }

    fn into_sorted(mut self) -> Vec<PathBuf> {
        self.paths.sort();
        self.paths
    }
}
