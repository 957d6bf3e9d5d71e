//! # bdo-install-discovery
//!
//! Installation discovery for Black Desert Online override tooling.
//!
//! This crate finds directories that contain a game executable across all
//! local drives and keeps a cached list of them between runs, so tools that
//! drop override files into the game folder can skip the search next time.
//!
//! ## Features
//!
//! - `GameTarget` naming the executable and the table of common locations
//! - `discover()` two-tier search: quick table probe, then a full walk of
//!   roots where the probe found nothing
//! - `discover_async()` the same search with one blocking task per root
//! - `CancelToken` cooperative cancellation returning partial results
//! - `InstallCache` plain-text cache with validation on load
//! - `copy_overrides()` / `remove_overrides()` for the files themselves
//! - `is_running()` to refuse touching files while the game is open
//!
//! ## Example
//!
//! ```rust,no_run
//! use bdo_install_discovery::{
//!     discover, CancelToken, DiscoveryOptions, GameTarget, InstallCache, DEFAULT_CACHE_FILE,
//! };
//!
//! let target = GameTarget::black_desert();
//! let cache = InstallCache::beside_executable(DEFAULT_CACHE_FILE, target.clone());
//!
//! let mut installs = cache.load();
//! if installs.is_empty() {
//!     let token = CancelToken::new();
//!     let outcome = discover(&target, &DiscoveryOptions::default(), &token, |progress| {
//!         println!("{}", progress.description());
//!     });
//!     installs = outcome.installs;
//!     cache.store_scan(&installs, false);
//! }
//!
//! for path in &installs {
//!     println!("{}", path.display());
//! }
//! ```

mod cache;
mod cancel;
mod discover;
mod discovery;
mod errors;
mod options;
mod outcome;
mod overrides;
mod process;
mod progress;
mod selection;
mod target;

pub use cache::{InstallCache, DEFAULT_CACHE_FILE};
pub use cancel::CancelToken;
pub use discover::{discover, discover_async};
pub use discovery::{deep_scan, enumerate_roots, quick_probe};
pub use errors::InstallPathError;
pub use options::DiscoveryOptions;
pub use outcome::{DiscoveryOutcome, RootSummary};
pub use overrides::{copy_overrides, remove_overrides};
pub use process::is_running;
pub use progress::{ScanPhase, ScanProgress};
pub use selection::{partition_selection, validate_manual, Selection};
pub use target::{GameTarget, BLACK_DESERT_EXE};
