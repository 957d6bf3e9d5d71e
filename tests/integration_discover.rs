//! Integration tests for installation discovery and the install cache.
//!
//! Drives are simulated with temporary directories.

use bdo_install_discovery::{
    discover, discover_async, partition_selection, CancelToken, DiscoveryOptions, GameTarget,
    InstallCache, ScanPhase, ScanProgress, BLACK_DESERT_EXE, DEFAULT_CACHE_FILE,
};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

fn install(root: &Path, rel: &str) -> PathBuf {
    let dir = root.join(rel);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(BLACK_DESERT_EXE), b"").unwrap();
    dir
}

fn roots(drives: &[&Path]) -> DiscoveryOptions {
    DiscoveryOptions {
        roots: Some(drives.iter().map(|d| d.to_path_buf()).collect()),
        ..Default::default()
    }
}

#[test]
fn test_quick_hit_on_second_drive() {
    let c = tempfile::tempdir().unwrap();
    let d = tempfile::tempdir().unwrap();
    fs::create_dir_all(c.path().join("Users/Public")).unwrap();
    let game = install(d.path(), "BlackDesert");

    let deep_roots = Mutex::new(Vec::new());
    let outcome = discover(
        &GameTarget::black_desert(),
        &roots(&[c.path(), d.path()]),
        &CancelToken::new(),
        |progress| {
            if let ScanProgress::DeepStarted { root } = progress {
                deep_roots.lock().unwrap().push(root);
            }
        },
    );

    assert_eq!(outcome.installs, vec![game]);
    assert_eq!(*deep_roots.lock().unwrap(), vec![c.path().to_path_buf()]);
    assert_eq!(outcome.root(c.path()).unwrap().found, 0);
    assert!(!outcome.root(d.path()).unwrap().ran(ScanPhase::Deep));
}

#[test]
fn test_deep_scan_fallback_finds_unusual_location() {
    let drive = tempfile::tempdir().unwrap();
    let game = install(drive.path(), "Stuff/Pearl Abyss Launcher/BDO");
    install(drive.path(), "Windows/BDO");

    let outcome = discover(
        &GameTarget::black_desert(),
        &roots(&[drive.path()]),
        &CancelToken::new(),
        |_| {},
    );
    assert_eq!(outcome.installs, vec![game]);
}

#[test]
fn test_results_never_contain_duplicates() {
    let c = tempfile::tempdir().unwrap();
    let d = tempfile::tempdir().unwrap();
    install(c.path(), "Games/BlackDesert");
    install(c.path(), "PearlAbyss");
    install(d.path(), "a/b/BlackDesert");
    install(d.path(), "x/BlackDesert");

    let outcome = discover(
        &GameTarget::black_desert(),
        &roots(&[c.path(), d.path(), c.path(), d.path()]),
        &CancelToken::new(),
        |_| {},
    );

    let mut unique = outcome.installs.clone();
    unique.dedup();
    assert_eq!(unique, outcome.installs);
    assert_eq!(outcome.installs.len(), 4);
}

#[test]
fn test_cancel_during_deep_scan_returns_partial() {
    let drive = tempfile::tempdir().unwrap();
    for i in 0..30 {
        install(drive.path(), &format!("lib{:02}/bdo", i));
    }
    let options = DiscoveryOptions {
        checkpoint_interval: 10,
        ..roots(&[drive.path()])
    };

    let full = discover(&GameTarget::black_desert(), &options, &CancelToken::new(), |_| {});

    let token = CancelToken::new();
    let partial = discover(&GameTarget::black_desert(), &options, &token, |progress| {
        if matches!(progress, ScanProgress::DeepCheckpoint { .. }) {
            token.cancel();
        }
    });

    assert!(partial.cancelled);
    assert!(partial.installs.len() < full.installs.len());
    assert!(partial.installs.iter().all(|p| full.installs.contains(p)));
}

#[test]
fn test_cache_roundtrip_drops_invalid_entries() {
    let state = tempfile::tempdir().unwrap();
    let drive = tempfile::tempdir().unwrap();
    let live = install(drive.path(), "BlackDesert");
    let gone = drive.path().join("OldInstall");

    let cache = InstallCache::new(
        state.path().join(DEFAULT_CACHE_FILE),
        GameTarget::black_desert(),
    );
    cache.write(&[gone.clone(), live.clone(), live.clone()]);

    assert_eq!(cache.load(), vec![live]);
}

#[test]
fn test_startup_flow_uses_cache_then_prunes() {
    let state = tempfile::tempdir().unwrap();
    let drive = tempfile::tempdir().unwrap();
    let first = install(drive.path(), "BlackDesert");
    let second = install(drive.path(), "Games/BlackDesert");
    let target = GameTarget::black_desert();
    let cache = InstallCache::new(state.path().join(DEFAULT_CACHE_FILE), target.clone());

    // First run: empty cache, scan and persist.
    assert!(cache.load().is_empty());
    let outcome = discover(&target, &roots(&[drive.path()]), &CancelToken::new(), |_| {});
    cache.store_scan(&outcome.installs, false);

    // Second run: the cache answers.
    let installs = cache.load();
    assert_eq!(installs, vec![first.clone(), second.clone()]);

    // The user selects both, but one was uninstalled in the meantime.
    fs::remove_file(first.join(BLACK_DESERT_EXE)).unwrap();
    let selection = partition_selection(&installs, &target);
    assert_eq!(selection.stale, vec![first]);
    let remaining = cache.prune(&installs, &selection.stale);
    assert_eq!(remaining, vec![second.clone()]);
    assert_eq!(cache.load(), vec![second]);
}

#[test]
fn test_failed_rescan_clears_cache() {
    let state = tempfile::tempdir().unwrap();
    let drive = tempfile::tempdir().unwrap();
    let game = install(drive.path(), "BlackDesert");
    let target = GameTarget::black_desert();
    let cache = InstallCache::new(state.path().join(DEFAULT_CACHE_FILE), target.clone());
    cache.write(&[game.clone()]);

    fs::remove_dir_all(&game).unwrap();
    let outcome = discover(&target, &roots(&[drive.path()]), &CancelToken::new(), |_| {});
    assert!(outcome.is_empty());

    cache.store_scan(&outcome.installs, false);
    assert!(!cache.path().exists());
}

#[tokio::test]
async fn test_async_discovery_across_drives() {
    let c = tempfile::tempdir().unwrap();
    let d = tempfile::tempdir().unwrap();
    let on_c = install(c.path(), "deep/tree/BDO");
    let on_d = install(d.path(), "Program Files (x86)/PearlAbyss");

    let outcome = discover_async(
        GameTarget::black_desert(),
        roots(&[c.path(), d.path()]),
        CancelToken::new(),
        |_| {},
    )
    .await;

    let mut expected = vec![on_c, on_d];
    expected.sort();
    assert_eq!(outcome.installs, expected);
    assert_eq!(outcome.roots.len(), 2);
    assert_eq!(outcome.roots[0].phases, vec![ScanPhase::Quick, ScanPhase::Deep]);
    assert_eq!(outcome.roots[1].phases, vec![ScanPhase::Quick]);
}
