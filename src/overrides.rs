//! Copying and removing override files in installation directories.
//!
//! Files are matched by name only: everything under the source tree lands
//! directly inside each destination, whatever its depth in the source.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Copy every file under `source_root` into each destination, replacing
/// existing files. Returns the number of successful copies.
///
/// Copies keep the source's modification time. Failing to set it is logged
/// and does not count against the copy.
///
/// # Example
///
/// ```rust,no_run
/// use bdo_install_discovery::copy_overrides;
/// use std::path::PathBuf;
///
/// let copied = copy_overrides("BDO_Vulkan_API/Normal", &[PathBuf::from("D:\\BlackDesert")]);
/// println!("Copied/Replaced: {}", copied);
/// ```
pub fn copy_overrides(source_root: impl AsRef<Path>, dests: &[PathBuf]) -> usize {
    let mut copied = 0;

    for src in source_files(source_root.as_ref()) {
        let Some(name) = src.file_name() else { continue };
        for dest in dests {
            let target = dest.join(name);
            match fs::copy(&src, &target) {
                Ok(_) => {
                    if let Err(e) = copy_modified_time(&src, &target) {
                        debug!(
                            file = ?name,
                            error = %e,
                            "[COPY] Could not keep modification time"
                        );
                    }
                    debug!(file = ?name, dest = %dest.display(), "[COPY] Copied");
                    copied += 1;
                }
                Err(e) => {
                    debug!(file = ?name, dest = %dest.display(), error = %e, "[COPY] Failed");
                }
            }
        }
    }

    copied
}

/// Delete, in each destination, every file whose name appears under
/// `source_root`. Returns the number of files removed.
pub fn remove_overrides(source_root: impl AsRef<Path>, dests: &[PathBuf]) -> usize {
    let mut removed = 0;

    for src in source_files(source_root.as_ref()) {
        let Some(name) = src.file_name() else { continue };
        for dest in dests {
            let target = dest.join(name);
            if !target.exists() {
                continue;
            }
            match fs::remove_file(&target) {
                Ok(()) => {
                    debug!(file = ?name, dest = %dest.display(), "[REMOVE] Removed");
                    removed += 1;
                }
                Err(e) => {
                    debug!(file = ?name, dest = %dest.display(), error = %e, "[REMOVE] Failed");
                }
            }
        }
    }

    removed
}

fn copy_modified_time(src: &Path, dst: &Path) -> io::Result<()> {
    let modified = fs::metadata(src)?.modified()?;
    File::options().write(true).open(dst)?.set_modified(modified)
}

fn source_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                debug!(error = %err, "[ASSETS] Unreadable source entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn source() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("vulkan-1.dll"), b"new").unwrap();
        fs::create_dir_all(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("dxvk.conf"), b"conf").unwrap();
        dir
    }

    #[test]
    fn test_copy_flattens_into_each_destination() {
        let src = source();
        let one = tempfile::tempdir().unwrap();
        let two = tempfile::tempdir().unwrap();
        fs::write(one.path().join("vulkan-1.dll"), b"old").unwrap();

        let dests = vec![one.path().to_path_buf(), two.path().to_path_buf()];
        assert_eq!(copy_overrides(src.path(), &dests), 4);

        for dest in &dests {
            assert_eq!(fs::read(dest.join("vulkan-1.dll")).unwrap(), b"new");
            assert_eq!(fs::read(dest.join("dxvk.conf")).unwrap(), b"conf");
            assert!(!dest.join("nested").exists());
        }
    }

    #[test]
    fn test_copy_keeps_modification_time() {
        let src = source();
        let stamp =
            std::time::SystemTime::UNIX_EPOCH + std::time::Duration::from_secs(1_600_000_000);
        File::options()
            .write(true)
            .open(src.path().join("vulkan-1.dll"))
            .unwrap()
            .set_modified(stamp)
            .unwrap();
        let dest = tempfile::tempdir().unwrap();

        copy_overrides(src.path(), &[dest.path().to_path_buf()]);

        let copied = fs::metadata(dest.path().join("vulkan-1.dll")).unwrap();
        assert_eq!(copied.modified().unwrap(), stamp);
    }

    #[test]
    fn test_copy_failure_counts_only_successes() {
        let src = source();
        let good = tempfile::tempdir().unwrap();
        let dests = vec![
            good.path().to_path_buf(),
            PathBuf::from("/definitely/not/a/dest/xyz123"),
        ];
        assert_eq!(copy_overrides(src.path(), &dests), 2);
    }

    #[test]
    fn test_remove_only_matching_names() {
        let src = source();
        let dest = tempfile::tempdir().unwrap();
        fs::write(dest.path().join("vulkan-1.dll"), b"x").unwrap();
        fs::write(dest.path().join("BlackDesert64.exe"), b"x").unwrap();

        let dests = vec![dest.path().to_path_buf()];
        assert_eq!(remove_overrides(src.path(), &dests), 1);
        assert!(!dest.path().join("vulkan-1.dll").exists());
        assert!(dest.path().join("BlackDesert64.exe").exists());
    }

    #[test]
    fn test_missing_source_does_nothing() {
        let dest = tempfile::tempdir().unwrap();
        let dests = vec![dest.path().to_path_buf()];
        assert_eq!(copy_overrides("/definitely/not/a/source/xyz123", &dests), 0);
        assert_eq!(remove_overrides("/definitely/not/a/source/xyz123", &dests), 0);
    }
}
