//! Drive root enumeration with a conventional fallback.

use std::path::PathBuf;
use tracing::debug;

/// Root returned when nothing else qualifies.
#[cfg(windows)]
const FALLBACK_ROOT: &str = "C:\\";
#[cfg(not(windows))]
const FALLBACK_ROOT: &str = "/";

/// List the local file system roots that currently exist.
///
/// On Windows every drive letter `A:` through `Z:` is tried and kept when
/// its root is a readable directory. Elsewhere the single root `/` is used,
/// since every mount hangs off it.
///
/// The result is never empty: when no candidate qualifies, the conventional
/// default root is returned instead. Nothing here reports an error.
///
/// # Example
///
/// ```rust
/// use bdo_install_discovery::enumerate_roots;
///
/// let roots = enumerate_roots();
/// assert!(!roots.is_empty());
/// ```
pub fn enumerate_roots() -> Vec<PathBuf> {
    existing_roots(platform_candidates())
}

#[cfg(windows)]
fn platform_candidates() -> Vec<PathBuf> {
    (b'A'..=b'Z')
        .map(|letter| PathBuf::from(format!("{}:\\", letter as char)))
        .collect()
}

#[cfg(not(windows))]
fn platform_candidates() -> Vec<PathBuf> {
    vec![PathBuf::from("/")]
}

/// Keep candidates that are directories, falling back to [`FALLBACK_ROOT`].
fn existing_roots<I>(candidates: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut roots: Vec<PathBuf> = candidates.into_iter().filter(|root| root.is_dir()).collect();

    if roots.is_empty() {
        debug!(fallback = FALLBACK_ROOT, "No drive roots detected, using fallback");
        roots.push(PathBuf::from(FALLBACK_ROOT));
    }

    debug!(roots = ?roots, "Detected drives");
    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerate_roots_non_empty() {
        let roots = enumerate_roots();
        assert!(!roots.is_empty());
    }

    #[test]
    fn test_missing_candidates_dropped() {
        let drive = tempfile::tempdir().unwrap();
        let roots = existing_roots(vec![
            PathBuf::from("/definitely/not/a/drive/xyz123"),
            drive.path().to_path_buf(),
        ]);
        assert_eq!(roots, vec![drive.path().to_path_buf()]);
    }

    #[test]
    fn test_fallback_when_nothing_exists() {
        let roots = existing_roots(vec![PathBuf::from("/definitely/not/a/drive/xyz123")]);
        assert_eq!(roots, vec![PathBuf::from(FALLBACK_ROOT)]);
    }

    #[test]
    fn test_order_preserved() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        let roots = existing_roots(vec![second.path().to_path_buf(), first.path().to_path_buf()]);
        assert_eq!(roots, vec![second.path().to_path_buf(), first.path().to_path_buf()]);
    }
}
