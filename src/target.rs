//! Description of the game being searched for.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Executable shipped by Black Desert Online.
pub const BLACK_DESERT_EXE: &str = "BlackDesert64.exe";

/// Install locations that have historically been common for Black Desert,
/// relative to a drive root.
const BLACK_DESERT_QUICK_PATHS: &[&str] = &[
    "BlackDesert",
    "PearlAbyss",
    "Program Files/BlackDesert",
    "Program Files (x86)/BlackDesert",
    "Program Files/PearlAbyss",
    "Program Files (x86)/PearlAbyss",
    "Program Files/Steam/steamapps/common/Black Desert Online",
    "Program Files (x86)/Steam/steamapps/common/Black Desert Online",
    "Games/BlackDesert",
];

/// The game whose installations are being looked for.
///
/// A directory counts as an installation when it directly contains
/// [`executable`](Self::executable). The quick path table is checked in
/// order before any full directory walk is attempted.
///
/// # Example
///
/// ```rust
/// use bdo_install_discovery::GameTarget;
///
/// let target = GameTarget::new("game.exe", ["Games/MyGame", "MyGame"]);
/// assert_eq!(target.executable, "game.exe");
/// assert_eq!(target.quick_paths.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameTarget {
    /// File name identifying an installation directory.
    pub executable: String,

    /// Root-relative directories probed during the quick pass.
    ///
    /// Entries may start with a path separator; it is ignored.
    pub quick_paths: Vec<String>,
}

impl GameTarget {
    /// Build a target from an executable name and a quick path table.
    pub fn new<I, S>(executable: impl Into<String>, quick_paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            executable: executable.into(),
            quick_paths: quick_paths.into_iter().map(Into::into).collect(),
        }
    }

    /// The stock Black Desert Online target.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bdo_install_discovery::GameTarget;
    ///
    /// let target = GameTarget::black_desert();
    /// assert_eq!(target.executable, "BlackDesert64.exe");
    /// assert_eq!(target.quick_paths[0], "BlackDesert");
    /// ```
    pub fn black_desert() -> Self {
        Self::new(BLACK_DESERT_EXE, BLACK_DESERT_QUICK_PATHS.iter().copied())
    }

    /// Whether `dir` currently holds the target executable.
    ///
    /// This is always answered against the file system; nothing is cached.
    pub fn is_installation(&self, dir: &Path) -> bool {
        dir.join(&self.executable).exists()
    }

    /// Quick path candidates under `root`, in table order.
    pub fn quick_candidates<'a>(&'a self, root: &'a Path) -> impl Iterator<Item = PathBuf> + 'a {
        self.quick_paths
            .iter()
            .map(move |rel| root.join(rel.trim_start_matches(['/', '\\'])))
    }
}

impl Default for GameTarget {
    fn default() -> Self {
        Self::black_desert()
    }
}
