//! Detection of a running game process.
//!
//! Override files cannot be replaced while the game holds them open, so
//! callers check this before [`copy_overrides`](crate::copy_overrides) or
//! [`remove_overrides`](crate::remove_overrides).

use crate::GameTarget;
use std::ffi::OsStr;
use std::path::Path;
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};
use tracing::debug;

/// Whether a process running the target executable exists.
///
/// Processes are matched on their name or on the file name of their
/// executable, ignoring ASCII case. An unreadable process table counts as
/// "not running".
///
/// # Example
///
/// ```rust,no_run
/// use bdo_install_discovery::{is_running, GameTarget};
///
/// if is_running(&GameTarget::black_desert()) {
///     eprintln!("Please close Black Desert Online before using this utility.");
/// }
/// ```
pub fn is_running(target: &GameTarget) -> bool {
    let mut sys = System::new();
    let refreshed = sys.refresh_processes_specifics(
        ProcessesToUpdate::All,
        true,
        ProcessRefreshKind::nothing().with_exe(UpdateKind::OnlyIfNotSet),
    );

    if refreshed == 0 {
        debug!("[PROC] Process list unavailable");
        return false;
    }

    let running = sys.processes().values().any(|process| {
        matches_executable(process.name(), process.exe(), &target.executable)
    });

    debug!(
        executable = %target.executable,
        running,
        "[PROC] Checked for running game"
    );
    running
}

fn matches_executable(name: &OsStr, exe: Option<&Path>, executable: &str) -> bool {
    let same = |candidate: &OsStr| candidate.to_string_lossy().eq_ignore_ascii_case(executable);
    same(name) || exe.and_then(Path::file_name).is_some_and(same)
}
