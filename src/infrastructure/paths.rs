//! Filesystem locations for application data.
//!
//! This module resolves the platform data directory used for trace files and
//! expands user-supplied paths.

use std::path::PathBuf;

/// Returns the data directory for cinescope storage.
///
/// Resolves to the platform-local data directory, `~/.local/share/cinescope`
/// on Linux. Falls back to the system temp directory when no local data
/// directory can be determined.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("cinescope")
}

/// Expands a leading tilde to the user's home directory.
///
/// Paths from environment variables usually arrive shell-expanded already;
/// this covers values that were quoted. Paths without a tilde pass through
/// unchanged, as does a tilde when no home directory is known.
///
/// # Examples
///
/// ```
/// use cinescope::infrastructure::expand_tilde;
///
/// assert_eq!(
///     expand_tilde("/absolute/theme.toml"),
///     std::path::PathBuf::from("/absolute/theme.toml")
/// );
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    } else if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
