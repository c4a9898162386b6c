//! Location of the configuration file.
//!
//! The projects are stored in `.devwatch.toml` in the current working
//! directory. A different file can be given with `--config`; a leading `~` in
//! that path is expanded to the user's home directory.

use std::path::{Path, PathBuf};

/// File name used when no `--config` path is given.
pub const CONFIG_FILE_NAME: &str = ".devwatch.toml";

/// Expand a leading `~` in a path to the user's home directory.
///
/// Paths that don't start with `~` are returned unchanged.
///
/// # Examples
///
/// ```
/// # use std::path::PathBuf;
/// # use devwatch::config::expand_tilde;
/// let absolute = PathBuf::from("/absolute/path");
/// assert_eq!(expand_tilde(&absolute), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

/// Resolve the path of the configuration file.
///
/// # Arguments
///
/// * `explicit` - Path passed with `--config`, if any
///
/// # Returns
///
/// The explicit path with `~` expanded, or [`CONFIG_FILE_NAME`] relative to
/// the working directory.
#[must_use]
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    explicit.map_or_else(|| PathBuf::from(CONFIG_FILE_NAME), expand_tilde)
}
