//! Default watcher settings applied to newly built projects.

use crate::project::Watcher;

/// Watcher lists given to every project the builder creates.
///
/// The defaults are:
///
/// | field    | default              |
/// |----------|----------------------|
/// | `paths`  | `["/"]`              |
/// | `ignore` | `["vendor", "bin"]`  |
/// | `exts`   | `[".go"]`            |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WatcherDefaults {
    /// Directories to watch, relative to the project root
    pub paths: Vec<String>,

    /// Directories to exclude from watching
    pub ignore: Vec<String>,

    /// File extensions that trigger a rebuild
    pub exts: Vec<String>,
}

impl Default for WatcherDefaults {
    fn default() -> Self {
        Self {
            paths: vec!["/".to_string()],
            ignore: vec!["vendor".to_string(), "bin".to_string()],
            exts: vec![".go".to_string()],
        }
    }
}

impl WatcherDefaults {
    /// Replace each default list by the matching argument, unless it is empty.
    #[must_use]
    pub fn with_overrides(
        mut self,
        paths: Vec<String>,
        ignore: Vec<String>,
        exts: Vec<String>,
    ) -> Self {
        if !paths.is_empty() {
            self.paths = paths;
        }
        if !ignore.is_empty() {
            self.ignore = ignore;
        }
        if !exts.is_empty() {
            self.exts = exts;
        }
        self
    }

    /// A fresh [`Watcher`] carrying these lists.
    #[must_use]
    pub fn watcher(&self) -> Watcher {
        Watcher {
            paths: self.paths.clone(),
            ignore: self.ignore.clone(),
            exts: self.exts.clone(),
            ..Watcher::default()
        }
    }
}
