//! Core project data structures.
//!
//! This module defines the records persisted in the configuration file: a
//! [`Project`] describing one directory tree and how it should be handled, and
//! the nested [`Watcher`] settings consumed by a file-watching engine.

use std::{
    fmt::{Display, Formatter, Result},
    path::PathBuf,
};

use serde::{Deserialize, Serialize};

/// File-watching settings of a project.
///
/// `paths`, `ignore` and `exts` are filled in from
/// [`WatcherDefaults`](crate::config::WatcherDefaults) when a project is built.
/// `after`, `before` and `preview` are never set by this crate; they are only
/// carried through the configuration file for the engine that reads it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watcher {
    /// Directories to watch, in order
    #[serde(default)]
    pub paths: Vec<String>,

    /// Directories excluded from watching
    #[serde(default)]
    pub ignore: Vec<String>,

    /// File-extension filters (e.g. `".go"`)
    #[serde(default)]
    pub exts: Vec<String>,

    /// Commands to run after a rebuild
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub after: Vec<String>,

    /// Commands to run before a rebuild
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub before: Vec<String>,

    /// Whether the engine should print changed files
    #[serde(default, skip_serializing_if = "is_false")]
    pub preview: bool,
}

/// A named unit of work tracked by the configuration store.
///
/// A project is identified by its `name`; its `path` is a secondary key. Both
/// must be unique within a [`Config`](crate::config::Config).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Project {
    /// Name of the project, unique within the configuration
    pub name: String,

    /// Lexically cleaned root directory of the project
    pub path: PathBuf,

    /// Whether the project should be built
    #[serde(default)]
    pub build: bool,

    /// Whether the built binary should be installed
    #[serde(default)]
    pub bin: bool,

    /// Whether the project should be run after a build
    #[serde(default)]
    pub run: bool,

    /// Whether sources should be formatted
    #[serde(default)]
    pub fmt: bool,

    /// Whether tests should be run
    #[serde(default)]
    pub test: bool,

    /// Arguments passed through to the running project
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,

    /// File-watching settings
    #[serde(default)]
    pub watcher: Watcher,
}

impl Project {
    /// Returns `true` if `other` shares this project's name or path.
    #[must_use]
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.path == other.path || self.name == other.name
    }
}

impl Display for Project {
    /// Format the project as `name (path)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} ({})", self.name, self.path.display())
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}
