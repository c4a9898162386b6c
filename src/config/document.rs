//! The root document persisted in the configuration file.

use serde::{Deserialize, Serialize};

use crate::project::Project;

/// Version stamped into freshly created configuration files.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Root of the configuration file: a version tag plus the ordered projects.
///
/// ```toml
/// version = "0.1.0"
///
/// [[projects]]
/// name = "api"
/// path = "services/api"
/// build = false
/// bin = true
/// run = true
/// fmt = true
/// test = false
///
/// [projects.watcher]
/// paths = ["/"]
/// ignore = ["vendor", "bin"]
/// exts = [".go"]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Opaque version string, carried through untouched
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,

    /// Projects in insertion order
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Config {
    /// A fresh configuration holding a single project.
    #[must_use]
    pub fn with_project(project: Project) -> Self {
        Self {
            version: APP_VERSION.to_string(),
            projects: vec![project],
        }
    }

    /// Merge a document read from disk into this one.
    ///
    /// The projects are replaced wholesale; the version is only replaced when
    /// the file carries one.
    pub fn merge_from(&mut self, other: Self) {
        if !other.version.is_empty() {
            self.version = other.version;
        }
        self.projects = other.projects;
    }
}
