//! Construction of [`Project`] records from command-line parameters.
//!
//! The builder is a pure transformation: given the raw parameters of an `add`
//! invocation, the working directory, and the watcher defaults, it produces
//! one normalized project. Every input is accepted; missing values fall back
//! to defaults.

use std::{
    io,
    path::{Component, Path, PathBuf},
};

use path_clean::PathClean;
use tracing::warn;

use super::{
    Project,
    flags::{CAPABILITY_FLAGS, FlagMapping},
};
use crate::config::WatcherDefaults;

/// Raw parameters describing a project, as received from the command line.
///
/// Empty strings mean "not supplied".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ProjectParams {
    pub name: String,
    pub path: String,
    pub build: bool,
    pub no_bin: bool,
    pub no_run: bool,
    pub no_fmt: bool,
    pub test: bool,

    /// Positional arguments, in order
    pub args: Vec<String>,
}

impl ProjectParams {
    /// Value of a boolean flag by its command-line name.
    ///
    /// Unknown names read as unset.
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        match name {
            "build" => self.build,
            "no-bin" => self.no_bin,
            "no-run" => self.no_run,
            "no-fmt" => self.no_fmt,
            "test" => self.test,
            _ => false,
        }
    }
}

/// Builds normalized [`Project`] records.
#[derive(Clone, Debug)]
pub struct ProjectBuilder {
    working_dir: PathBuf,
    watcher: WatcherDefaults,
}

impl ProjectBuilder {
    /// Create a builder for an explicit working directory.
    ///
    /// # Arguments
    ///
    /// * `working_dir` - Directory whose name is used when neither a name nor a
    ///   path is given
    /// * `watcher` - Watcher lists copied into every built project
    #[must_use]
    pub fn new(working_dir: impl Into<PathBuf>, watcher: WatcherDefaults) -> Self {
        Self {
            working_dir: working_dir.into(),
            watcher,
        }
    }

    /// Create a builder for the process's current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn from_current_dir(watcher: WatcherDefaults) -> io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?, watcher))
    }

    /// Build a project from `params`.
    #[must_use]
    pub fn build(&self, params: &ProjectParams) -> Project {
        let mut project = Project {
            name: self.resolve_name(params),
            path: clean_path(&params.path),
            params: params.args.clone(),
            watcher: self.watcher.watcher(),
            ..Project::default()
        };

        for FlagMapping {
            flag,
            capability,
            polarity,
        } in CAPABILITY_FLAGS
        {
            capability.set(&mut project, polarity.apply(params.flag(flag)));
        }

        project
    }

    /// Pick the project name.
    ///
    /// - no name and no path: the working directory's name
    /// - a path other than the filesystem root: that path's last component,
    ///   even when a name was given
    /// - otherwise: the given name, which is empty for a bare root path
    ///
    /// Both the root check and the last component use the cleaned path, not
    /// the raw argument: `a/b/.` names the project `b`, and `//` counts as
    /// the root.
    #[must_use]
    pub fn resolve_name(&self, params: &ProjectParams) -> String {
        if params.name.is_empty() && params.path.is_empty() {
            return base_name(&self.working_dir);
        }

        let path = clean_path(&params.path);
        if !params.path.is_empty() && !is_root(&path) {
            return base_name(&path);
        }

        if params.name.is_empty() {
            warn!(
                path = %path.display(),
                "project path is the filesystem root and no name was given; name is empty"
            );
        }
        params.name.clone()
    }
}

/// Lexically normalize a path; an empty path becomes `.`.
#[must_use]
pub fn clean_path(path: &str) -> PathBuf {
    Path::new(path).clean()
}

/// Last element of a path, keeping `.`, `..` and `/` as-is.
fn base_name(path: &Path) -> String {
    match path.components().next_back() {
        Some(Component::Normal(name)) => name.to_string_lossy().into_owned(),
        Some(Component::CurDir) | None => ".".to_string(),
        Some(Component::ParentDir) => "..".to_string(),
        Some(Component::RootDir | Component::Prefix(_)) => path.display().to_string(),
    }
}

fn is_root(path: &Path) -> bool {
    path.has_root() && path.parent().is_none()
}
