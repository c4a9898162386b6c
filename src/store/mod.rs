//! The project configuration store.
//!
//! A [`ConfigStore`] owns the in-memory [`Config`] for one invocation and
//! mediates every read and write of the backing file. It is always created
//! from the project described on the command line, so that a missing file can
//! be initialised with that project on first use.
//!
//! The store does no locking; concurrent invocations against the same file
//! are not supported.

pub mod persist;

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::{
    config::Config,
    error::{Phase, Result, StoreError},
    project::{
        Project, ProjectBuilder, ProjectListing, ProjectParams, dedup_keep_last, find_duplicate,
        remove_by_name,
    },
};

pub use persist::{read_config, write_config};

/// What [`ConfigStore::load`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file existed and was merged into memory.
    Loaded,

    /// The file was missing and has been written from memory.
    Created,
}

/// What [`ConfigStore::add`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddOutcome {
    /// The project was appended to an existing file.
    Added,

    /// The file did not exist; it was created holding the bootstrapped project.
    Created,
}

/// In-memory configuration bound to its backing file.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    config: Config,
}

impl ConfigStore {
    /// Create a store for `path` holding `config`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            path: path.into(),
            config,
        }
    }

    /// Create a store whose configuration is the single project built from
    /// `params`.
    ///
    /// This is what gets written if the backing file does not exist yet.
    #[must_use]
    pub fn bootstrap(
        path: impl Into<PathBuf>,
        builder: &ProjectBuilder,
        params: &ProjectParams,
    ) -> Self {
        Self::new(path, Config::with_project(builder.build(params)))
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The in-memory configuration, as of the last load or mutation.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The in-memory projects, in order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.config.projects
    }

    /// Bring the backing file into memory.
    ///
    /// - If the file does not exist, the current configuration is written to
    ///   it and [`LoadOutcome::Created`] is returned.
    /// - Otherwise the file is parsed, merged into the current configuration
    ///   (see [`Config::merge_from`]) and cleaned of duplicates.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NoProjectsConfigured`] if the file exists but the store
    ///   holds no projects
    /// - [`StoreError::Persistence`] if the file cannot be checked, read,
    ///   parsed, or (when missing) created
    pub fn load(&mut self) -> Result<LoadOutcome> {
        let exists = self
            .path
            .try_exists()
            .map_err(|e| StoreError::persistence(Phase::Load, &self.path, e))?;

        if !exists {
            debug!(path = %self.path.display(), "config file missing, creating it");
            self.create()?;
            return Ok(LoadOutcome::Created);
        }

        if self.config.projects.is_empty() {
            return Err(StoreError::NoProjectsConfigured);
        }

        debug!(path = %self.path.display(), "loading config file");
        let from_file = read_config(&self.path)?;
        self.config.merge_from(from_file);
        self.clean();

        Ok(LoadOutcome::Loaded)
    }

    /// Write the current configuration to the backing file, creating or
    /// overwriting it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Persistence`] if serialization or the write fails.
    pub fn create(&self) -> Result<()> {
        write_config(&self.path, &self.config)?;
        debug!(
            path = %self.path.display(),
            projects = self.config.projects.len(),
            "config file written"
        );
        Ok(())
    }

    /// Drop every project that conflicts with a later one.
    ///
    /// # Returns
    ///
    /// The number of projects removed.
    pub fn clean(&mut self) -> usize {
        let projects = std::mem::take(&mut self.config.projects);
        let (kept, dropped) = dedup_keep_last(projects);
        self.config.projects = kept;

        if dropped > 0 {
            warn!(
                path = %self.path.display(),
                dropped,
                "duplicate projects in config file; keeping the last of each"
            );
        }
        dropped
    }

    /// Add `candidate` to the configuration and persist it.
    ///
    /// On first use (no backing file) the file is created with the
    /// bootstrapped project instead and `candidate` is not appended again.
    ///
    /// # Errors
    ///
    /// - [`StoreError::DuplicateProject`] naming the existing project if
    ///   `candidate` shares its name or path; the file is left untouched
    /// - any error from [`load`](Self::load) or [`create`](Self::create)
    pub fn add(&mut self, candidate: Project) -> Result<AddOutcome> {
        if self.load()? == LoadOutcome::Created {
            return Ok(AddOutcome::Created);
        }

        if let Some(existing) = find_duplicate(&candidate, &self.config.projects) {
            return Err(StoreError::DuplicateProject(existing.name.clone()));
        }

        info!(name = %candidate.name, path = %candidate.path.display(), "adding project");
        self.config.projects.push(candidate);
        self.create()?;

        Ok(AddOutcome::Added)
    }

    /// Remove the project called `name` and persist the result.
    ///
    /// # Errors
    ///
    /// - [`StoreError::ProjectNotFound`] if no project has that exact name;
    ///   the file is left untouched. On first use (no backing file) nothing
    ///   can be removed, so this is also returned after the file is created.
    /// - any error from [`load`](Self::load) or [`create`](Self::create)
    pub fn remove(&mut self, name: &str) -> Result<Project> {
        if self.load()? == LoadOutcome::Created {
            return Err(StoreError::ProjectNotFound(name.to_string()));
        }

        let removed = remove_by_name(&mut self.config.projects, name)
            .ok_or_else(|| StoreError::ProjectNotFound(name.to_string()))?;

        info!(name, "removing project");
        self.create()?;

        Ok(removed)
    }

    /// Load the configuration and describe every project, in order.
    ///
    /// # Errors
    ///
    /// Any error from [`load`](Self::load).
    pub fn list(&mut self) -> Result<Vec<ProjectListing>> {
        self.load()?;

        Ok(self.config.projects.iter().map(ProjectListing::from).collect())
    }
}
