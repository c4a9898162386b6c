//! Error types for the project configuration store.
//!
//! Every failure the store can report is a [`StoreError`]. Persistence
//! failures carry the [`Phase`] they happened in and the file involved, so a
//! message like `failed to load .devwatch.toml: ...` is enough to tell a
//! broken file apart from a failed write.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// The store operation a persistence failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Reading or parsing the backing file.
    Load,

    /// Serializing or writing the backing file.
    Create,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load => f.write_str("load"),
            Self::Create => f.write_str("create"),
        }
    }
}

/// Underlying cause of a [`StoreError::Persistence`] failure.
#[derive(Error, Debug)]
pub enum PersistenceCause {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("There are no projects")]
    NoProjectsConfigured,

    #[error("There is a duplicate of '{0}'. Check your config file!")]
    DuplicateProject(String),

    #[error("No project found with name '{0}'")]
    ProjectNotFound(String),

    #[error("failed to {phase} {}: {source}", .path.display())]
    Persistence {
        phase: Phase,
        path: PathBuf,
        #[source]
        source: PersistenceCause,
    },
}

impl StoreError {
    pub(crate) fn persistence(
        phase: Phase,
        path: impl Into<PathBuf>,
        source: impl Into<PersistenceCause>,
    ) -> Self {
        Self::Persistence {
            phase,
            path: path.into(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
