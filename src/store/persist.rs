//! Reading and writing the configuration file.
//!
//! The file is TOML. Each call opens, reads or writes, and closes the file;
//! no handle outlives the call.

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::Path,
};

use crate::{
    config::Config,
    error::{Phase, Result, StoreError},
};

/// Permission bits given to a newly created configuration file.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Read and parse the configuration file at `path`.
///
/// # Errors
///
/// Returns [`StoreError::Persistence`] in the [`Phase::Load`] phase if the
/// file cannot be read or is not a valid configuration document.
pub fn read_config(path: &Path) -> Result<Config> {
    let content =
        fs::read_to_string(path).map_err(|e| StoreError::persistence(Phase::Load, path, e))?;

    toml::from_str(&content).map_err(|e| StoreError::persistence(Phase::Load, path, e))
}

/// Serialize `config` and write it to `path`, replacing any previous content.
///
/// # Errors
///
/// Returns [`StoreError::Persistence`] in the [`Phase::Create`] phase if
/// serialization fails or the file cannot be written.
pub fn write_config(path: &Path, config: &Config) -> Result<()> {
    let content = toml::to_string_pretty(config)
        .map_err(|e| StoreError::persistence(Phase::Create, path, e))?;

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options
        .open(path)
        .map_err(|e| StoreError::persistence(Phase::Create, path, e))?;

    file.write_all(content.as_bytes())
        .map_err(|e| StoreError::persistence(Phase::Create, path, e))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;

    use super::*;
    use crate::project::{Project, Watcher};

    fn sample() -> Config {
        Config {
            version: "1.2.3".to_string(),
            projects: vec![
                Project {
                    name: "a".to_string(),
                    path: PathBuf::from("/x"),
                    run: true,
                    params: vec!["--flag".to_string()],
                    watcher: Watcher {
                        paths: vec!["/".to_string()],
                        exts: vec![".go".to_string()],
                        before: vec!["make gen".to_string()],
                        ..Watcher::default()
                    },
                    ..Project::default()
                },
                Project {
                    name: "b".to_string(),
                    path: PathBuf::from("/y"),
                    ..Project::default()
                },
            ],
        }
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        write_config(&path, &sample()).unwrap();

        assert_eq!(read_config(&path).unwrap(), sample());
    }

    #[test]
    fn test_write_overwrites_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "x".repeat(4096)).unwrap();

        write_config(&path, &Config::default()).unwrap();

        assert_eq!(read_config(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_written_file_layout() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        write_config(&path, &sample()).unwrap();
        let content = fs::read_to_string(&path).unwrap();

        assert!(content.starts_with("version = \"1.2.3\""));
        assert_eq!(content.matches("[[projects]]").count(), 2);
        assert!(content.contains("[projects.watcher]"));
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        write_config(&path, &sample()).unwrap();
        let mode = fs::metadata(&path).unwrap().permissions().mode();

        // Exact bits depend on the umask; never executable, always owner rw.
        assert_eq!(mode & 0o111, 0);
        assert_eq!(mode & 0o600, 0o600);
    }

    #[test]
    fn test_read_missing_file_is_load_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");

        match read_config(&path) {
            Err(StoreError::Persistence { phase, .. }) => assert_eq!(phase, Phase::Load),
            other => panic!("Expected load error, got: {other:?}"),
        }
    }

    #[test]
    fn test_read_malformed_file_is_load_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "projects = \"not a list\"").unwrap();

        assert!(matches!(
            read_config(&path),
            Err(StoreError::Persistence {
                phase: Phase::Load,
                ..
            })
        ));
    }

    #[test]
    fn test_write_into_missing_dir_is_create_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nope").join("config.toml");

        assert!(matches!(
            write_config(&path, &sample()),
            Err(StoreError::Persistence {
                phase: Phase::Create,
                ..
            })
        ));
    }
}
