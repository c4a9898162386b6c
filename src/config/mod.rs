//! Configuration types.
//!
//! This module contains the persisted [`Config`] document, the default watcher
//! settings handed to the project builder, and the resolution of the
//! configuration file path.

pub mod document;
pub mod file;
pub mod watcher;

pub use document::{APP_VERSION, Config};
pub use file::{CONFIG_FILE_NAME, config_path, expand_tilde};
pub use watcher::WatcherDefaults;
