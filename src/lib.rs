//! # devwatch
//!
//! A project configuration store for a file-watching build runner.
//!
//! This library keeps an ordered list of named projects in a TOML file and
//! enforces that no two of them share a name or a path. The `devwatch` binary
//! is a thin command-line layer over it.
//!
//! - [`project`] - Project records, the builder, and the identity rules
//! - [`store`] - Loading, creating, adding, removing and listing
//! - [`config`] - The persisted document and watcher defaults

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod project;
pub mod store;
