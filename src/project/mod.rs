//! Project records and the rules that govern them.
//!
//! ## Main Parts
//!
//! - [`Project`] - One named directory tree and its capability toggles
//! - [`Watcher`] - File-watching settings nested in a project
//! - [`ProjectBuilder`] - Builds a normalized project from [`ProjectParams`]
//! - [`flags`] - Declared polarity of every capability flag
//! - [`find_duplicate`] and [`dedup_keep_last`] - Identity conflict rules
//! - [`ProjectListing`] - Ordered fields shown by `list`

pub mod builder;
pub mod flags;
pub mod listing;
#[allow(clippy::module_inception)]
pub mod project;
pub mod projects;

pub use builder::{ProjectBuilder, ProjectParams, clean_path};
pub use listing::{ListField, ProjectListing};
pub use project::{Project, Watcher};
pub use projects::{dedup_keep_last, find_duplicate, remove_by_name};
