//! # devwatch
//!
//! Keeps a list of projects (a directory plus what to do with it: build,
//! install, run, format, test, and which files to watch) in `.devwatch.toml`,
//! for a file-watching build runner to pick up.
//!
//! ## Usage
//!
//! ```bash
//! # Add the current directory as a project (creates the file on first use)
//! devwatch add
//!
//! # Add a project with a custom path, no auto-run, and run arguments
//! devwatch add --path services/api --no-run -- --port 8080
//!
//! # Show every project
//! devwatch list
//!
//! # Remove a project by name
//! devwatch remove --name api
//! ```

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use devwatch::{
    config::{WatcherDefaults, config_path},
    logging::init_logging,
    output::{JsonOutput, REMOVE_MESSAGE, add_message, print_listings, print_success},
    project::{ProjectBuilder, ProjectParams},
    store::ConfigStore,
};
use std::process::exit;

/// Entry point for the devwatch application.
///
/// Errors from [`inner_main`] are printed to stderr and turned into exit
/// status 1.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// The store is always bootstrapped with the project described by the
/// command line, so that a missing config file is created on first use.
///
/// # Errors
///
/// This function can return errors from:
/// - Determining the current directory
/// - Reading, parsing, or writing the config file
/// - Duplicate or missing projects
/// - JSON serialization
fn inner_main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.log_level);

    let path = config_path(args.config.as_deref());

    match args.command {
        Command::Add(add) => {
            let builder = ProjectBuilder::from_current_dir(add.watcher_defaults())?;
            let params = add.project_params();

            let mut store = ConfigStore::bootstrap(path, &builder, &params);
            let outcome = store.add(builder.build(&params))?;

            print_success(add_message(outcome));
        }
        Command::Remove(remove) => {
            let builder = ProjectBuilder::from_current_dir(WatcherDefaults::default())?;

            let mut store = ConfigStore::bootstrap(path, &builder, &ProjectParams::default());
            store.remove(remove.name())?;

            print_success(REMOVE_MESSAGE);
        }
        Command::List(list) => {
            let builder = ProjectBuilder::from_current_dir(WatcherDefaults::default())?;

            let mut store = ConfigStore::bootstrap(path, &builder, &ProjectParams::default());
            let listings = store.list()?;

            if list.json {
                let output = JsonOutput {
                    version: &store.config().version,
                    projects: store.projects(),
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                print_listings(&listings);
            }
        }
    }

    Ok(())
}
