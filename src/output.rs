//! Terminal and JSON rendering.
//!
//! The store decides *what* is shown; this module decides how it looks. Human
//! output uses `colored`, machine output is a single pretty-printed JSON
//! document on stdout.

use colored::Colorize;
use serde::Serialize;

use crate::project::{Project, ProjectListing};
use crate::store::AddOutcome;

/// Render one project listing as colored, indented text.
///
/// # Output Format
///
/// ```text
/// | API
/// |    Base Path : /srv/api
/// |    Run : true
/// |    ...
/// |    Watcher :
/// |        After : []
/// ```
#[must_use]
pub fn render_listing(listing: &ProjectListing) -> String {
    let mut out = format!("{} {}\n", "|".blue(), listing.name.to_uppercase().blue());

    for field in &listing.fields {
        let indent = "    ".repeat(usize::from(field.depth));
        let value = field.value.as_deref().unwrap_or_default();
        out.push_str(&format!(
            "{}{indent}{} : {}\n",
            "|".magenta(),
            field.label.yellow(),
            value.magenta()
        ));
    }

    out
}

/// Print every listing to stdout.
pub fn print_listings(listings: &[ProjectListing]) {
    for listing in listings {
        print!("{}", render_listing(listing));
    }
}

/// Machine-readable form of the `list` command.
#[derive(Serialize)]
pub struct JsonOutput<'a> {
    pub version: &'a str,
    pub projects: &'a [Project],
}

/// Confirmation printed after a successful `add`.
#[must_use]
pub const fn add_message(outcome: AddOutcome) -> &'static str {
    match outcome {
        AddOutcome::Added => "Your project was successfully added",
        AddOutcome::Created => "The config file was successfully created",
    }
}

/// Confirmation printed after a successful `remove`.
pub const REMOVE_MESSAGE: &str = "Your project was successfully removed";

/// Print a success message in green.
pub fn print_success(message: &str) {
    println!("{}", message.green());
}
