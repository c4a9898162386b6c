//! Field selection for the `list` command.
//!
//! A [`ProjectListing`] is the ordered set of labelled values shown for one
//! project. Colors and layout belong to [`crate::output`].

use super::Project;

/// One labelled value of a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListField {
    /// Nesting level: 1 for project fields, 2 for watcher fields
    pub depth: u8,
    pub label: &'static str,

    /// Rendered value; `None` for a section header such as "Watcher"
    pub value: Option<String>,
}

impl ListField {
    fn entry(depth: u8, label: &'static str, value: impl ToString) -> Self {
        Self {
            depth,
            label,
            value: Some(value.to_string()),
        }
    }

    fn section(label: &'static str) -> Self {
        Self {
            depth: 1,
            label,
            value: None,
        }
    }
}

/// Everything shown for one project, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectListing {
    pub name: String,
    pub fields: Vec<ListField>,
}

impl From<&Project> for ProjectListing {
    fn from(project: &Project) -> Self {
        let watcher = &project.watcher;

        Self {
            name: project.name.clone(),
            fields: vec![
                ListField::entry(1, "Base Path", project.path.display()),
                ListField::entry(1, "Run", project.run),
                ListField::entry(1, "Build", project.build),
                ListField::entry(1, "Install", project.bin),
                ListField::entry(1, "Fmt", project.fmt),
                ListField::entry(1, "Test", project.test),
                ListField::entry(1, "Params", format_list(&project.params)),
                ListField::section("Watcher"),
                ListField::entry(2, "After", format_list(&watcher.after)),
                ListField::entry(2, "Before", format_list(&watcher.before)),
                ListField::entry(2, "Extensions", format_list(&watcher.exts)),
                ListField::entry(2, "Paths", format_list(&watcher.paths)),
                ListField::entry(2, "Paths ignored", format_list(&watcher.ignore)),
                ListField::entry(2, "Watch preview", watcher.preview),
            ],
        }
    }
}

fn format_list(items: &[String]) -> String {
    format!("[{}]", items.join(" "))
}
