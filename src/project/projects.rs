//! Operations on ordered collections of projects.
//!
//! This module holds the identity rules of the configuration: a project
//! conflicts with another when they share a name or a path, and a collection
//! is kept free of conflicts by dropping the earlier of two conflicting
//! entries.

use super::Project;

/// Find the first project in `projects` that conflicts with `candidate`.
///
/// Entries are scanned in order and the scan stops at the first one that
/// shares either the candidate's path or its name.
///
/// # Returns
///
/// - `Some(&Project)` - The first conflicting entry
/// - `None` - The candidate's name and path are both unused
#[must_use]
pub fn find_duplicate<'a>(candidate: &Project, projects: &'a [Project]) -> Option<&'a Project> {
    projects
        .iter()
        .find(|existing| candidate.conflicts_with(existing))
}

/// Remove earlier duplicates, keeping the last occurrence.
///
/// An entry survives only if no entry after it in the original order
/// conflicts with it. The result is computed from the original order in one
/// pass, so the survivors never conflict with each other and applying this
/// twice gives the same collection as applying it once.
///
/// # Returns
///
/// The surviving projects and the number of dropped entries.
#[must_use]
pub fn dedup_keep_last(projects: Vec<Project>) -> (Vec<Project>, usize) {
    let keep: Vec<bool> = projects
        .iter()
        .enumerate()
        .map(|(index, project)| find_duplicate(project, &projects[index + 1..]).is_none())
        .collect();

    let before = projects.len();
    let kept: Vec<Project> = projects
        .into_iter()
        .zip(keep)
        .filter_map(|(project, keep)| keep.then_some(project))
        .collect();
    let dropped = before - kept.len();

    (kept, dropped)
}

/// Remove the first project named exactly `name`, preserving the order of the
/// others.
///
/// # Returns
///
/// The removed project, or `None` when no project has that name.
pub fn remove_by_name(projects: &mut Vec<Project>, name: &str) -> Option<Project> {
    let index = projects.iter().position(|p| p.name == name)?;
    Some(projects.remove(index))
}
