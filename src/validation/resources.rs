//! Resource directory validation (containing directory exists and is non-empty).

use crate::core::document::Node;
use crate::core::project::resolve_in_repository;
use crate::validation::categories;
use crate::validation::report::{sort_details, Report};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Directory part of a resource entry, as written.
///
/// Trailing separators are dropped unless the directory is the root itself.
/// An entry without any directory part lives in the repository root, `.`.
pub(crate) fn containing_dir(resource: &str) -> String {
    match resource.rfind('/') {
        Some(idx) => {
            let head = &resource[..=idx];
            let trimmed = head.trim_end_matches('/');
            if trimmed.is_empty() {
                head.to_string()
            } else {
                trimmed.to_string()
            }
        }
        None => ".".to_string(),
    }
}

enum DirState {
    Missing,
    Empty,
    Populated,
}

fn dir_state(path: &Path) -> DirState {
    if !path.is_dir() {
        return DirState::Missing;
    }
    match fs::read_dir(path) {
        Ok(mut entries) => {
            if entries.next().is_none() {
                DirState::Empty
            } else {
                DirState::Populated
            }
        }
        Err(e) => {
            warn!("Cannot list resource directory {}: {}", path.display(), e);
            DirState::Missing
        }
    }
}

/// Check the containing directory of every `resources` entry.
///
/// Entries that are not scalars are skipped, as is a `resources` value that
/// is not a sequence.
pub(crate) fn check_resources(repository_root: &Path, resources: &Node, report: &mut Report) {
    let Some(items) = resources.as_sequence() else {
        debug!("No resources to check");
        return;
    };

    let mut false_dirs = Vec::new();
    let mut empty_dirs = Vec::new();

    for declared in items.iter().filter_map(Node::as_text) {
        let dir = containing_dir(&declared);
        let resolved = resolve_in_repository(repository_root, &dir);
        match dir_state(&resolved) {
            DirState::Missing => false_dirs.push(dir),
            DirState::Empty => empty_dirs.push(dir),
            DirState::Populated => {}
        }
    }

    if !false_dirs.is_empty() {
        report.record(categories::NOT_IN_REPOSITORY, sort_details(false_dirs));
    }
    if !empty_dirs.is_empty() {
        report.record(categories::DIRECTORY_EMPTY, sort_details(empty_dirs));
    }
}
