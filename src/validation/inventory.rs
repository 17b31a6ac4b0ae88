//! Content inventory: every `assemblies` and `modules` pattern must match a file.
//!
//! Patterns are globs relative to the repository root. `*`, `?` and `[...]`
//! stay within one path component and skip hidden entries unless the pattern
//! names a dot component itself; `**` as a whole component crosses directories.

use crate::core::document::{Document, Node};
use crate::core::project::resolve_in_repository;
use crate::validation::categories;
use crate::validation::report::{sort_details, Report};
use globset::{GlobBuilder, GlobMatcher};
use std::path::Path;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

const CONTENT_KEYS: &[&str] = &["assemblies", "modules"];

fn has_wildcard(s: &str) -> bool {
    s.contains(['*', '?', '['])
}

/// Compile the wildcard part of a pattern; separators are never matched by `*`
fn compile_matcher(glob: &str) -> Result<GlobMatcher, globset::Error> {
    Ok(GlobBuilder::new(glob)
        .literal_separator(true)
        .build()?
        .compile_matcher())
}

fn to_slash_path(rel: &Path) -> String {
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

/// Whether `pattern` matches at least one file or directory
pub fn pattern_matches_any(repository_root: &Path, pattern: &str) -> bool {
    let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
    if !has_wildcard(pattern) {
        return resolve_in_repository(repository_root, pattern).exists();
    }

    // Walk only below the literal prefix of the pattern
    let components: Vec<&str> = pattern.split('/').collect();
    let split = components
        .iter()
        .position(|c| has_wildcard(c))
        .unwrap_or(components.len());
    let base = components[..split].join("/");
    let rest = components[split..].join("/");
    let base = match base.as_str() {
        "" if pattern.starts_with('/') => "/".to_string(),
        "" => ".".to_string(),
        _ => base,
    };
    let base_dir = resolve_in_repository(repository_root, &base);

    let matcher = match compile_matcher(&rest) {
        Ok(matcher) => matcher,
        Err(e) => {
            warn!("Cannot interpret pattern {}: {}", pattern, e);
            return false;
        }
    };
    let include_hidden = components[split..].iter().any(|c| c.starts_with('.'));

    let mut walker = WalkDir::new(&base_dir).min_depth(1);
    if !rest.contains("**") {
        walker = walker.max_depth(components.len() - split);
    }

    walker
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || include_hidden || !is_hidden(entry))
        .filter_map(Result::ok)
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(&base_dir)
                .ok()
                .map(to_slash_path)
        })
        .any(|rel| matcher.is_match(&rel))
}

/// Record every content pattern that matches nothing
pub fn check_content_inventory(repository_root: &Path, document: &Document, report: &mut Report) {
    let mut unmatched = Vec::new();

    for key in CONTENT_KEYS {
        let Some(patterns) = document.get(key).as_sequence() else {
            continue;
        };
        for pattern in patterns.iter().filter_map(Node::as_text) {
            if !pattern_matches_any(repository_root, &pattern) {
                debug!("{} pattern {} matches nothing", key, pattern);
                unmatched.push(pattern);
            }
        }
    }

    if !unmatched.is_empty() {
        report.record(categories::NOT_IN_REPOSITORY, sort_details(unmatched));
    }
}
