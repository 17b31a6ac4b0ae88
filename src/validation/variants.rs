//! Validation of the `variants` section.
//!
//! The checker is a short-circuiting state machine. Each terminal state is a
//! [`VariantOutcome`] variant:
//!
//! 1. `variants` null (or absent, or not a sequence): report every required
//!    variant key as missing a value and stop.
//! 2. Any entry lacks a required key: report the set of such keys and stop.
//!    No entry gets its values checked in that case.
//! 3. Otherwise check the *first* entry's values, flag and path, then stop.
//!    Later entries are never inspected.
//! 4. Only an empty sequence reaches the `resources` check.
//!
//! The violation accumulators live for the whole run rather than per entry.

use crate::core::document::{Document, Node};
use crate::core::project::resolve_in_repository;
use crate::validation::categories;
use crate::validation::report::{sort_details, Report};
use crate::validation::resources;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const VARIANTS_KEY: &str = "variants";
const RESOURCES_KEY: &str = "resources";
const CANONICAL_KEY: &str = "canonical";
const PATH_KEY: &str = "path";

/// Detail reported for a canonical flag that is not `true`. It is this
/// literal, not an echo of the key.
pub const CANONICAL_SENTINEL: &str = "cannonical";

/// A variant path that exists on disk and is handed to content checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeFile {
    /// Path as written in the descriptor
    pub declared: String,

    /// Path resolved against the repository root
    pub resolved: PathBuf,
}

/// Terminal state of one variant check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantOutcome {
    /// `variants` had no usable value
    NoVariants,

    /// At least one entry lacked these keys; values were not checked
    KeysMissing(Vec<String>),

    /// The first entry was checked and the run stopped there
    FirstEntryChecked { attribute_files: Vec<AttributeFile> },

    /// The sequence was empty, so `resources` was checked instead
    ResourcesChecked,
}

impl VariantOutcome {
    /// Attribute files that qualified for preprocessing
    pub fn attribute_files(&self) -> &[AttributeFile] {
        match self {
            VariantOutcome::FirstEntryChecked { attribute_files } => attribute_files.as_slice(),
            _ => &[],
        }
    }
}

/// Run-scoped accumulators, one per violation kind
#[derive(Debug, Default)]
struct Accumulators {
    empty_keys: Vec<String>,
    not_true: Vec<String>,
    missing_paths: Vec<String>,
    existing_paths: Vec<AttributeFile>,
}

/// Checks the `variants` section of a descriptor
pub struct VariantChecker<'a> {
    repository_root: &'a Path,
    required_keys: &'a [String],
}

impl<'a> VariantChecker<'a> {
    pub fn new(repository_root: &'a Path, required_keys: &'a [String]) -> Self {
        Self {
            repository_root,
            required_keys,
        }
    }

    /// Check the descriptor's variants, recording violations into `report`
    pub fn check(&self, document: &Document, report: &mut Report) -> VariantOutcome {
        let entries = match document.get(VARIANTS_KEY).as_sequence() {
            Some(entries) => entries,
            None => {
                info!("No variants declared");
                report.record(
                    categories::VARIANT_VALUES_MISSING,
                    sort_details(self.required_keys.iter().cloned()),
                );
                return VariantOutcome::NoVariants;
            }
        };

        let missing = self.missing_keys(entries);
        if !missing.is_empty() {
            info!("Variant entries lack keys {:?}; skipping value checks", missing);
            report.record(categories::VARIANT_KEYS_MISSING, missing.clone());
            return VariantOutcome::KeysMissing(missing);
        }

        let mut acc = Accumulators::default();
        if let Some(first) = entries.first() {
            self.check_entry(first, &mut acc, report);
            if entries.len() > 1 {
                debug!(
                    "Stopping after the first variant; {} more not checked",
                    entries.len() - 1
                );
            }
            return VariantOutcome::FirstEntryChecked {
                attribute_files: acc.existing_paths,
            };
        }

        resources::check_resources(self.repository_root, document.get(RESOURCES_KEY), report);
        VariantOutcome::ResourcesChecked
    }

    /// Required keys absent from at least one entry, sorted and de-duplicated
    fn missing_keys(&self, entries: &[Node]) -> Vec<String> {
        let missing: Vec<&String> = self
            .required_keys
            .iter()
            .filter(|key| entries.iter().any(|entry| entry.get(key).is_missing()))
            .collect();
        sort_details(missing.into_iter().cloned())
    }

    fn check_entry(&self, entry: &Node, acc: &mut Accumulators, report: &mut Report) {
        for key in self.required_keys {
            if entry.get(key).is_null() {
                acc.empty_keys.push(key.clone());
            }
        }
        if !acc.empty_keys.is_empty() {
            report.record(categories::KEYS_EMPTY, sort_details(acc.empty_keys.clone()));
        }

        let canonical = entry.get(CANONICAL_KEY);
        if canonical.has_value() && !canonical.is_true() {
            acc.not_true.push(CANONICAL_SENTINEL.to_string());
        }
        if !acc.not_true.is_empty() {
            report.record(categories::KEY_NOT_TRUE, sort_details(acc.not_true.clone()));
        }

        let path = entry.get(PATH_KEY);
        if path.has_value() {
            match path.as_text() {
                Some(declared) => {
                    let resolved = resolve_in_repository(self.repository_root, &declared);
                    if resolved.exists() {
                        debug!("Attribute file {} exists", resolved.display());
                        acc.existing_paths.push(AttributeFile { declared, resolved });
                    } else {
                        acc.missing_paths.push(declared);
                    }
                }
                None => report.record(categories::KEYS_WRONG_TYPE, vec![PATH_KEY.to_string()]),
            }
        }
        if !acc.missing_paths.is_empty() {
            report.record(categories::NOT_IN_REPOSITORY, acc.missing_paths.clone());
        }
    }
}
