//! Repository root and descriptor file resolution

use std::path::{Path, PathBuf};

/// Default name of the site descriptor
pub const DEFAULT_DESCRIPTOR_NAME: &str = "pantheon2.yml";

/// Name of the optional per-repository configuration file
pub const CONFIG_FILE_NAME: &str = ".pantheon-lint.toml";

/// Result of looking for a descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorLocation {
    /// Path to the descriptor (where it would be if not found)
    pub path: PathBuf,
    /// Whether the descriptor file exists
    pub found: bool,
}

impl DescriptorLocation {
    /// Directory that relative paths in the descriptor resolve against
    pub fn repository_root(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Resolve the descriptor starting from `start_path` and walking up.
///
/// The first directory that contains `file_name` wins. When no directory
/// does, the returned location points at `start_path/file_name` with
/// `found == false`.
pub fn resolve_descriptor_file(start_path: &Path, file_name: &str) -> DescriptorLocation {
    match find_upwards(start_path, file_name) {
        Some(path) => DescriptorLocation { path, found: true },
        None => DescriptorLocation {
            path: start_path.join(file_name),
            found: false,
        },
    }
}

/// Resolve a path written in the descriptor against the repository root
pub fn resolve_in_repository(repository_root: &Path, declared: &str) -> PathBuf {
    let declared = Path::new(declared);
    if declared.is_absolute() {
        declared.to_path_buf()
    } else {
        repository_root.join(declared)
    }
}

/// First `file_name` found in `start_path` or any of its ancestors
pub fn find_upwards(start_path: &Path, file_name: &str) -> Option<PathBuf> {
    start_path
        .ancestors()
        .map(|dir| dir.join(file_name))
        .find(|candidate| candidate.is_file())
}
