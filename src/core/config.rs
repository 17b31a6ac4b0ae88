//! Validator configuration

use crate::core::project::DEFAULT_DESCRIPTOR_NAME;
use std::path::{Path, PathBuf};

/// Keys every descriptor must define at the top level
pub const REQUIRED_TOP_LEVEL_KEYS: &[&str] = &[
    "server",
    "repository",
    "variants",
    "assemblies",
    "modules",
    "resources",
];

/// Keys every entry under `variants` must define
pub const REQUIRED_VARIANT_KEYS: &[&str] = &["name", "path", "canonical"];

/// Configuration for one validation run
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    /// Directory that relative paths in the descriptor resolve against
    pub repository_root: PathBuf,

    /// Path to the descriptor file
    pub descriptor_path: PathBuf,

    pub required_top_level_keys: Vec<String>,

    pub required_variant_keys: Vec<String>,

    /// Check that every assemblies/modules pattern matches at least one file
    pub content_inventory: bool,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self::for_repository(Path::new("."))
    }
}

impl ValidatorConfig {
    /// Configuration for the default descriptor inside `repository_root`
    pub fn for_repository(repository_root: &Path) -> Self {
        Self::for_descriptor(&repository_root.join(DEFAULT_DESCRIPTOR_NAME))
    }

    /// Configuration for an explicit descriptor; its directory becomes the repository root
    pub fn for_descriptor(descriptor_path: &Path) -> Self {
        let repository_root = descriptor_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Self {
            repository_root,
            descriptor_path: descriptor_path.to_path_buf(),
            required_top_level_keys: REQUIRED_TOP_LEVEL_KEYS
                .iter()
                .map(|k| k.to_string())
                .collect(),
            required_variant_keys: REQUIRED_VARIANT_KEYS.iter().map(|k| k.to_string()).collect(),
            content_inventory: true,
        }
    }

    pub fn with_content_inventory(mut self, enabled: bool) -> Self {
        self.content_inventory = enabled;
        self
    }
}
