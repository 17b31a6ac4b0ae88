//! Configuration file parsing for the pantheon-lint CLI

use crate::cli::error::{CliError, CliResult};
use pantheon_lint::core::{find_upwards, CONFIG_FILE_NAME, DEFAULT_DESCRIPTOR_NAME};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Contents of `.pantheon-lint.toml`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LintConfigFile {
    /// Descriptor file name to look for instead of pantheon2.yml
    #[serde(default = "default_descriptor_name")]
    pub descriptor: String,
}

fn default_descriptor_name() -> String {
    DEFAULT_DESCRIPTOR_NAME.to_string()
}

impl Default for LintConfigFile {
    fn default() -> Self {
        Self {
            descriptor: default_descriptor_name(),
        }
    }
}

/// Parse a config file
pub fn load_config_file(path: &Path) -> CliResult<LintConfigFile> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| CliError::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Load `.pantheon-lint.toml` from `current_dir` or the nearest parent that has one.
///
/// Returns the config and the file it came from; defaults when there is none.
pub fn load_config(current_dir: &Path) -> CliResult<(LintConfigFile, Option<PathBuf>)> {
    match find_upwards(current_dir, CONFIG_FILE_NAME) {
        Some(path) => {
            debug!("Using config file {}", path.display());
            Ok((load_config_file(&path)?, Some(path)))
        }
        None => Ok((LintConfigFile::default(), None)),
    }
}
