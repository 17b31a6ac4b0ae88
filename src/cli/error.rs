//! CLI-specific error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Validator(#[from] pantheon_lint::ValidatorError),

    #[error("{} not found in {} or any parent directory\n  Run this command from the directory that contains it, or pass --file", .name, .searched_from.display())]
    DescriptorNotFound { name: String, searched_from: PathBuf },

    #[error("descriptor is missing {} required key(s)", .0.len())]
    MissingKeys(Vec<String>),

    #[error("descriptor has {} required key(s) with no value", .0.len())]
    EmptyKeys(Vec<String>),
}

impl CliError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Validator(e) if e.is_descriptor_error() => 2,
            CliError::MissingKeys(_) | CliError::EmptyKeys(_) => 2,
            _ => 1,
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
