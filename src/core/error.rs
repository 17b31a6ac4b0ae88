//! Fatal error types for a validation run.
//!
//! Only conditions that abort the whole run live here. Everything below this
//! tier is recorded into a [`crate::validation::Report`] instead.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("{} is empty", path.display())]
    EmptyInput { path: PathBuf },

    #[error("syntax error in {}: {message}", path.display())]
    Syntax { path: PathBuf, message: String },

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ValidatorError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error came from the descriptor contents rather than the filesystem
    pub fn is_descriptor_error(&self) -> bool {
        matches!(self, Self::EmptyInput { .. } | Self::Syntax { .. })
    }
}

pub type ValidatorResult<T> = Result<T, ValidatorError>;
