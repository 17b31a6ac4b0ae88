//! Core descriptor model, loading and configuration

pub mod config;
pub mod document;
pub mod error;
pub mod project;

// Re-export main types for convenience
pub use config::{ValidatorConfig, REQUIRED_TOP_LEVEL_KEYS, REQUIRED_VARIANT_KEYS};
pub use document::{load_or_fail, Document, Node, Scalar};
pub use error::{ValidatorError, ValidatorResult};
pub use project::{
    find_upwards, resolve_descriptor_file, resolve_in_repository, DescriptorLocation,
    CONFIG_FILE_NAME, DEFAULT_DESCRIPTOR_NAME,
};
