//! # pantheon-lint
//!
//! Pre-flight validation for `pantheon2.yml` site descriptors and the
//! attribute files their variants point at.
//!
//! ## Architecture
//!
//! A validation run:
//! - loads the descriptor (an empty file or invalid YAML aborts the run)
//! - classifies the required top-level keys as missing, empty or satisfied
//! - walks the `variants` section, checking keys, values and paths
//! - strips comments and code blocks from each qualifying attribute file
//!   and runs the content checks over what remains
//! - checks that `assemblies` and `modules` patterns match files
//!
//! Every violation below the fatal tier lands in a [`Report`], rendered once
//! at the end.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pantheon_lint::{DescriptorValidator, ValidatorConfig};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = ValidatorConfig::for_repository(Path::new("."));
//!     let validator = DescriptorValidator::new(config);
//!
//!     let keys = validator.check_required_keys()?;
//!     if keys.is_clean() {
//!         let report = validator.validate()?;
//!         report.render()?;
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod validation;

pub use core::{
    load_or_fail, resolve_descriptor_file, Document, Node, Scalar, ValidatorConfig,
    ValidatorError, ValidatorResult,
};
pub use validation::{
    clean, find_missing_and_empty, ContentCheck, DescriptorValidator, KeyFindings, Report,
    VariantChecker, VariantOutcome,
};

/// Version of the validator
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging (safe for testing).
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug output when
/// `verbose` is true.
pub fn init_logging(verbose: bool) {
    // Only initialize logging once
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        use tracing_subscriber::EnvFilter;

        let default_directive = if verbose {
            "pantheon_lint=debug"
        } else {
            "pantheon_lint=warn"
        };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into());

        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish();

        // This will fail silently if already initialized
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}
