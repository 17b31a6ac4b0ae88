//! Descriptor and attribute file validation

pub mod categories;
pub mod content_checks;
pub mod descriptor_validator;
pub mod inventory;
pub mod preprocess;
pub mod report;
mod resources;
pub mod schema;
pub mod variants;


// Re-export main types
pub use content_checks::{
    default_content_checks, ContentCheck, IconsAttributeCheck, TocAttributeCheck,
};
pub use descriptor_validator::DescriptorValidator;
pub use preprocess::clean;
pub use report::{sort_details, Report, ViolationCategory};
pub use schema::{find_missing_and_empty, KeyFindings};
pub use variants::{AttributeFile, VariantChecker, VariantOutcome, CANONICAL_SENTINEL};
