//! Category messages used in reports.
//!
//! Each message is rendered after "FAIL: the following", so it reads as the
//! tail of that sentence.

pub const VARIANT_VALUES_MISSING: &str = "values are missing under 'variants'";
pub const VARIANT_KEYS_MISSING: &str = "keys are missing under 'variants'";
pub const KEYS_EMPTY: &str = "keys are empty";
pub const KEY_NOT_TRUE: &str = "key is not set to True";
pub const KEYS_WRONG_TYPE: &str = "keys have a value of the wrong type";
pub const NOT_IN_REPOSITORY: &str = "files or directories do not exist in your repository";
pub const DIRECTORY_EMPTY: &str = "directory is empty";
pub const ATTRIBUTE_FILE_UNREADABLE: &str = "attribute files could not be read";
pub const ICONS_ATTRIBUTE: &str = "icons attribute";
pub const TOC_ATTRIBUTE: &str = "toc attribute";
