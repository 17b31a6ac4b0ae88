//! CLI tests module

#![allow(clippy::all, clippy::unwrap_used, clippy::expect_used)]

pub mod snapshot_helpers;
pub mod test_helpers;
pub mod validate_e2e_tests;
