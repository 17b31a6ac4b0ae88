//! Version command implementation

use crate::cli::error::CliResult;
use clap::Args;

/// Display pantheon-lint version
#[derive(Debug, Args)]
pub struct VersionArgs {}

pub fn execute_version(_args: VersionArgs) -> CliResult<()> {
    println!("pantheon-lint {}", pantheon_lint::VERSION);
    Ok(())
}
