//! Command modules for CLI

pub mod validate;
pub mod version;

use clap::Subcommand;

#[derive(Debug, Subcommand)]
#[command(about = "pantheon-lint commands")]
pub enum Commands {
    /// Validate the descriptor and the attribute files its variants reference
    #[command(about = "Validate pantheon2.yml and the attribute files it references")]
    Validate(validate::ValidateArgs),

    /// Show version information
    #[command(about = "Show version information")]
    Version(version::VersionArgs),
}
