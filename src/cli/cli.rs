//! Main CLI application structure

use clap::Parser;

use crate::cli::commands::{validate, version, Commands};
use crate::cli::error::CliResult;

/// pantheon-lint - Validate Pantheon site descriptors before a build
#[derive(Debug, Parser)]
#[command(name = "pantheon-lint")]
#[command(version = pantheon_lint::VERSION)]
#[command(about = "pantheon-lint - Validate pantheon2.yml before a Pantheon build")]
#[command(long_about = "pantheon-lint checks a pantheon2.yml descriptor and the attribute files \
                         its variants point at, then prints every problem it found.\n\n\
                         The descriptor is resolved using this priority:\n\
                         1. --file, when given\n\
                         2. descriptor from .pantheon-lint.toml (nearest parent directory)\n\
                         3. Walk up the directory tree to find pantheon2.yml\n\n\
                         Exit status: 0 when the run completes (violations included), \
                         2 when the descriptor is empty, unparseable or missing required keys, \
                         1 for any other error.\n\n\
                         Examples:\n\
                           pantheon-lint validate                    # Validate the nearest pantheon2.yml\n\
                           pantheon-lint validate --file site.yml    # Validate a specific descriptor")]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(self) -> CliResult<()> {
        pantheon_lint::init_logging(self.verbose);

        match self.command {
            Commands::Validate(args) => validate::execute_validate(args, self.verbose),
            Commands::Version(args) => version::execute_version(args),
        }
    }
}
