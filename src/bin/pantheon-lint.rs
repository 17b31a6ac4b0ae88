//! pantheon-lint CLI binary entry point

#[path = "../cli/mod.rs"]
mod cli;

use clap::Parser;
use cli::utils::messages;
use cli::Cli;

fn main() {
    // Parse CLI arguments
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Handle help and version requests
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                let _ = e.print();
                std::process::exit(0);
            } else {
                let _ = e.print();
                std::process::exit(1);
            }
        }
    };

    match cli.execute() {
        Ok(()) => {
            std::process::exit(0);
        }
        Err(e) => {
            // Key-list errors already printed their details to stdout
            eprintln!("{}", messages::error(&e.to_string()));
            std::process::exit(e.exit_code());
        }
    }
}
