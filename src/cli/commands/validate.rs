//! Validate command implementation

use crate::cli::config_file::load_config;
use crate::cli::error::{CliError, CliResult};
use crate::cli::utils::messages;
use clap::Args;
use pantheon_lint::core::resolve_descriptor_file;
use pantheon_lint::{DescriptorValidator, ValidatorConfig, ValidatorError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Validate pantheon2.yml and the attribute files it references
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Descriptor to validate instead of the discovered one
    #[arg(short, long, help = "Path to the descriptor (default: nearest pantheon2.yml)")]
    pub file: Option<PathBuf>,

    /// Skip checking that assemblies/modules patterns match files
    #[arg(long, help = "Do not check that assemblies and modules patterns match files")]
    pub no_content_inventory: bool,
}

/// Find the descriptor to validate: `--file` wins, then discovery from `current_dir`
fn resolve_descriptor(args: &ValidateArgs, current_dir: &Path) -> CliResult<PathBuf> {
    if let Some(file) = &args.file {
        if !file.is_file() {
            return Err(CliError::Config(format!(
                "Descriptor file not found: {}",
                file.display()
            )));
        }
        return Ok(file.clone());
    }

    let (config, _) = load_config(current_dir)?;
    let location = resolve_descriptor_file(current_dir, &config.descriptor);
    if !location.found {
        return Err(CliError::DescriptorNotFound {
            name: config.descriptor,
            searched_from: current_dir.to_path_buf(),
        });
    }
    Ok(location.path)
}

fn print_key_list(descriptor_name: &str, heading: &str, keys: &[String]) {
    println!("\nYour {} {}:\n", descriptor_name, heading);
    for key in keys {
        println!("\t{}", key);
    }
    println!("\nTotal: {}", keys.len());
    println!(
        "\nPlease fix your {} to validate the files; exiting...",
        descriptor_name
    );
}

fn explain_fatal(error: CliError) -> CliError {
    if let CliError::Validator(ValidatorError::Syntax { .. }) = &error {
        eprintln!(
            "{}",
            messages::info("Fix the syntax error and try again; a YAML linter can locate it.")
        );
    }
    error
}

pub fn execute_validate(args: ValidateArgs, verbose: bool) -> CliResult<()> {
    let current_dir = std::env::current_dir()
        .map_err(|e| CliError::Config(format!("Failed to get current directory: {}", e)))?;
    let descriptor_path = resolve_descriptor(&args, &current_dir)?;
    let descriptor_name = descriptor_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| descriptor_path.display().to_string());

    let config = ValidatorConfig::for_descriptor(&descriptor_path)
        .with_content_inventory(!args.no_content_inventory);
    if verbose {
        eprintln!(
            "{}",
            messages::info(&format!("Validating {}", descriptor_path.display()))
        );
    }
    debug!("Repository root: {}", config.repository_root.display());

    let validator = DescriptorValidator::new(config);

    let findings = validator
        .check_required_keys()
        .map_err(|e| explain_fatal(e.into()))?;
    if !findings.missing.is_empty() {
        print_key_list(
            &descriptor_name,
            "is missing the following keys",
            &findings.missing,
        );
        return Err(CliError::MissingKeys(findings.missing));
    }
    if !findings.empty.is_empty() {
        print_key_list(
            &descriptor_name,
            "has the following keys with no value",
            &findings.empty,
        );
        return Err(CliError::EmptyKeys(findings.empty));
    }

    let report = validator.validate().map_err(|e| explain_fatal(e.into()))?;
    if report.is_empty() {
        println!(
            "{}",
            messages::ok(&format!("{} passed validation", descriptor_name))
        );
    } else {
        println!(
            "\n{}",
            messages::warning(&format!("Your {} has the following errors:", descriptor_name))
        );
        report.render()?;
    }

    Ok(())
}
