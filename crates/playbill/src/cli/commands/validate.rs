//! Validate command

use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use playbill_core::descriptor::{load_descriptor, load_from_dir, validate_descriptor};

use crate::cli::{output, Cli, OutputFormat};
use crate::exit_codes;

/// Validate the application descriptor
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Path to the descriptor file (searched from the working directory
    /// if omitted)
    #[arg(long)]
    pub descriptor: Option<PathBuf>,

    /// Strict mode - treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

impl ValidateCommand {
    /// Execute the validate command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(strict = self.strict, "executing validate command");

        let (descriptor, path) = match &self.descriptor {
            Some(path) => (load_descriptor(path)?, path.clone()),
            None => load_from_dir(&std::env::current_dir()?)?,
        };

        let report = validate_descriptor(&descriptor);
        let failed = !report.is_valid() || (self.strict && !report.is_clean());

        match cli.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "descriptor": path,
                    "valid": !failed,
                    "errors": report
                        .errors()
                        .iter()
                        .map(|i| serde_json::json!({"field": i.field, "message": i.message}))
                        .collect::<Vec<_>>(),
                    "warnings": report
                        .warnings()
                        .iter()
                        .map(|i| serde_json::json!({"field": i.field, "message": i.message}))
                        .collect::<Vec<_>>(),
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    println!(
                        "{} {}",
                        style("Validating").cyan(),
                        style(path.display()).dim()
                    );
                }

                for issue in report.errors() {
                    output::error(&format!("{}: {}", issue.field, issue.message));
                }
                for issue in report.warnings() {
                    output::warning(&format!("{}: {}", issue.field, issue.message));
                }

                if failed {
                    output::error("Descriptor is not valid");
                } else if report.is_clean() {
                    output::success("Descriptor is valid");
                } else {
                    output::success("Descriptor is valid (with warnings)");
                }
            }
        }

        if failed {
            std::process::exit(exit_codes::VALIDATION_ERROR);
        }

        Ok(())
    }
}
