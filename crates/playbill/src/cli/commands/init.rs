//! Init command

use std::path::PathBuf;

use clap::Args;
use console::style;
use dialoguer::Confirm;
use tracing::info;
use uuid::Uuid;

use playbill_core::descriptor::defaults::{descriptor_template, DEFAULT_DESCRIPTOR_TOML};

use crate::cli::Cli;

/// Initialize a new application descriptor
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Application identifier (reverse-domain)
    #[arg(long, default_value = "com.example.app")]
    pub id: String,

    /// Application display name
    #[arg(long)]
    pub name: Option<String>,

    /// Force overwrite existing descriptor
    #[arg(short, long)]
    pub force: bool,

    /// Use defaults without prompting
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Output file path
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(id = self.id.as_str(), force = self.force, "executing init command");
        let cwd = std::env::current_dir()?;
        let descriptor_path = self
            .output
            .clone()
            .unwrap_or_else(|| cwd.join(DEFAULT_DESCRIPTOR_TOML));

        // Check if a descriptor already exists
        if descriptor_path.exists() && !self.force {
            if self.yes {
                anyhow::bail!(
                    "Descriptor already exists at {}. Use --force to overwrite.",
                    descriptor_path.display()
                );
            }

            let overwrite = Confirm::new()
                .with_prompt(format!(
                    "Descriptor already exists at {}. Overwrite?",
                    descriptor_path.display()
                ))
                .default(false)
                .interact()?;

            if !overwrite {
                println!("{}", style("Aborted.").yellow());
                return Ok(());
            }
        }

        // Derive the display name from the last id segment unless given
        let name = match &self.name {
            Some(name) => name.clone(),
            None => self
                .id
                .rsplit('.')
                .next()
                .unwrap_or(&self.id)
                .to_string(),
        };

        // The GUID is minted once here and stays fixed for the app's lifetime
        let guid = Uuid::new_v4().to_string();
        let content = descriptor_template(&self.id, &name, &guid);
        std::fs::write(&descriptor_path, &content)?;

        if !cli.quiet {
            println!(
                "{} descriptor at {}",
                style("Created").green().bold(),
                style(descriptor_path.display()).cyan()
            );
            println!("  App ID: {}", style(&self.id).bold());
            println!("  GUID:   {}", style(&guid).dim());
        }

        Ok(())
    }
}
