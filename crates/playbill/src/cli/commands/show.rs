//! Show command

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use console::style;
use tracing::info;

use playbill_core::descriptor::{load_descriptor, load_from_dir, validate_descriptor};
use playbill_core::{AppInfoProvider, DeployType, StaticAppInfo, DEPLOY_TYPE_PROPERTY};
use playbill_properties::{MemoryPropertyStore, PropertyStore};

use crate::cli::{output, Cli, OutputFormat};
use crate::exit_codes;

/// Deployment type for the resolved metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DeployArg {
    /// Local developer build
    #[default]
    Development,
    /// Build distributed to testers
    Test,
    /// Store/production build
    Production,
}

impl From<DeployArg> for DeployType {
    fn from(arg: DeployArg) -> Self {
        match arg {
            DeployArg::Development => DeployType::Development,
            DeployArg::Test => DeployType::Test,
            DeployArg::Production => DeployType::Production,
        }
    }
}

/// Show the resolved application metadata
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Path to the descriptor file (searched from the working directory
    /// if omitted)
    #[arg(long)]
    pub descriptor: Option<PathBuf>,

    /// Deployment type to resolve with
    #[arg(long, value_enum, default_value = "development")]
    pub deploy_type: DeployArg,
}

impl ShowCommand {
    /// Execute the show command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(deploy_type = ?self.deploy_type, "executing show command");

        let descriptor = match &self.descriptor {
            Some(path) => load_descriptor(path)?,
            None => load_from_dir(&std::env::current_dir()?)?.0,
        };

        let report = validate_descriptor(&descriptor);
        if !report.is_valid() {
            for issue in report.errors() {
                output::error(&issue.to_string());
            }
            std::process::exit(exit_codes::VALIDATION_ERROR);
        }

        let deploy_type: DeployType = self.deploy_type.into();
        let store = MemoryPropertyStore::new();
        let provider = StaticAppInfo::install(descriptor.resolve(), deploy_type, &store);

        match cli.format {
            OutputFormat::Json => {
                let mut properties = serde_json::Map::new();
                properties.insert(
                    DEPLOY_TYPE_PROPERTY.to_string(),
                    serde_json::Value::String(store.get_string(DEPLOY_TYPE_PROPERTY, "")),
                );
                let json = serde_json::json!({
                    "app": provider.info(),
                    "deploy_type": provider.deploy_type().as_str(),
                    "properties": properties,
                });
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
            OutputFormat::Text => {
                println!("{}", output::header(provider.name()));
                println!("{}", output::key_value("id", provider.id()));
                println!("{}", output::key_value("version", provider.version()));
                println!("{}", output::key_value("publisher", provider.publisher()));
                println!("{}", output::key_value("url", provider.url()));
                println!("{}", output::key_value("copyright", provider.copyright()));
                println!("{}", output::key_value("description", provider.description()));
                println!("{}", output::key_value("icon", provider.icon()));
                println!(
                    "{}",
                    output::key_value("analytics", &provider.analytics_enabled().to_string())
                );
                println!("{}", output::key_value("guid", provider.guid()));
                println!(
                    "{}",
                    output::key_value("fullscreen", &provider.fullscreen().to_string())
                );
                println!(
                    "{}",
                    output::key_value("nav bar hidden", &provider.nav_bar_hidden().to_string())
                );
                println!();
                println!(
                    "  {} = {}",
                    style(DEPLOY_TYPE_PROPERTY).dim(),
                    style(store.get_string(DEPLOY_TYPE_PROPERTY, "")).green()
                );
            }
        }

        Ok(())
    }
}
