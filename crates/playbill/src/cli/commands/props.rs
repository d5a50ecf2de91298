//! Props command

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use console::style;
use tracing::info;

use playbill_properties::{FilePropertyStore, PropertyStore, PropertyValue};

use crate::cli::{output, Cli, OutputFormat};
use crate::exit_codes;

/// Inspect and edit a property store
#[derive(Debug, Args)]
pub struct PropsCommand {
    /// Path to the property store file
    #[arg(long, default_value = ".playbill/properties.json")]
    pub store: PathBuf,

    #[command(subcommand)]
    pub command: PropsSubcommand,
}

/// Property store subcommands
#[derive(Debug, Subcommand)]
pub enum PropsSubcommand {
    /// Print the value stored under a key
    Get {
        /// Property key
        key: String,
    },

    /// Store a value under a key
    Set {
        /// Property key
        key: String,

        /// Value to store
        value: String,

        /// Value type to parse as
        #[arg(long, value_enum, default_value = "string")]
        value_type: ValueType,
    },

    /// Remove a key
    Remove {
        /// Property key
        key: String,
    },

    /// List all keys and values
    List,
}

/// Type a property value is parsed as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ValueType {
    /// Boolean flag
    Bool,
    /// Signed integer
    Int,
    /// Floating point number
    Double,
    /// UTF-8 string
    #[default]
    String,
    /// Comma-separated list of strings
    List,
}

impl ValueType {
    fn parse(&self, raw: &str) -> anyhow::Result<PropertyValue> {
        let value = match self {
            ValueType::Bool => PropertyValue::Bool(raw.parse()?),
            ValueType::Int => PropertyValue::Int(raw.parse()?),
            ValueType::Double => PropertyValue::Double(raw.parse()?),
            ValueType::String => PropertyValue::String(raw.to_string()),
            ValueType::List => {
                PropertyValue::List(raw.split(',').map(|s| s.trim().to_string()).collect())
            }
        };
        Ok(value)
    }
}

impl PropsCommand {
    /// Execute the props command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(store = %self.store.display(), "executing props command");

        let store = match FilePropertyStore::open(&self.store) {
            Ok(store) => store,
            Err(e) => {
                output::error(&e.to_string());
                std::process::exit(exit_codes::PROPERTY_ERROR);
            }
        };

        match &self.command {
            PropsSubcommand::Get { key } => match store.get(key) {
                Some(value) => match cli.format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&value)?);
                    }
                    OutputFormat::Text => println!("{}", value),
                },
                None => {
                    output::error(&format!("No property named '{}'", key));
                    std::process::exit(exit_codes::PROPERTY_ERROR);
                }
            },

            PropsSubcommand::Set {
                key,
                value,
                value_type,
            } => {
                let parsed = value_type.parse(value)?;
                store.set(key, parsed.clone());
                if !cli.quiet {
                    output::success(&format!("{} = {}", style(key).bold(), parsed));
                }
            }

            PropsSubcommand::Remove { key } => {
                if store.remove_property(key) {
                    if !cli.quiet {
                        output::success(&format!("Removed '{}'", key));
                    }
                } else {
                    output::warning(&format!("No property named '{}'", key));
                }
            }

            PropsSubcommand::List => match cli.format {
                OutputFormat::Json => {
                    let entries: serde_json::Map<String, serde_json::Value> = store
                        .keys()
                        .into_iter()
                        .filter_map(|k| {
                            store
                                .get(&k)
                                .and_then(|v| serde_json::to_value(v).ok().map(|v| (k, v)))
                        })
                        .collect();
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&serde_json::Value::Object(entries))?
                    );
                }
                OutputFormat::Text => {
                    let keys = store.keys();
                    if keys.is_empty() {
                        output::info("Property store is empty");
                    }
                    for key in keys {
                        if let Some(value) = store.get(&key) {
                            println!(
                                "{}",
                                output::key_value(&key, &format!("{} ({})", value, value.type_name()))
                            );
                        }
                    }
                }
            },
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_typed_values() {
        assert_eq!(
            ValueType::Bool.parse("true").unwrap(),
            PropertyValue::Bool(true)
        );
        assert_eq!(ValueType::Int.parse("-4").unwrap(), PropertyValue::Int(-4));
        assert_eq!(
            ValueType::Double.parse("2.5").unwrap(),
            PropertyValue::Double(2.5)
        );
        assert_eq!(
            ValueType::List.parse("a, b,c").unwrap(),
            PropertyValue::List(vec!["a".into(), "b".into(), "c".into()])
        );
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(ValueType::Bool.parse("yes").is_err());
        assert!(ValueType::Int.parse("1.5").is_err());
        assert!(ValueType::Double.parse("x").is_err());
    }
}
