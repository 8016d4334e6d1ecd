//! Config command implementation.
//!
//! Manages persistent display settings.

use anyhow::Result;
use clap::{Args, Subcommand};
use std::collections::BTreeMap;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{print_info, print_output, print_success, KeyValue, OutputContext};
use crate::settings::{config_path, ConfigKey, ConfigStore};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// List available configuration keys
    List,

    /// Reset configuration to defaults
    Reset(ResetArgs),

    /// Show configuration file location
    Path,
}

/// Arguments for get subcommand.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

/// Arguments for set subcommand.
#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

/// Arguments for reset subcommand.
#[derive(Args, Debug)]
pub struct ResetArgs {
    /// Reset all settings (not just one)
    #[arg(long, conflicts_with = "key")]
    pub all: bool,

    /// Specific key to reset
    pub key: Option<String>,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &OutputContext) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(ctx),
        ConfigCommand::Get(get_args) => execute_get(&get_args, ctx.format),
        ConfigCommand::Set(set_args) => execute_set(set_args, ctx),
        ConfigCommand::List => execute_list(ctx),
        ConfigCommand::Reset(reset_args) => execute_reset(reset_args, ctx),
        ConfigCommand::Path => execute_path(),
    }
}

/// Show current configuration.
fn execute_show(ctx: &OutputContext) -> Result<()> {
    let store = ConfigStore::load()?;

    match ctx.format {
        OutputFormat::Json => {
            let output: BTreeMap<&str, &str> = ConfigKey::all()
                .iter()
                .map(|key| (key.as_str(), store.value(*key)))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}={}", key.as_str(), store.value(*key));
            }
        }
        format => {
            let results: Vec<KeyValue> = ConfigKey::all()
                .iter()
                .map(|key| {
                    let marker = if store.is_set(*key) { "" } else { " (default)" };
                    KeyValue::new(key.as_str(), format!("{}{marker}", store.value(*key)))
                })
                .collect();
            if format == OutputFormat::Table {
                ctx.header("Current Configuration");
            }
            print_output(&results, format)?;
        }
    }

    Ok(())
}

/// Get a configuration value.
fn execute_get(args: &GetArgs, format: OutputFormat) -> Result<()> {
    let store = ConfigStore::load()?;
    let key = ConfigKey::parse(&args.key)?;
    let value = store.value(key);

    match format {
        OutputFormat::Table | OutputFormat::Csv => {
            println!("{}: {}", key.as_str(), value);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "key": key.as_str(),
                "value": value
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => {
            println!("{}", value);
        }
    }

    Ok(())
}

/// Set a configuration value.
fn execute_set(args: SetArgs, ctx: &OutputContext) -> Result<()> {
    let key = ConfigKey::parse(&args.key)?;
    key.validate(&args.value)?;

    let mut store = ConfigStore::load()?;
    store.set(key, args.value.clone());
    store.save()?;

    if !ctx.quiet {
        print_success(&format!("Set {} = {}", key.as_str(), args.value));
    }
    Ok(())
}

/// List available configuration keys.
fn execute_list(ctx: &OutputContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let output: Vec<_> = ConfigKey::all()
                .iter()
                .map(|key| {
                    serde_json::json!({
                        "key": key.as_str(),
                        "description": key.description(),
                        "default": key.default_value()
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Minimal => {
            for key in ConfigKey::all() {
                println!("{}", key.as_str());
            }
        }
        format => {
            let results: Vec<KeyValue> = ConfigKey::all()
                .iter()
                .map(|key| {
                    KeyValue::new(
                        key.as_str(),
                        format!("{} (default: {})", key.description(), key.default_value()),
                    )
                })
                .collect();
            if format == OutputFormat::Table {
                ctx.header("Available Configuration Keys");
            }
            print_output(&results, format)?;
        }
    }

    Ok(())
}

/// Reset configuration.
fn execute_reset(args: ResetArgs, ctx: &OutputContext) -> Result<()> {
    let mut store = ConfigStore::load()?;

    let message = if args.all {
        store.clear();
        "Reset all configuration to defaults".to_string()
    } else if let Some(key_str) = args.key {
        let key = ConfigKey::parse(&key_str)?;
        store.remove(key);
        format!("Reset {} to default ({})", key.as_str(), key.default_value())
    } else {
        return Err(CliError::MissingArgument("a key to reset, or --all".to_string()).into());
    };

    store.save()?;
    if !ctx.quiet {
        print_success(&message);
    }
    Ok(())
}

/// Show configuration file path.
fn execute_path() -> Result<()> {
    let path = config_path()?;
    print_info(&format!("Config file: {}", path.display()));
    if path.exists() {
        print_info("Status: exists");
    } else {
        print_info("Status: not created yet (using defaults)");
    }
    Ok(())
}
