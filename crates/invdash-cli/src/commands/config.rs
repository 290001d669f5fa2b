//! Config command - inspect and edit the dashboard configuration file.
//!
//! Every subcommand works on the file named by the global `--config`, or on
//! the per-user default when none is given.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use invdash_core::DashConfig;

use super::Source;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show current configuration
    Show,

    /// Write a configuration file with default values
    Init {
        /// Write here instead of the active config path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite existing file
        #[arg(long)]
        force: bool,
    },

    /// Get a value by dotted key (e.g., "display.currency_symbol")
    Get { key: String },

    /// Set a value by dotted key; bare words are stored as strings
    Set { key: String, value: String },

    /// Show configuration file path
    Path,
}

pub fn run(args: ConfigArgs, source: &Source<'_>) -> anyhow::Result<()> {
    let path = source.config_path();

    match args.command {
        ConfigCommand::Show => {
            if !path.exists() {
                eprintln!(
                    "{} No config file at {}, showing defaults.",
                    style("ℹ").blue(),
                    path.display()
                );
            }
            println!("{}", serde_json::to_string_pretty(&stored(&path)?)?);
        }
        ConfigCommand::Init { output, force } => init(&output.unwrap_or(path), force)?,
        ConfigCommand::Get { key } => {
            let json = serde_json::to_value(stored(&path)?)?;
            println!("{}", serde_json::to_string_pretty(lookup(&json, &key)?)?);
        }
        ConfigCommand::Set { key, value } => set(&path, &key, &value)?,
        ConfigCommand::Path => {
            println!("Configuration file: {}", path.display());
            if path.exists() {
                println!("Status: {}", style("exists").green());
            } else {
                println!("Status: {}", style("not created").yellow());
            }
        }
    }

    Ok(())
}

/// The config stored at `path`, or defaults if the file does not exist yet.
fn stored(path: &Path) -> anyhow::Result<DashConfig> {
    if path.exists() {
        Ok(DashConfig::from_file(path)?)
    } else {
        Ok(DashConfig::default())
    }
}

fn write(config: &DashConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;
    Ok(())
}

fn init(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    write(&DashConfig::default(), path)?;
    println!(
        "{} Created configuration file at {}",
        style("✓").green(),
        path.display()
    );
    Ok(())
}

/// Follow a dotted key through the JSON form of the config.
fn lookup<'a>(json: &'a Value, key: &str) -> anyhow::Result<&'a Value> {
    key.split('.')
        .try_fold(json, |node, part| node.get(part))
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))
}

fn set(path: &Path, key: &str, raw: &str) -> anyhow::Result<()> {
    let value: Value =
        serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));

    let mut json = serde_json::to_value(stored(path)?)?;
    let (section, field) = key
        .rsplit_once('.')
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;

    let slot = json
        .get_mut(section)
        .and_then(|node| node.get_mut(field))
        .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))?;
    *slot = value.clone();

    let config: DashConfig = serde_json::from_value(json)?;
    config.validate()?;
    write(&config, path)?;

    println!("{} Set {} = {}", style("✓").green(), key, value);
    Ok(())
}
