//! CLI subcommands.

pub mod config;
pub mod report;
pub mod search;
pub mod show;
pub mod summary;

use std::fs;
use std::path::{Path, PathBuf};

use console::style;
use tracing::{info, warn};

use invdash_core::{DashConfig, Dashboard, Record};

/// Where the dataset and configuration come from.
pub struct Source<'a> {
    pub config: Option<&'a Path>,
    pub input: Option<&'a Path>,
}

impl Source<'_> {
    /// The config file this invocation reads and writes.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .map(Path::to_path_buf)
            .unwrap_or_else(default_config_path)
    }
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text
    Text,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("invdash")
        .join("config.json")
}

/// Load the explicit config file, else the default one if present, else defaults.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<DashConfig> {
    let config = match path {
        Some(path) => DashConfig::from_file(path)?,
        None => {
            let default_path = default_config_path();
            if default_path.exists() {
                DashConfig::from_file(&default_path)?
            } else {
                DashConfig::default()
            }
        }
    };

    config.validate()?;
    Ok(config)
}

/// Load configuration and the dashboard for a data command.
///
/// An unreadable CSV degrades to an empty dashboard with a warning, the
/// same as the browser view.
pub fn open(source: &Source<'_>) -> anyhow::Result<(DashConfig, Dashboard)> {
    let config = load_config(source.config)?;

    let dashboard = match source.input {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Input file not found: {}", path.display());
            }
            info!("Loading invoices from {}", path.display());
            let data = fs::read(path)?;
            Dashboard::from_bytes(&data, config.load.policy)
        }
        None => {
            info!("Loading embedded invoice dataset");
            Dashboard::embedded()
        }
    };

    if let Some(e) = dashboard.load_error() {
        warn!("Showing empty dataset after load failure");
        eprintln!(
            "{} Could not load invoices: {}",
            style("⚠").yellow(),
            e
        );
    }

    Ok((config, dashboard))
}

/// Write records as CSV using the dataset's column order.
pub fn records_csv<'a>(
    headers: &[String],
    records: impl IntoIterator<Item = &'a Record>,
) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(headers)?;
    for record in records {
        wtr.write_record(headers.iter().map(|h| record.value(h)))?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}
