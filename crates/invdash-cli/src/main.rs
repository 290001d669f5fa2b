//! Terminal dashboard for the invoice database.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{config, report, search, show, summary};

/// Invoice dashboard - summarize, search and inspect invoice records
#[derive(Parser)]
#[command(name = "invdash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Invoice CSV file (default: embedded dataset)
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show summary statistics
    Summary(summary::SummaryArgs),

    /// Search invoices by number, date or amount
    Search(search::SearchArgs),

    /// Show a single invoice
    Show(show::ShowArgs),

    /// Show the full analytics report
    Report(report::ReportArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let source = commands::Source {
        config: cli.config.as_deref(),
        input: cli.input.as_deref(),
    };

    match cli.command {
        Commands::Summary(args) => summary::run(args, &source),
        Commands::Search(args) => search::run(args, &source),
        Commands::Show(args) => show::run(args, &source),
        Commands::Report(args) => report::run(args, &source),
        Commands::Config(args) => config::run(args, &source),
    }
}
