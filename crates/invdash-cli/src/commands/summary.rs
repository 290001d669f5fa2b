//! Summary command - headline statistics for the dataset.

use clap::Args;

use invdash_core::format::{format_currency, format_rate};
use invdash_core::{DashConfig, SummaryStats};

use super::{OutputFormat, Source};

/// Arguments for the summary command.
#[derive(Args)]
pub struct SummaryArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

pub fn run(args: SummaryArgs, source: &Source<'_>) -> anyhow::Result<()> {
    let (config, dashboard) = super::open(source)?;
    let stats = dashboard.summary();

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&stats)?,
        OutputFormat::Csv => format_csv(&stats)?,
        OutputFormat::Text => format_text(&stats, &config),
    };

    println!("{}", output.trim_end());
    Ok(())
}

fn format_csv(stats: &SummaryStats) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["total_invoices", "total_amount", "total_hours", "avg_rate"])?;
    wtr.write_record([
        stats.total_invoices.to_string(),
        stats.total_amount.to_string(),
        stats.total_hours.to_string(),
        stats.avg_rate.to_string(),
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(stats: &SummaryStats, config: &DashConfig) -> String {
    let symbol = &config.display.currency_symbol;
    let mut output = String::new();

    output.push_str(&format!("Invoices:      {}\n", stats.total_invoices));
    output.push_str(&format!(
        "Total revenue: {}\n",
        format_currency(stats.total_amount, symbol)
    ));
    output.push_str(&format!("Total hours:   {}\n", stats.total_hours));
    output.push_str(&format!(
        "Average rate:  {}\n",
        format_rate(stats.avg_rate, symbol, config.display.rate_decimals)
    ));

    output
}
