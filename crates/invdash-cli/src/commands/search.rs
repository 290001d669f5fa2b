//! Search command - filter invoices by number, date or amount.

use clap::Args;
use console::style;
use tracing::debug;

use invdash_core::analytics::lenient_float;
use invdash_core::format::format_currency;
use invdash_core::{DashConfig, Dataset};

use super::{OutputFormat, Source};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Search term (empty matches everything)
    #[arg(default_value = "")]
    term: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Maximum results to print (overrides config, 0 = unlimited)
    #[arg(short = 'n', long)]
    limit: Option<usize>,
}

pub fn run(args: SearchArgs, source: &Source<'_>) -> anyhow::Result<()> {
    let (config, dashboard) = super::open(source)?;

    let results = dashboard.search(&args.term);
    let limit = args.limit.unwrap_or(config.search.max_results);
    let shown = if limit == 0 {
        results.len()
    } else {
        limit.min(results.len())
    };

    debug!("Showing {} of {} matches", shown, results.len());

    let records = &results.records()[..shown];
    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(records)?,
        OutputFormat::Csv => super::records_csv(results.headers(), records)?,
        OutputFormat::Text => format_text(&results, shown, dashboard.len(), &config),
    };

    println!("{}", output.trim_end());
    Ok(())
}

fn format_text(results: &Dataset, shown: usize, total: usize, config: &DashConfig) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} of {} invoices\n", results.len(), total));

    for record in &results.records()[..shown] {
        let amount = record.total_amount().map(lenient_float).unwrap_or(0.0);
        output.push_str(&format!(
            "  {:<14} {:<12} {:>12} {:>4} hours\n",
            record.invoice_number().unwrap_or("-"),
            record.date().unwrap_or("-"),
            format_currency(amount, &config.display.currency_symbol),
            record.hours().unwrap_or("0"),
        ));
    }

    if shown < results.len() {
        output.push_str(&format!(
            "  {}\n",
            style(format!("... {} more", results.len() - shown)).dim()
        ));
    }

    output
}
