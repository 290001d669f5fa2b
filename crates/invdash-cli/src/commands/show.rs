//! Show command - inspect a single invoice.

use clap::Args;

use invdash_core::analytics::lenient_float;
use invdash_core::format::format_currency;
use invdash_core::models::fields;
use invdash_core::{DashConfig, Record};

use super::{OutputFormat, Source};

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Invoice number (exact match)
    invoice_number: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

pub fn run(args: ShowArgs, source: &Source<'_>) -> anyhow::Result<()> {
    let (config, dashboard) = super::open(source)?;

    let Some(record) = dashboard.select(&args.invoice_number) else {
        anyhow::bail!("Invoice not found: {}", args.invoice_number);
    };

    let headers = dashboard.dataset().headers();
    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(record)?,
        OutputFormat::Csv => super::records_csv(headers, [record])?,
        OutputFormat::Text => format_text(record, headers, &config),
    };

    println!("{}", output.trim_end());
    Ok(())
}

fn format_text(record: &Record, headers: &[String], config: &DashConfig) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Invoice {}\n",
        record.invoice_number().unwrap_or("-")
    ));

    let amount = record.total_amount().map(lenient_float).unwrap_or(0.0);
    output.push_str(&format!(
        "  Amount: {}\n\n",
        format_currency(amount, &config.display.currency_symbol)
    ));

    let width = headers.iter().map(String::len).max().unwrap_or(0);
    for header in headers {
        if header == fields::INVOICE_NUMBER {
            continue;
        }
        output.push_str(&format!(
            "  {:<width$}  {}\n",
            header,
            record.value(header),
            width = width
        ));
    }

    output
}
