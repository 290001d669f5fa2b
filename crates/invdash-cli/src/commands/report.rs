//! Report command - highest/average invoice, date range, monthly, terms and company breakdowns.

use clap::Args;

use invdash_core::format::{format_currency, format_number, format_rate};
use invdash_core::{DashConfig, Report};

use super::{OutputFormat, Source};

/// Arguments for the report command.
#[derive(Args)]
pub struct ReportArgs {
    /// Output format (csv prints the monthly table)
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

pub fn run(args: ReportArgs, source: &Source<'_>) -> anyhow::Result<()> {
    let (config, dashboard) = super::open(source)?;
    let report = dashboard.report();

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
        OutputFormat::Csv => format_monthly_csv(&report)?,
        OutputFormat::Text => format_text(&report, &config),
    };

    println!("{}", output.trim_end());
    Ok(())
}

fn format_monthly_csv(report: &Report) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["month", "amount", "hours", "count", "avg_rate"])?;
    for month in &report.monthly {
        wtr.write_record([
            month.month.clone(),
            month.amount.to_string(),
            month.hours.to_string(),
            month.count.to_string(),
            format_number(month.avg_rate(), 2).replace(',', ""),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(report: &Report, config: &DashConfig) -> String {
    let symbol = &config.display.currency_symbol;
    let money = |value: Option<f64>| {
        value
            .map(|v| format_currency(v, symbol))
            .unwrap_or_else(|| "-".to_string())
    };

    let mut output = String::new();

    output.push_str("Revenue\n");
    output.push_str(&format!(
        "  Total revenue:     {}\n",
        format_currency(report.summary.total_amount, symbol)
    ));
    output.push_str(&format!("  Highest invoice:   {}\n", money(report.highest_invoice)));
    output.push_str(&format!("  Average invoice:   {}\n", money(report.average_invoice)));
    output.push('\n');

    output.push_str("Time\n");
    output.push_str(&format!("  Total hours:       {}\n", report.summary.total_hours));
    output.push_str(&format!(
        "  Most hours:        {}\n",
        report
            .most_hours
            .map(|h| format!("{} hours", h))
            .unwrap_or_else(|| "-".to_string())
    ));
    output.push_str(&format!(
        "  Average rate:      {}\n",
        format_rate(report.summary.avg_rate, symbol, config.display.rate_decimals)
    ));
    if let Some(range) = &report.date_range {
        output.push_str(&format!(
            "  Date range:        {} to {}\n",
            range.earliest, range.latest
        ));
    }

    if !report.monthly.is_empty() {
        output.push_str("\nMonthly performance\n");
        output.push_str(&format!(
            "  {:<8} {:>14} {:>6} {:>9} {:>12}\n",
            "Month", "Revenue", "Hours", "Invoices", "Avg rate"
        ));
        for month in &report.monthly {
            output.push_str(&format!(
                "  {:<8} {:>14} {:>6} {:>9} {:>12}\n",
                month.month,
                format_currency(month.amount, symbol),
                month.hours,
                month.count,
                format_rate(month.avg_rate(), symbol, config.display.rate_decimals),
            ));
        }
    }

    if !report.terms.is_empty() {
        output.push_str("\nPayment terms\n");
        for term in &report.terms {
            output.push_str(&format!("  {}: {} invoices\n", term.terms, term.count));
        }
    }

    if !report.companies.is_empty() {
        output.push_str("\nCompanies\n");
        for company in &report.companies {
            output.push_str(&format!("  {}: {} invoices\n", company.company, company.count));
        }
    }

    output
}
