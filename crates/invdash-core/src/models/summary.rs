//! Derived aggregate models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Summary statistics over a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryStats {
    /// Number of records.
    pub total_invoices: usize,

    /// Sum of coerced `total_amount` values.
    pub total_amount: f64,

    /// Sum of coerced `hours` values.
    pub total_hours: i64,

    /// `total_amount / total_hours`, or 0 unless the hours total is positive.
    pub avg_rate: f64,
}

impl SummaryStats {
    /// Build stats from running totals. The rate is 0 unless hours are positive.
    pub fn from_totals(total_invoices: usize, total_amount: f64, total_hours: i64) -> Self {
        let avg_rate = if total_hours > 0 {
            total_amount / total_hours as f64
        } else {
            0.0
        };

        Self {
            total_invoices,
            total_amount,
            total_hours,
            avg_rate,
        }
    }
}

/// Earliest and latest invoice dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub earliest: NaiveDate,
    pub latest: NaiveDate,
}

/// Totals for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotals {
    /// Month key in `YYYY-MM` form.
    pub month: String,
    pub amount: f64,
    pub hours: i64,
    pub count: usize,
}

impl MonthlyTotals {
    pub fn new(month: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            amount: 0.0,
            hours: 0,
            count: 0,
        }
    }

    /// Average hourly rate for the month, or 0 unless hours are positive.
    pub fn avg_rate(&self) -> f64 {
        if self.hours > 0 {
            self.amount / self.hours as f64
        } else {
            0.0
        }
    }
}

/// Number of invoices sharing one payment-terms value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermCount {
    pub terms: String,
    pub count: usize,
}

/// Number of invoices billed to one company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyCount {
    pub company: String,
    pub count: usize,
}

/// Everything the reports view shows.
///
/// Per-invoice metrics are `None` for an empty dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub summary: SummaryStats,
    pub highest_invoice: Option<f64>,
    pub average_invoice: Option<f64>,
    pub most_hours: Option<i64>,
    pub date_range: Option<DateRange>,
    pub monthly: Vec<MonthlyTotals>,
    pub terms: Vec<TermCount>,
    pub companies: Vec<CompanyCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_totals_guards_zero_hours() {
        let stats = SummaryStats::from_totals(3, 120.0, 0);
        assert_eq!(stats.avg_rate, 0.0);
    }

    #[test]
    fn test_negative_hours_give_zero_rate() {
        let stats = SummaryStats::from_totals(1, 500.0, -5);
        assert_eq!(stats.avg_rate, 0.0);

        let mut month = MonthlyTotals::new("2024-01");
        month.amount = 500.0;
        month.hours = -5;
        assert_eq!(month.avg_rate(), 0.0);

        month.hours = 5;
        assert_eq!(month.avg_rate(), 100.0);
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let stats = SummaryStats::from_totals(2, 750.0, 15);
        let json = serde_json::to_value(stats).unwrap();

        assert_eq!(json["totalInvoices"], 2);
        assert_eq!(json["avgRate"], 50.0);
    }
}
