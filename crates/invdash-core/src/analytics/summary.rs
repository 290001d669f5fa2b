//! Summary statistics over a dataset.

use crate::models::record::Dataset;
use crate::models::summary::SummaryStats;

use super::coerce::{lenient_float, lenient_int};

/// Compute summary statistics.
///
/// Absent or unparsable `total_amount` and `hours` values contribute zero.
pub fn compute_summary(dataset: &Dataset) -> SummaryStats {
    let mut total_amount = 0.0_f64;
    let mut total_hours = 0_i64;

    for record in dataset {
        total_amount += record.total_amount().map(lenient_float).unwrap_or(0.0);
        total_hours = total_hours.saturating_add(record.hours().map(lenient_int).unwrap_or(0));
    }

    SummaryStats::from_totals(dataset.len(), total_amount, total_hours)
}
