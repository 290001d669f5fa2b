//! Derived values computed from an invoice dataset.
//!
//! Every function here is pure: it reads an immutable [`Dataset`] and
//! returns a new value.

mod breakdown;
mod coerce;
mod metrics;
mod search;
mod summary;

pub use breakdown::{
    company_breakdown, date_range, monthly_totals, parse_invoice_date, terms_breakdown,
};
pub use coerce::{lenient_float, lenient_int, LenientFloat, LenientInt};
pub use metrics::{
    average_invoice_amount, max_amount, max_field, max_hours, mean_field, min_field,
};
pub use search::{filter, find_invoice};
pub use summary::compute_summary;

use crate::models::record::Dataset;
use crate::models::summary::SummaryStats;

/// Trait for reading a numeric value out of a raw field.
pub trait FieldParser {
    /// Parse raw field text. Must not fail; unparsable text maps to a default.
    fn parse(&self, raw: &str) -> f64;
}

impl<F: Fn(&str) -> f64> FieldParser for F {
    fn parse(&self, raw: &str) -> f64 {
        self(raw)
    }
}

/// Compute summary statistics. Alias of [`compute_summary`].
pub fn summarize(dataset: &Dataset) -> SummaryStats {
    compute_summary(dataset)
}

/// Filter records by a search term. Alias of [`filter`].
pub fn search(dataset: &Dataset, term: &str) -> Dataset {
    filter(dataset, term)
}
