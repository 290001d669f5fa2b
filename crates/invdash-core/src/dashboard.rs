//! Dashboard state: one loaded dataset plus the values derived from it.
//!
//! The dataset is loaded exactly once. A load failure never propagates out
//! of the constructor: the error is logged and kept for display, and the
//! dashboard shows an empty dataset instead.

use std::cell::RefCell;

use tracing::{debug, error};

use crate::analytics;
use crate::error::{AggregateError, InputError, Result};
use crate::loader::{CsvLoader, DatasetLoader, LoadPolicy};
use crate::models::embedded::INVOICE_CSV;
use crate::models::record::{Dataset, Record};
use crate::models::summary::{
    CompanyCount, DateRange, MonthlyTotals, Report, SummaryStats, TermCount,
};

/// A loaded invoice dataset with cached derived values.
#[derive(Debug)]
pub struct Dashboard {
    dataset: Dataset,
    summary: SummaryStats,
    load_error: Option<InputError>,
    /// Last search term and its result.
    last_search: RefCell<Option<(String, Dataset)>>,
}

impl Dashboard {
    /// Build a dashboard over an already-loaded dataset.
    pub fn from_dataset(dataset: Dataset) -> Self {
        let summary = analytics::compute_summary(&dataset);
        Self {
            dataset,
            summary,
            load_error: None,
            last_search: RefCell::new(None),
        }
    }

    /// Load CSV text, degrading to an empty dataset on failure.
    pub fn from_text(text: &str, policy: LoadPolicy) -> Self {
        let result = CsvLoader::new().with_policy(policy).load(text);
        Self::from_load_result(result)
    }

    /// Load CSV bytes, degrading to an empty dataset on failure.
    pub fn from_bytes(bytes: &[u8], policy: LoadPolicy) -> Self {
        let result = CsvLoader::new().with_policy(policy).load_bytes(bytes);
        Self::from_load_result(result)
    }

    /// Load CSV text, returning the load error instead of degrading.
    pub fn try_from_text(text: &str, policy: LoadPolicy) -> Result<Self> {
        let dataset = CsvLoader::new().with_policy(policy).load(text)?;
        Ok(Self::from_dataset(dataset))
    }

    /// Load the dataset baked into the build.
    pub fn embedded() -> Self {
        Self::from_text(INVOICE_CSV, LoadPolicy::Lenient)
    }

    fn from_load_result(result: std::result::Result<Dataset, InputError>) -> Self {
        match result {
            Ok(dataset) => Self::from_dataset(dataset),
            Err(e) => Self::degraded(e),
        }
    }

    /// An empty dashboard standing in for a failed load.
    pub fn degraded(error: InputError) -> Self {
        error!("Error parsing CSV: {}", error);
        let mut dashboard = Self::from_dataset(Dataset::empty());
        dashboard.load_error = Some(error);
        dashboard
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Summary statistics, computed once at load.
    pub fn summary(&self) -> SummaryStats {
        self.summary
    }

    /// The error that caused the dashboard to degrade, if any.
    pub fn load_error(&self) -> Option<&InputError> {
        self.load_error.as_ref()
    }

    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }

    /// Search the dataset, reusing the previous result for a repeated term.
    pub fn search(&self, term: &str) -> Dataset {
        if let Some((cached_term, cached)) = self.last_search.borrow().as_ref() {
            if cached_term == term {
                debug!("Search cache hit for {:?}", term);
                return cached.clone();
            }
        }

        let result = analytics::filter(&self.dataset, term);
        *self.last_search.borrow_mut() = Some((term.to_string(), result.clone()));
        result
    }

    /// Select a record by exact invoice number.
    pub fn select(&self, invoice_number: &str) -> Option<&Record> {
        analytics::find_invoice(&self.dataset, invoice_number)
    }

    pub fn max_amount(&self) -> std::result::Result<f64, AggregateError> {
        analytics::max_amount(&self.dataset)
    }

    pub fn max_hours(&self) -> std::result::Result<i64, AggregateError> {
        analytics::max_hours(&self.dataset)
    }

    pub fn average_invoice_amount(&self) -> std::result::Result<f64, AggregateError> {
        analytics::average_invoice_amount(&self.dataset)
    }

    pub fn date_range(&self) -> Option<DateRange> {
        analytics::date_range(&self.dataset)
    }

    pub fn monthly_totals(&self) -> Vec<MonthlyTotals> {
        analytics::monthly_totals(&self.dataset)
    }

    pub fn terms_breakdown(&self) -> Vec<TermCount> {
        analytics::terms_breakdown(&self.dataset)
    }

    pub fn company_breakdown(&self) -> Vec<CompanyCount> {
        analytics::company_breakdown(&self.dataset)
    }

    /// Collect everything the reports view shows.
    pub fn report(&self) -> Report {
        Report {
            summary: self.summary,
            highest_invoice: self.max_amount().ok(),
            average_invoice: self.average_invoice_amount().ok(),
            most_hours: self.max_hours().ok(),
            date_range: self.date_range(),
            monthly: self.monthly_totals(),
            terms: self.terms_breakdown(),
            companies: self.company_breakdown(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_embedded_dashboard() {
        let dashboard = Dashboard::embedded();

        assert!(dashboard.load_error().is_none());
        assert_eq!(
            dashboard.summary(),
            SummaryStats {
                total_invoices: 8,
                total_amount: 25220.0,
                total_hours: 260,
                avg_rate: 97.0,
            }
        );
        assert_eq!(dashboard.max_amount(), Ok(4400.0));
        assert_eq!(dashboard.max_hours(), Ok(44));
        assert_eq!(dashboard.average_invoice_amount(), Ok(3152.5));
    }

    #[test]
    fn test_embedded_report() {
        let report = Dashboard::embedded().report();

        let range = report.date_range.unwrap();
        assert_eq!(range.earliest.to_string(), "2024-01-05");
        assert_eq!(range.latest.to_string(), "2024-04-12");

        assert_eq!(
            report.monthly.iter().map(|m| m.count).collect::<Vec<_>>(),
            vec![2, 2, 3, 1]
        );
        assert_eq!(report.terms[0].terms, "Net 30");
        assert_eq!(report.terms[0].count, 4);

        assert_eq!(
            report.companies,
            vec![CompanyCount { company: "W3Evolutions".into(), count: 8 }]
        );
    }

    #[test]
    fn test_strict_failure_degrades_to_empty() {
        let dashboard = Dashboard::from_text("a,b\n1,2,3", LoadPolicy::Strict);

        assert!(dashboard.is_empty());
        assert_eq!(dashboard.summary(), SummaryStats::default());
        assert!(matches!(
            dashboard.load_error(),
            Some(InputError::ColumnCount { line: 2, .. })
        ));
        assert!(dashboard.max_amount().is_err());
    }

    #[test]
    fn test_try_from_text_propagates() {
        let err = Dashboard::try_from_text("a,,c", LoadPolicy::Strict).unwrap_err();
        assert!(matches!(
            err,
            crate::DashError::Input(InputError::EmptyHeader { column: 2 })
        ));

        let dashboard = Dashboard::try_from_text("a,b\n1,2", LoadPolicy::Strict).unwrap();
        assert_eq!(dashboard.len(), 1);
    }

    #[test]
    fn test_invalid_bytes_degrade_to_empty() {
        let dashboard = Dashboard::from_bytes(&[0xff, 0xfe], LoadPolicy::Lenient);

        assert!(dashboard.is_empty());
        assert_eq!(dashboard.load_error(), Some(&InputError::NotUtf8 { offset: 0 }));
    }

    #[test]
    fn test_search_results_are_stable_across_cache() {
        let dashboard = Dashboard::embedded();

        let first = dashboard.search("2024-03");
        let again = dashboard.search("2024-03");
        assert_eq!(first, again);
        assert_eq!(first.len(), 3);

        assert_eq!(dashboard.search("").len(), 8);
        assert_eq!(dashboard.search("2024-03"), first);
    }

    #[test]
    fn test_select() {
        let dashboard = Dashboard::embedded();

        let record = dashboard.select("NES01-5541").unwrap();
        assert_eq!(record.total_amount(), Some("4400.00"));
        assert_eq!(record.terms(), Some("Net 15"));

        assert!(dashboard.select("NES01-0000").is_none());
    }

    #[test]
    fn test_empty_report_has_no_metrics() {
        let report = Dashboard::from_text("", LoadPolicy::Lenient).report();

        assert_eq!(report.highest_invoice, None);
        assert_eq!(report.most_hours, None);
        assert!(report.monthly.is_empty());
        assert!(report.companies.is_empty());
    }
}
