//! Search and lookup over invoice records.

use tracing::debug;

use crate::models::record::{Dataset, Record};

/// Filter records matching a search term.
///
/// A record matches when any of these hold:
/// - `invoice_number` contains the term, ignoring case
/// - `date` contains the term
/// - `total_amount` (raw text) contains the term
///
/// An empty term returns the dataset unchanged.
pub fn filter(dataset: &Dataset, term: &str) -> Dataset {
    if term.is_empty() {
        return dataset.clone();
    }

    let needle = term.to_lowercase();
    let records: Vec<Record> = dataset
        .iter()
        .filter(|record| matches(record, term, &needle))
        .cloned()
        .collect();

    debug!("Search {:?} matched {} of {} records", term, records.len(), dataset.len());

    dataset.with_records(records)
}

/// Check a single record against a term and its lower-cased form.
fn matches(record: &Record, term: &str, needle: &str) -> bool {
    record
        .invoice_number()
        .is_some_and(|n| n.to_lowercase().contains(needle))
        || record.date().is_some_and(|d| d.contains(term))
        || record.total_amount().is_some_and(|a| a.contains(term))
}

/// Find the first record with exactly this invoice number.
pub fn find_invoice<'a>(dataset: &'a Dataset, invoice_number: &str) -> Option<&'a Record> {
    dataset
        .iter()
        .find(|record| record.invoice_number() == Some(invoice_number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load;
    use pretty_assertions::assert_eq;

    fn sample() -> Dataset {
        load(
            "invoice_number,date,hours,total_amount\n\
             INV-1,2024-01-01,10,500\n\
             INV-2,2024-01-02,5,250\n\
             NES01-5541,2024-03-01,44,4400.00",
        )
    }

    fn numbers(dataset: &Dataset) -> Vec<&str> {
        dataset.iter().filter_map(Record::invoice_number).collect()
    }

    #[test]
    fn test_empty_term_returns_everything() {
        let dataset = sample();
        assert_eq!(filter(&dataset, ""), dataset);
    }

    #[test]
    fn test_invoice_number_ignores_case() {
        let dataset = sample();

        assert_eq!(numbers(&filter(&dataset, "inv-1")), vec!["INV-1"]);
        assert_eq!(numbers(&filter(&dataset, "nes01")), vec!["NES01-5541"]);
    }

    #[test]
    fn test_date_match_is_case_sensitive_substring() {
        let dataset = sample();

        assert_eq!(numbers(&filter(&dataset, "2024-01")), vec!["INV-1", "INV-2"]);
        assert_eq!(numbers(&filter(&dataset, "-03-")), vec!["NES01-5541"]);
    }

    #[test]
    fn test_amount_matches_raw_text() {
        let dataset = sample();

        assert_eq!(numbers(&filter(&dataset, "250")), vec!["INV-2"]);
        assert_eq!(numbers(&filter(&dataset, "4400.0")), vec!["NES01-5541"]);
        // "4400" parses as a number elsewhere, but search only sees raw text.
        assert!(filter(&dataset, "4,400").is_empty());
    }

    #[test]
    fn test_any_field_match_preserves_order() {
        let dataset = sample();
        // "1" hits every record through some field.
        assert_eq!(
            numbers(&filter(&dataset, "1")),
            vec!["INV-1", "INV-2", "NES01-5541"]
        );
    }

    #[test]
    fn test_filter_is_idempotent() {
        let dataset = sample();
        for term in ["", "inv", "2024-01-02", "500", "zzz"] {
            let once = filter(&dataset, term);
            assert_eq!(filter(&once, term), once);
        }
    }

    #[test]
    fn test_filter_keeps_headers() {
        let dataset = sample();
        let result = filter(&dataset, "zzz");

        assert!(result.is_empty());
        assert_eq!(result.headers(), dataset.headers());
    }

    #[test]
    fn test_records_without_search_fields_never_match() {
        let dataset = load("terms\nNet 30");
        assert!(filter(&dataset, "Net").is_empty());
    }

    #[test]
    fn test_find_invoice() {
        let dataset = sample();

        assert_eq!(
            find_invoice(&dataset, "INV-2").and_then(Record::total_amount),
            Some("250")
        );
        assert!(find_invoice(&dataset, "inv-2").is_none());
    }
}
