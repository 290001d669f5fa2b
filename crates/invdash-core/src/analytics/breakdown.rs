//! Date range, monthly, payment-terms and company breakdowns.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::record::{fields, Dataset, Record};
use crate::models::summary::{CompanyCount, DateRange, MonthlyTotals, TermCount};

use super::coerce::{lenient_float, lenient_int};

/// Parse an invoice `date` field (`YYYY-MM-DD`).
pub fn parse_invoice_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

fn record_date(record: &Record) -> Option<NaiveDate> {
    record.date().and_then(parse_invoice_date)
}

/// Earliest and latest parsable invoice dates, if any record has one.
pub fn date_range(dataset: &Dataset) -> Option<DateRange> {
    let mut dates = dataset.iter().filter_map(record_date);
    let first = dates.next()?;

    let (earliest, latest) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
    Some(DateRange { earliest, latest })
}

/// Totals per calendar month, in chronological order.
///
/// Records without a parsable date are left out.
pub fn monthly_totals(dataset: &Dataset) -> Vec<MonthlyTotals> {
    let mut months: BTreeMap<String, MonthlyTotals> = BTreeMap::new();

    for record in dataset {
        let Some(date) = record_date(record) else {
            continue;
        };

        let key = date.format("%Y-%m").to_string();
        let entry = months
            .entry(key.clone())
            .or_insert_with(|| MonthlyTotals::new(key));

        entry.amount += lenient_float(record.value(fields::TOTAL_AMOUNT));
        entry.hours = entry
            .hours
            .saturating_add(lenient_int(record.value(fields::HOURS)));
        entry.count += 1;
    }

    months.into_values().collect()
}

/// Count non-empty values of one field, most common first, ties by value.
fn value_counts(dataset: &Dataset, field: &str) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();

    for value in dataset.iter().filter_map(|record| record.get(field)) {
        let value = value.trim();
        if !value.is_empty() {
            *counts.entry(value).or_insert(0) += 1;
        }
    }

    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(value, count)| (value.to_string(), count))
        .collect();

    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}

/// Invoice count per non-empty `terms` value, most common first.
pub fn terms_breakdown(dataset: &Dataset) -> Vec<TermCount> {
    value_counts(dataset, fields::TERMS)
        .into_iter()
        .map(|(terms, count)| TermCount { terms, count })
        .collect()
}

/// Invoice count per non-empty `company_name` value, most common first.
pub fn company_breakdown(dataset: &Dataset) -> Vec<CompanyCount> {
    value_counts(dataset, fields::COMPANY_NAME)
        .into_iter()
        .map(|(company, count)| CompanyCount { company, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load;
    use pretty_assertions::assert_eq;

    fn sample() -> Dataset {
        load(
            "invoice_number,date,hours,total_amount,terms,company_name\n\
             A,2024-02-16,36,3420.00,Net 30,W3Evolutions\n\
             B,2024-01-05,40,3800.00,Net 30,Acme\n\
             C,2024-01-19,38,3610.00,Net 15,W3Evolutions\n\
             D,not a date,10,1000,Net 15, \n\
             E,2024-03-29,20,2000.00,,Acme\n\
             F,2024-03-01,0,0,Due on receipt,Globex",
        )
    }

    #[test]
    fn test_date_range() {
        let range = date_range(&sample()).unwrap();

        assert_eq!(range.earliest, NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(range.latest, NaiveDate::from_ymd_opt(2024, 3, 29).unwrap());
    }

    #[test]
    fn test_date_range_without_dates() {
        assert_eq!(date_range(&load("date\nsoon\n")), None);
        assert_eq!(date_range(&Dataset::empty()), None);
    }

    #[test]
    fn test_monthly_totals() {
        let months = monthly_totals(&sample());

        assert_eq!(
            months.iter().map(|m| m.month.as_str()).collect::<Vec<_>>(),
            vec!["2024-01", "2024-02", "2024-03"]
        );

        let january = &months[0];
        assert_eq!(january.amount, 7410.0);
        assert_eq!(january.hours, 78);
        assert_eq!(january.count, 2);
        assert_eq!(january.avg_rate(), 7410.0 / 78.0);

        let march = &months[2];
        assert_eq!(march.count, 2);
        assert_eq!(march.hours, 20);
        assert_eq!(march.avg_rate(), 100.0);
    }

    #[test]
    fn test_terms_breakdown() {
        let breakdown = terms_breakdown(&sample());

        assert_eq!(
            breakdown,
            vec![
                TermCount { terms: "Net 15".into(), count: 2 },
                TermCount { terms: "Net 30".into(), count: 2 },
                TermCount { terms: "Due on receipt".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_company_breakdown() {
        let breakdown = company_breakdown(&sample());

        assert_eq!(
            breakdown,
            vec![
                CompanyCount { company: "Acme".into(), count: 2 },
                CompanyCount { company: "W3Evolutions".into(), count: 2 },
                CompanyCount { company: "Globex".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_company_breakdown_without_column() {
        assert!(company_breakdown(&load("invoice_number\nA")).is_empty());
    }
}
