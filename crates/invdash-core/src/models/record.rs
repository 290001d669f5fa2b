//! Invoice record and dataset models.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Well-known invoice field names.
pub mod fields {
    pub const INVOICE_NUMBER: &str = "invoice_number";
    pub const DATE: &str = "date";
    pub const HOURS: &str = "hours";
    pub const TOTAL_AMOUNT: &str = "total_amount";
    pub const TERMS: &str = "terms";
    pub const COMPANY_NAME: &str = "company_name";
}

/// One invoice as a field name to field value mapping.
///
/// Values are kept as the raw text from the source row. Numeric fields are
/// coerced on demand by the aggregate functions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, String>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Get a field value if the field exists.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Get a field value, or the empty string if the field is absent.
    pub fn value(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// Check whether the record has a field.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Field names in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Field name/value pairs in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn invoice_number(&self) -> Option<&str> {
        self.get(fields::INVOICE_NUMBER)
    }

    pub fn date(&self) -> Option<&str> {
        self.get(fields::DATE)
    }

    pub fn hours(&self) -> Option<&str> {
        self.get(fields::HOURS)
    }

    pub fn total_amount(&self) -> Option<&str> {
        self.get(fields::TOTAL_AMOUNT)
    }

    pub fn terms(&self) -> Option<&str> {
        self.get(fields::TERMS)
    }

    pub fn company_name(&self) -> Option<&str> {
        self.get(fields::COMPANY_NAME)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name, value);
        }
        record
    }
}

/// An ordered, immutable collection of invoice records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Distinct header names in first-occurrence column order.
    headers: Vec<String>,

    /// Records in source row order.
    records: Vec<Record>,
}

impl Dataset {
    /// Create a dataset from headers and records.
    ///
    /// Duplicate header names are collapsed, keeping the first position.
    pub fn new(headers: Vec<String>, records: Vec<Record>) -> Self {
        let mut distinct: Vec<String> = Vec::with_capacity(headers.len());
        for header in headers {
            if !distinct.contains(&header) {
                distinct.push(header);
            }
        }

        Self {
            headers: distinct,
            records,
        }
    }

    /// A dataset with no headers and no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Header names in column order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All records in source order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Get the record at a position.
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Build a dataset over the same headers holding a subsequence of records.
    pub fn with_records(&self, records: Vec<Record>) -> Self {
        Self {
            headers: self.headers.clone(),
            records,
        }
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_record_value_defaults_to_empty() {
        let record: Record = [("invoice_number", "INV-1")].into_iter().collect();

        assert_eq!(record.invoice_number(), Some("INV-1"));
        assert_eq!(record.value("hours"), "");
        assert!(record.hours().is_none());
    }

    #[test]
    fn test_record_insert_overwrites() {
        let mut record = Record::new();
        record.insert("terms", "Net 30");
        record.insert("terms", "Net 15");

        assert_eq!(record.len(), 1);
        assert_eq!(record.terms(), Some("Net 15"));
    }

    #[test]
    fn test_dataset_collapses_duplicate_headers() {
        let dataset = Dataset::new(
            vec!["a".into(), "b".into(), "a".into(), "c".into()],
            Vec::new(),
        );

        assert_eq!(dataset.headers(), &["a", "b", "c"]);
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_record_serializes_as_flat_map() {
        let record: Record = [("date", "2024-01-01"), ("hours", "10")].into_iter().collect();
        let json = serde_json::to_string(&record).unwrap();

        assert_eq!(json, r#"{"date":"2024-01-01","hours":"10"}"#);
    }
}
