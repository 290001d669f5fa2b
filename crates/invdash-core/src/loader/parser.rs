//! Delimited-text parser for the invoice database format.
//!
//! The format is deliberately minimal: rows are separated by `\n`, fields by
//! `,`, and there is no quoting or escaping. A field containing a literal
//! comma shifts every later field in its row by one column. Existing data
//! files depend on exactly this behavior.

use tracing::{debug, info};

use crate::error::InputError;
use crate::models::record::{Dataset, Record};

use super::{DatasetLoader, LoadPolicy, Result};

const ROW_SEPARATOR: char = '\n';
const FIELD_SEPARATOR: char = ',';

/// CSV loader with a configurable policy for malformed rows.
#[derive(Debug, Clone, Default)]
pub struct CsvLoader {
    policy: LoadPolicy,
}

impl CsvLoader {
    /// Create a loader using the lenient policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the load policy.
    pub fn with_policy(mut self, policy: LoadPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Parse without any validation. Never fails.
    pub(crate) fn parse_lenient(&self, text: &str) -> Dataset {
        let mut rows = split_rows(text);
        let Some(header_line) = rows.next() else {
            debug!("Empty input, returning empty dataset");
            return Dataset::empty();
        };

        let headers = split_fields(header_line);
        let records: Vec<Record> = rows.map(|line| zip_record(&headers, line)).collect();

        info!("Loaded {} records with {} columns", records.len(), headers.len());

        Dataset::new(headers.into_iter().map(str::to_string).collect(), records)
    }

    fn parse_strict(&self, text: &str) -> Result<Dataset> {
        let mut rows = split_rows(text);
        let Some(header_line) = rows.next() else {
            debug!("Empty input, returning empty dataset");
            return Ok(Dataset::empty());
        };

        let headers = split_fields(header_line);
        if let Some(column) = headers.iter().position(|h| h.is_empty()) {
            return Err(InputError::EmptyHeader { column: column + 1 });
        }

        let mut records = Vec::new();
        for (index, line) in rows.enumerate() {
            let found = line.split(FIELD_SEPARATOR).count();
            if found != headers.len() {
                return Err(InputError::ColumnCount {
                    // Header is line 1.
                    line: index + 2,
                    expected: headers.len(),
                    found,
                });
            }
            records.push(zip_record(&headers, line));
        }

        info!("Loaded {} records with {} columns (strict)", records.len(), headers.len());

        Ok(Dataset::new(
            headers.into_iter().map(str::to_string).collect(),
            records,
        ))
    }
}

impl DatasetLoader for CsvLoader {
    fn load(&self, text: &str) -> Result<Dataset> {
        match self.policy {
            LoadPolicy::Lenient => Ok(self.parse_lenient(text)),
            LoadPolicy::Strict => self.parse_strict(text),
        }
    }
}

/// Whitespace as browsers trim it: Unicode white space plus the byte-order
/// mark, but not NEL (U+0085).
fn is_trimmed(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Trim the whole input and split it into rows.
///
/// Yields nothing for blank input.
fn split_rows(text: &str) -> impl Iterator<Item = &str> {
    let trimmed = text.trim_matches(is_trimmed);
    let rows = if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.split(ROW_SEPARATOR))
    };
    rows.into_iter().flatten()
}

fn split_fields(line: &str) -> Vec<&str> {
    line.split(FIELD_SEPARATOR).collect()
}

/// Zip a row against the headers. Later duplicate headers overwrite earlier ones.
fn zip_record(headers: &[&str], line: &str) -> Record {
    let values = split_fields(line);
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| (*header, values.get(i).copied().unwrap_or("")))
        .collect()
}
