//! Per-field metrics (max, min, mean) over a dataset.

use crate::error::AggregateError;
use crate::models::record::{fields, Dataset};

use super::coerce::{LenientFloat, LenientInt};
use super::FieldParser;

/// Result type for metric accessors.
pub type Result<T> = std::result::Result<T, AggregateError>;

fn parsed_values<'a, P: FieldParser>(
    dataset: &'a Dataset,
    field: &'a str,
    parser: &'a P,
) -> Result<impl Iterator<Item = f64> + 'a> {
    if dataset.is_empty() {
        return Err(AggregateError::EmptyDataset {
            field: field.to_string(),
        });
    }

    Ok(dataset.iter().map(move |record| parser.parse(record.value(field))))
}

/// Maximum of a parsed field. Fails on an empty dataset.
pub fn max_field<P: FieldParser>(dataset: &Dataset, field: &str, parser: &P) -> Result<f64> {
    Ok(parsed_values(dataset, field, parser)?.fold(f64::NEG_INFINITY, f64::max))
}

/// Minimum of a parsed field. Fails on an empty dataset.
pub fn min_field<P: FieldParser>(dataset: &Dataset, field: &str, parser: &P) -> Result<f64> {
    Ok(parsed_values(dataset, field, parser)?.fold(f64::INFINITY, f64::min))
}

/// Arithmetic mean of a parsed field. Fails on an empty dataset.
pub fn mean_field<P: FieldParser>(dataset: &Dataset, field: &str, parser: &P) -> Result<f64> {
    let sum: f64 = parsed_values(dataset, field, parser)?.sum();
    Ok(sum / dataset.len() as f64)
}

/// Highest single invoice amount.
pub fn max_amount(dataset: &Dataset) -> Result<f64> {
    max_field(dataset, fields::TOTAL_AMOUNT, &LenientFloat)
}

/// Most hours billed on a single invoice.
pub fn max_hours(dataset: &Dataset) -> Result<i64> {
    max_field(dataset, fields::HOURS, &LenientInt).map(|h| h as i64)
}

/// Average amount per invoice.
pub fn average_invoice_amount(dataset: &Dataset) -> Result<f64> {
    mean_field(dataset, fields::TOTAL_AMOUNT, &LenientFloat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load;
    use pretty_assertions::assert_eq;

    fn sample() -> Dataset {
        load(
            "invoice_number,hours,unit_price,total_amount\n\
             A,10,50,500\n\
             B,44,100,4400.50\n\
             C,7.9,,n/a",
        )
    }

    #[test]
    fn test_max_and_min() {
        let dataset = sample();

        assert_eq!(max_field(&dataset, "total_amount", &LenientFloat), Ok(4400.5));
        assert_eq!(min_field(&dataset, "total_amount", &LenientFloat), Ok(0.0));
        assert_eq!(max_field(&dataset, "unit_price", &LenientFloat), Ok(100.0));
        assert_eq!(min_field(&dataset, "hours", &LenientInt), Ok(7.0));
    }

    #[test]
    fn test_report_accessors() {
        let dataset = sample();

        assert_eq!(max_amount(&dataset), Ok(4400.5));
        assert_eq!(max_hours(&dataset), Ok(44));
        assert_eq!(average_invoice_amount(&dataset), Ok(4900.5 / 3.0));
    }

    #[test]
    fn test_closure_parser() {
        let dataset = sample();
        let width = |raw: &str| raw.len() as f64;

        assert_eq!(max_field(&dataset, "total_amount", &width), Ok(7.0));
    }

    #[test]
    fn test_absent_field_reads_as_zero() {
        let dataset = sample();
        assert_eq!(max_field(&dataset, "no_such_field", &LenientFloat), Ok(0.0));
    }

    #[test]
    fn test_empty_dataset_is_an_error() {
        let empty = Dataset::empty();
        let expected = Err(AggregateError::EmptyDataset {
            field: "total_amount".to_string(),
        });

        assert_eq!(max_amount(&empty), expected);
        assert_eq!(average_invoice_amount(&empty), expected);
        assert_eq!(min_field(&empty, "total_amount", &LenientFloat), expected);
        assert!(max_hours(&empty).is_err());
    }
}
