//! Lenient numeric coercion of record fields.
//!
//! Field values are read the way a browser reads numbers out of loose text:
//! leading whitespace is skipped, the longest numeric prefix is taken, and
//! anything that does not start with a number becomes zero. Coercion never
//! fails.

use lazy_static::lazy_static;
use regex::Regex;

use super::FieldParser;

lazy_static! {
    // Optional sign, then digits with optional fraction (or a bare fraction), then optional exponent.
    static ref FLOAT_PREFIX: Regex = Regex::new(
        r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?"
    ).unwrap();

    static ref INT_PREFIX: Regex = Regex::new(
        r"^[+-]?\d+"
    ).unwrap();
}

/// Coerce text to a float; unparsable text is zero.
pub fn lenient_float(raw: &str) -> f64 {
    FLOAT_PREFIX
        .find(raw.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Coerce text to an integer, truncating any fraction; unparsable text is zero.
///
/// Digit runs too long for `i64` saturate toward their sign.
pub fn lenient_int(raw: &str) -> i64 {
    let Some(digits) = INT_PREFIX.find(raw.trim_start()) else {
        return 0;
    };
    let digits = digits.as_str();

    match digits.parse::<i64>() {
        Ok(value) => value,
        Err(_) if digits.starts_with('-') => i64::MIN,
        Err(_) => i64::MAX,
    }
}

/// Reads a field as a float (amounts, prices).
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientFloat;

impl FieldParser for LenientFloat {
    fn parse(&self, raw: &str) -> f64 {
        lenient_float(raw)
    }
}

/// Reads a field as an integer (hours).
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientInt;

impl FieldParser for LenientInt {
    fn parse(&self, raw: &str) -> f64 {
        lenient_int(raw) as f64
    }
}
