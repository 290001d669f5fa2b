//! Display formatting for money amounts and rates.

/// Group the integer digits of a non-negative decimal string with commas.
fn group_thousands(integer_part: &str) -> String {
    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::with_capacity(chars.len() + chars.len() / 3);

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(*c);
    }

    formatted
}

/// Format a number with grouped thousands and a fixed number of decimals.
pub fn format_number(value: f64, decimals: usize) -> String {
    let s = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match s.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (s.as_str(), None),
    };

    let sign = if value < 0.0 && s.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };

    match decimal_part {
        Some(d) => format!("{}{}.{}", sign, group_thousands(integer_part), d),
        None => format!("{}{}", sign, group_thousands(integer_part)),
    }
}

/// Format a money amount (e.g., `$1,234.56`).
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let formatted = format_number(amount, 2);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-{}{}", symbol, rest),
        None => format!("{}{}", symbol, formatted),
    }
}

/// Format an hourly rate (e.g., `$50.00/hr`).
pub fn format_rate(rate: f64, symbol: &str, decimals: usize) -> String {
    let formatted = format_number(rate, decimals);
    match formatted.strip_prefix('-') {
        Some(rest) => format!("-{}{}/hr", symbol, rest),
        None => format!("{}{}/hr", symbol, formatted),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234.5, 2), "1,234.50");
        assert_eq!(format_number(12345678.9, 1), "12,345,678.9");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1000.0, 0), "1,000");
        assert_eq!(format_number(-0.001, 2), "0.00");
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(25220.0, "$"), "$25,220.00");
        assert_eq!(format_currency(0.0, "$"), "$0.00");
        assert_eq!(format_currency(-1500.25, "€"), "-€1,500.25");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(50.0, "$", 2), "$50.00/hr");
        assert_eq!(format_rate(97.0, "$", 0), "$97/hr");
    }
}
