//! # Shared Validation & Formatting
//!
//! Tolerant parsing and display formatting used by every tool. The contract
//! is that no unparseable text input ever surfaces as an error or a NaN in a
//! result: numeric fields fall back to a documented default (0 for amounts,
//! 1 for counts and divisors) and computation proceeds.
//!
//! ## Example
//!
//! ```rust
//! use toolpack_core::format::{parse_amount, parse_count, currency, thousands};
//!
//! assert_eq!(parse_amount("12.5"), 12.5);
//! assert_eq!(parse_amount("not a number"), 0.0);
//! assert_eq!(parse_count("", 1), 1);
//! assert_eq!(currency(29.999), "30.00");
//! assert_eq!(thousands(1234567), "1,234,567");
//! ```

/// Parse an amount-like field, falling back to 0.0.
///
/// Rejects non-finite values so NaN/infinity can never enter a result.
pub fn parse_amount(text: &str) -> f64 {
    parse_or(text, 0.0)
}

/// Parse a numeric field with a caller-supplied fallback.
pub fn parse_or(text: &str, fallback: f64) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => fallback,
    }
}

/// Parse a count-like field with a fallback, clamped to a minimum of 1.
///
/// Counts act as divisors or sizes, so 0 is never a valid outcome.
pub fn parse_count(text: &str, fallback: u32) -> u32 {
    let parsed = text.trim().parse::<u32>().unwrap_or(fallback);
    parsed.max(1)
}

/// Format a currency-like value to two decimal places.
pub fn currency(value: f64) -> String {
    format!("{:.2}", value)
}

/// Format a large count with comma thousands separators.
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Signed variant of [`thousands`].
pub fn thousands_i64(value: i64) -> String {
    if value < 0 {
        format!("-{}", thousands(value.unsigned_abs()))
    } else {
        thousands(value as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount_fallbacks() {
        assert_eq!(parse_amount("50"), 50.0);
        assert_eq!(parse_amount("  3.25  "), 3.25);
        assert_eq!(parse_amount(""), 0.0);
        assert_eq!(parse_amount("abc"), 0.0);
        assert_eq!(parse_amount("NaN"), 0.0);
        assert_eq!(parse_amount("inf"), 0.0);
    }

    #[test]
    fn test_parse_count_minimum_one() {
        assert_eq!(parse_count("4", 1), 4);
        assert_eq!(parse_count("0", 1), 1);
        assert_eq!(parse_count("oops", 2), 2);
        assert_eq!(parse_count("-3", 1), 1);
    }

    #[test]
    fn test_currency_two_decimals() {
        assert_eq!(currency(60.0), "60.00");
        assert_eq!(currency(29.995), "30.00");
        assert_eq!(currency(0.1), "0.10");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1234567), "1,234,567");
        assert_eq!(thousands_i64(-45678), "-45,678");
    }
}
