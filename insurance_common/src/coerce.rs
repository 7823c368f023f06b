//! Lenient coercion of loosely-typed form values.
//!
//! Clients submit every field as whatever the form produced: usually strings,
//! sometimes numbers, sometimes nothing at all. None of these must ever fail a
//! request, so the helpers here turn any JSON value into `Option<i64>` or
//! `Option<String>` and report "missing" instead of an error.
//!
//! Integer parsing follows the usual integer-prefix rules: leading whitespace is
//! skipped, an optional sign is accepted, then as many decimal digits as are
//! present are consumed (`"12abc"` is `12`, `"abc"` is missing). Numbers are
//! truncated toward zero.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Parse the leading integer of `text`, ignoring anything after the digits.
///
/// Returns `None` when no digit follows the optional sign. Values beyond the
/// `i64` range saturate instead of overflowing.
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits: Vec<i64> = rest
        .bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .collect();
    if digits.is_empty() {
        return None;
    }

    let magnitude = digits
        .iter()
        .fold(0i64, |acc, d| acc.saturating_mul(10).saturating_add(*d));
    Some(if negative { -magnitude } else { magnitude })
}

/// Coerce an arbitrary JSON value into an integer, if it carries one.
pub fn int_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => parse_int_prefix(s),
        _ => None,
    }
}

/// Coerce an arbitrary JSON value into text. Scalars are stringified, `null`
/// and containers are treated as missing.
pub fn text_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `deserialize_with` helper for integer fields that never fails.
pub fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(int_from_value))
}

/// `deserialize_with` helper for text fields that never fails.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(text_from_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_leading_digits_only() {
        assert_eq!(parse_int_prefix("2015"), Some(2015));
        assert_eq!(parse_int_prefix("  42 years"), Some(42));
        assert_eq!(parse_int_prefix("12abc"), Some(12));
        assert_eq!(parse_int_prefix("-3"), Some(-3));
        assert_eq!(parse_int_prefix("+7"), Some(7));
        assert_eq!(parse_int_prefix("3.9"), Some(3));
    }

    #[test]
    fn rejects_text_without_digits() {
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("x12"), None);
    }

    #[test]
    fn saturates_huge_values() {
        assert_eq!(parse_int_prefix("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("-99999999999999999999999"), Some(-i64::MAX));
    }

    #[test]
    fn numbers_truncate_toward_zero() {
        assert_eq!(int_from_value(&json!(25)), Some(25));
        assert_eq!(int_from_value(&json!(25.7)), Some(25));
        assert_eq!(int_from_value(&json!(-1.5)), Some(-1));
    }

    #[test]
    fn non_scalar_values_are_missing() {
        assert_eq!(int_from_value(&json!(null)), None);
        assert_eq!(int_from_value(&json!(true)), None);
        assert_eq!(int_from_value(&json!({"year": 2020})), None);
        assert_eq!(text_from_value(&json!([1, 2])), None);
        assert_eq!(text_from_value(&json!(7)), Some("7".to_string()));
    }
}
