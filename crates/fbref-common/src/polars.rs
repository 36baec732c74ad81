//! Polars helpers for text-valued statistics frames.
//!
//! Statistics cells are carried as nullable `String` columns end to end;
//! numeric interpretation only happens when a value is written out.

use polars::prelude::*;

/// Converts a Polars `AnyValue` to its cell text.
///
/// Returns an empty string for `Null` and formats floats without trailing
/// zeros.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use fbref_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::String("Rodri")), "Rodri");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Like [`any_to_string`] but keeps nulls as `None`.
pub fn any_to_string_opt(value: AnyValue<'_>) -> Option<String> {
    match value {
        AnyValue::Null => None,
        other => Some(any_to_string(other)),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use fbref_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(0.25), "0.25");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a string as `i64`, returning `None` for invalid or empty strings.
pub fn parse_i64(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<i64>().ok()
}

/// Builds a nullable `String` column.
pub fn string_column(name: &str, values: Vec<Option<String>>) -> Column {
    Series::new(name.into(), values).into_column()
}

/// Builds an all-null `String` column of the given length.
pub fn null_string_column(name: &str, len: usize) -> Column {
    Series::full_null(name.into(), len, &DataType::String).into_column()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_string_null() {
        assert_eq!(any_to_string(AnyValue::Null), "");
        assert_eq!(any_to_string_opt(AnyValue::Null), None);
    }

    #[test]
    fn test_any_to_string_numbers() {
        assert_eq!(any_to_string(AnyValue::Int64(-3)), "-3");
        assert_eq!(any_to_string(AnyValue::Float64(1.50)), "1.5");
    }

    #[test]
    fn test_format_numeric_keeps_integer_zeros() {
        assert_eq!(format_numeric(90.0), "90");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(0.0), "0");
    }

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64(" 87.5 "), Some(87.5));
        assert_eq!(parse_f64("25-123"), None);
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("NaN"), None);
    }

    #[test]
    fn test_parse_i64() {
        assert_eq!(parse_i64("2"), Some(2));
        assert_eq!(parse_i64(" 1\n"), Some(1));
        assert_eq!(parse_i64("2.0"), None);
        assert_eq!(parse_i64("two"), None);
    }

    #[test]
    fn test_string_columns() {
        let column = string_column("Player", vec![Some("Rodri".to_string()), None]);
        assert_eq!(column.len(), 2);
        assert_eq!(column.null_count(), 1);
        let empty = null_string_column("Team", 3);
        assert_eq!(empty.null_count(), 3);
        assert_eq!(empty.dtype(), &DataType::String);
    }
}
