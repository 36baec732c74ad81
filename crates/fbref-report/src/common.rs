//! Shared helpers for report generation.

use polars::prelude::{AnyValue, Column};

use fbref_common::{any_to_string_opt, parse_f64};

/// How a single cell is written out.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Blank,
    Number(f64),
    Text(String),
}

/// Classifies a cell: numeric text becomes a number, nulls stay blank.
///
/// Thousands-grouped numbers such as `1,210` count as numeric.
pub fn cell_value(value: AnyValue<'_>) -> CellValue {
    match any_to_string_opt(value) {
        None => CellValue::Blank,
        Some(text) => match parse_f64(&text).or_else(|| parse_grouped(&text)) {
            Some(number) => CellValue::Number(number),
            None if text.is_empty() => CellValue::Blank,
            None => CellValue::Text(text),
        },
    }
}

/// Parses `1,210` / `-12,345.5`: one to three leading digits, then groups of
/// exactly three.
fn parse_grouped(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);
    let integer = unsigned.split('.').next()?;
    let groups: Vec<&str> = integer.split(',').collect();
    let digits = |group: &str| group.bytes().all(|b| b.is_ascii_digit());
    let (&first, rest) = groups.split_first()?;
    let valid = !rest.is_empty()
        && (1..=3).contains(&first.len())
        && digits(first)
        && rest.iter().all(|&group| group.len() == 3 && digits(group));
    if !valid {
        return None;
    }
    parse_f64(&trimmed.replace(',', ""))
}

/// Reads one cell of a column.
pub fn column_cell(column: &Column, row: usize) -> CellValue {
    cell_value(column.get(row).unwrap_or(AnyValue::Null))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_cells() {
        assert_eq!(cell_value(AnyValue::Null), CellValue::Blank);
        assert_eq!(cell_value(AnyValue::String("90")), CellValue::Number(90.0));
        assert_eq!(cell_value(AnyValue::String(" 0.35")), CellValue::Number(0.35));
        assert_eq!(
            cell_value(AnyValue::String("ENG")),
            CellValue::Text("ENG".to_string())
        );
        assert_eq!(
            cell_value(AnyValue::String("25-123")),
            CellValue::Text("25-123".to_string())
        );
        assert_eq!(cell_value(AnyValue::String("")), CellValue::Blank);
    }

    #[test]
    fn thousands_grouped_numbers_are_numeric() {
        assert_eq!(cell_value(AnyValue::String("1,210")), CellValue::Number(1210.0));
        assert_eq!(
            cell_value(AnyValue::String("-12,345.5")),
            CellValue::Number(-12345.5)
        );
        for text in ["1,2", "12,34,567", ",123", "1,234,", "Smith, John"] {
            assert_eq!(
                cell_value(AnyValue::String(text)),
                CellValue::Text(text.to_string()),
                "{text}"
            );
        }
    }
}
