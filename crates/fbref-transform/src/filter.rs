//! Removal of team summary rows.

use std::sync::LazyLock;

use polars::prelude::{BooleanChunked, DataFrame, DataType, NewChunkedArray};
use regex::Regex;

use crate::error::Result;

/// Matches the footer of a player table, e.g. `"14 Players"`.
static SUMMARY_ROW: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\s+Players").expect("Invalid summary row regex"));

/// True when the text contains a summary marker anywhere.
pub fn is_summary_text(value: &str) -> bool {
    SUMMARY_ROW.is_match(value)
}

/// Per-row flags: `true` for rows where no string cell holds a summary marker.
pub fn summary_row_mask(df: &DataFrame) -> Result<Vec<bool>> {
    let mut keep = vec![true; df.height()];
    for column in df.get_columns() {
        if column.dtype() != &DataType::String {
            continue;
        }
        let values = column.str()?;
        for (idx, value) in values.into_iter().enumerate() {
            if value.is_some_and(is_summary_text) {
                keep[idx] = false;
            }
        }
    }
    Ok(keep)
}

/// Drops every row with a summary marker in any string cell.
pub fn filter_summary_rows(df: &DataFrame) -> Result<DataFrame> {
    let keep = summary_row_mask(df)?;
    if keep.iter().all(|flag| *flag) {
        return Ok(df.clone());
    }
    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    Ok(df.filter(&mask)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fbref_common::string_column;

    fn frame(players: &[Option<&str>], minutes: &[Option<&str>]) -> DataFrame {
        let to_owned = |values: &[Option<&str>]| -> Vec<Option<String>> {
            values.iter().map(|v| v.map(str::to_string)).collect()
        };
        DataFrame::new(vec![
            string_column("Player", to_owned(players)),
            string_column("Min", to_owned(minutes)),
        ])
        .unwrap()
    }

    #[test]
    fn marker_detection() {
        assert!(is_summary_text("14 Players"));
        assert!(is_summary_text("Squad total: 11  Players"));
        assert!(!is_summary_text("Players"));
        assert!(!is_summary_text("Player"));
        assert!(!is_summary_text("11 players"));
    }

    #[test]
    fn drops_rows_with_marker_in_any_column() {
        let df = frame(
            &[Some("Rodri"), Some("14 Players"), Some("Saka"), None],
            &[Some("90"), Some("990"), Some("3 Players"), Some("12")],
        );
        let filtered = filter_summary_rows(&df).unwrap();
        assert_eq!(filtered.height(), 2);
        let players = filtered.column("Player").unwrap().str().unwrap();
        assert_eq!(players.get(0), Some("Rodri"));
        assert_eq!(players.get(1), None);
    }

    #[test]
    fn keeps_frame_without_markers() {
        let df = frame(&[Some("Rodri")], &[Some("90")]);
        let filtered = filter_summary_rows(&df).unwrap();
        assert_eq!(filtered.height(), 1);
    }
}
