//! Raw tabular blocks lifted out of a match report page.

use serde::{Deserialize, Serialize};

/// Column label of a table, one entry per header row.
///
/// Single-row headers give one level; the statistics tables usually carry a
/// group row above the column row and therefore two levels
/// (`["Performance", "Gls"]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnLabel {
    pub levels: Vec<String>,
}

impl ColumnLabel {
    pub fn single(name: impl Into<String>) -> Self {
        Self {
            levels: vec![name.into()],
        }
    }

    pub fn pair(group: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            levels: vec![group.into(), name.into()],
        }
    }

    pub fn depth(&self) -> usize {
        self.levels.len()
    }
}

/// One table of a page: labelled columns and rows of rendered cell text.
///
/// Cells are `None` where the page renders nothing. Every row has exactly
/// `columns.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBlock {
    pub columns: Vec<ColumnLabel>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl TableBlock {
    pub fn new(columns: Vec<ColumnLabel>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { columns, rows }
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Deepest header of any column.
    pub fn header_depth(&self) -> usize {
        self.columns.iter().map(ColumnLabel::depth).max().unwrap_or(0)
    }

    pub fn is_multi_level(&self) -> bool {
        self.header_depth() > 1
    }

    /// Returns the text of a cell, `None` when absent or out of range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column)?.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_depth_reports_multi_level() {
        let table = TableBlock::new(
            vec![
                ColumnLabel::pair("Unnamed: 0_level_0", "Player"),
                ColumnLabel::pair("Performance", "Gls"),
            ],
            vec![vec![Some("Erling Haaland".to_string()), Some("2".to_string())]],
        );
        assert!(table.is_multi_level());
        assert_eq!(table.cell(0, 1), Some("2"));
        assert_eq!(table.cell(3, 1), None);
    }
}
