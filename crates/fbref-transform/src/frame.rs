//! Category frame types and DataFrame construction helpers.
//!
//! This module provides the [`CategoryFrame`] type which wraps a Polars
//! DataFrame with the statistical category it belongs to, plus the helpers
//! that turn [`TableBlock`]s into frames and stack frames with differing
//! columns.

use polars::prelude::{Column, DataFrame};

use fbref_common::{null_string_column, string_column};
use fbref_model::{Category, TableBlock};

use crate::columns::flattened_names;
use crate::error::Result;

/// Rows of one statistical category, for one match or for a whole run.
#[derive(Debug, Clone)]
pub struct CategoryFrame {
    /// The category the rows belong to.
    pub category: Category,
    /// The rows as a DataFrame of nullable `String` columns.
    pub data: DataFrame,
}

impl CategoryFrame {
    pub fn new(category: Category, data: DataFrame) -> Self {
        Self { category, data }
    }

    /// A frame without columns or rows.
    pub fn empty(category: Category) -> Self {
        Self::new(category, DataFrame::empty())
    }

    /// Returns the number of rows in the frame.
    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    /// Output partition name of the frame's category.
    pub fn sheet_name(&self) -> String {
        self.category.sheet_name()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .into_iter()
            .map(ToString::to_string)
            .collect()
    }
}

/// Builds a DataFrame from a table block, flattening multi-level labels.
pub fn block_to_frame(block: &TableBlock) -> Result<DataFrame> {
    let names = flattened_names(block);
    let columns: Vec<Column> = names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let values: Vec<Option<String>> = block
                .rows
                .iter()
                .map(|row| row.get(index).cloned().flatten())
                .collect();
            string_column(name, values)
        })
        .collect();
    Ok(DataFrame::new(columns)?)
}

/// Stacks frames row-wise over the union of their columns.
///
/// Columns keep the order of first appearance; cells of columns a frame
/// lacks are null. Row order is the order of `frames`.
pub fn concat_diagonal(frames: &[DataFrame]) -> Result<DataFrame> {
    let mut names: Vec<String> = Vec::new();
    for frame in frames {
        for name in frame.get_column_names() {
            if !names.iter().any(|known| known.as_str() == name.as_str()) {
                names.push(name.to_string());
            }
        }
    }

    let mut stacked: Option<DataFrame> = None;
    for frame in frames {
        let height = frame.height();
        let columns: Vec<Column> = names
            .iter()
            .map(|name| match frame.column(name) {
                Ok(column) => column.clone(),
                Err(_) => null_string_column(name, height),
            })
            .collect();
        let aligned = DataFrame::new(columns)?;
        match stacked.as_mut() {
            Some(existing) => {
                existing.vstack_mut(&aligned)?;
            }
            None => stacked = Some(aligned),
        }
    }
    Ok(stacked.unwrap_or_else(DataFrame::empty))
}
