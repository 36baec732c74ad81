//! Positional table layout of a match report page.
//!
//! Match report pages expose their statistics tables without stable ids, so
//! each category is addressed by its index in the page's full table
//! sequence: one index for the home side, one for the away side. The layout
//! is static configuration; it is only checked against the number of tables
//! a page actually contains.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{ModelError, Result};
use crate::match_info::Side;

/// Table indices of one category for both sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotPair {
    pub home: usize,
    pub away: usize,
}

impl SlotPair {
    pub fn new(home: usize, away: usize) -> Self {
        Self { home, away }
    }

    /// Returns the index for the given side.
    pub fn for_side(&self, side: Side) -> usize {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }
}

/// Category → table slot mapping, optionally pinned to an exact table count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLayout {
    pub slots: BTreeMap<Category, SlotPair>,
    /// When set, a page must contain exactly this many tables.
    #[serde(default)]
    pub expected_table_count: Option<usize>,
}

impl Default for TableLayout {
    /// Layout of the match report pages: home tables at 3..=9, away tables
    /// at 10..=16, both in [`Category::ALL`] order.
    fn default() -> Self {
        let slots = Category::ALL
            .into_iter()
            .enumerate()
            .map(|(offset, category)| (category, SlotPair::new(3 + offset, 10 + offset)))
            .collect();
        Self {
            slots,
            expected_table_count: None,
        }
    }
}

impl TableLayout {
    /// Returns the slot pair of a category.
    pub fn slot(&self, category: Category) -> Option<SlotPair> {
        self.slots.get(&category).copied()
    }

    /// Smallest table count a page needs for every slot to be addressable.
    pub fn required_table_count(&self) -> usize {
        self.slots
            .values()
            .map(|pair| pair.home.max(pair.away) + 1)
            .max()
            .unwrap_or(0)
    }

    /// Pins the layout to an exact table count.
    #[must_use]
    pub fn with_expected_table_count(mut self, count: Option<usize>) -> Self {
        self.expected_table_count = count;
        self
    }

    /// Checks that every category is mapped and that all slots are distinct.
    pub fn validate(&self) -> Result<()> {
        let missing: Vec<&str> = Category::ALL
            .iter()
            .filter(|category| !self.slots.contains_key(category))
            .map(Category::as_str)
            .collect();
        if !missing.is_empty() {
            return Err(ModelError::InvalidLayout(format!(
                "missing categories: {}",
                missing.join(", ")
            )));
        }

        let mut seen = BTreeSet::new();
        for (category, pair) in &self.slots {
            for index in [pair.home, pair.away] {
                if !seen.insert(index) {
                    return Err(ModelError::InvalidLayout(format!(
                        "table index {index} of {category} is used more than once"
                    )));
                }
            }
        }

        if let Some(expected) = self.expected_table_count {
            let required = self.required_table_count();
            if expected < required {
                return Err(ModelError::InvalidLayout(format!(
                    "expected table count {expected} is below the {required} tables the slots address"
                )));
            }
        }
        Ok(())
    }
}
