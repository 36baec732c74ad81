//! Statistical categories published per team on a match report page.
//!
//! Every match report carries the same seven player-statistics groupings for
//! each side. The category is the partition key of the exported datasets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// One of the seven per-team statistics groupings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Headline per-player numbers (goals, shots, touches, ...).
    Summary,
    /// Completion and distance of passes.
    Passing,
    /// Pass types (live, dead, crosses, ...).
    PassType,
    /// Tackles, blocks and interceptions.
    DefensiveAction,
    /// Touches, carries and take-ons.
    Possession,
    /// Cards, fouls and aerial duels.
    MiscellaneousStats,
    /// Goalkeeper shot stopping and distribution.
    Goalkeeper,
}

impl Category {
    /// All categories in export order.
    pub const ALL: [Category; 7] = [
        Category::Summary,
        Category::Passing,
        Category::PassType,
        Category::DefensiveAction,
        Category::Possession,
        Category::MiscellaneousStats,
        Category::Goalkeeper,
    ];

    /// Returns the snake_case name used in configuration and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Summary => "summary",
            Category::Passing => "passing",
            Category::PassType => "pass_type",
            Category::DefensiveAction => "defensive_action",
            Category::Possession => "possession",
            Category::MiscellaneousStats => "miscellaneous_stats",
            Category::Goalkeeper => "goalkeeper",
        }
    }

    /// Returns the output partition name: first letter upper-cased, the rest
    /// lower-cased (`pass_type` becomes `Pass_type`).
    pub fn sheet_name(&self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    /// Accepts the snake_case name or the sheet name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == normalized)
            .ok_or_else(|| ModelError::UnknownCategory(s.to_string()))
    }
}
