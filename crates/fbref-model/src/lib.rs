//! Shared data model for the match-report harvester.

pub mod category;
pub mod error;
pub mod layout;
pub mod match_info;
pub mod options;
pub mod table;

pub use category::Category;
pub use error::{ModelError, Result};
pub use layout::{SlotPair, TableLayout};
pub use match_info::{MatchMetadata, MatchResult, Side};
pub use options::{
    DEFAULT_MATCH_TIME_YEARS, FailurePolicy, HarvestOptions, OutputFormat, PacingOptions,
};
pub use table::{ColumnLabel, TableBlock};
