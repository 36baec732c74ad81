//! Normalization of match-report tables into per-category datasets.
//!
//! Pages arrive as located tables plus title and score text. Each page is
//! turned into one [`CategoryFrame`] per category by [`MatchNormalizer`];
//! frames of successive pages are folded into a [`CategoryAccumulator`]
//! and stacked in arrival order when the run finishes.

pub mod aggregate;
pub mod columns;
pub mod error;
pub mod filter;
pub mod frame;
pub mod match_time;
pub mod metadata;
pub mod normalize;

pub use aggregate::{AggregatedDatasets, CategoryAccumulator};
pub use columns::{flatten_label, flattened_names};
pub use error::{Result, TransformError};
pub use filter::{filter_summary_rows, is_summary_text};
pub use frame::{CategoryFrame, block_to_frame, concat_diagonal};
pub use match_time::MatchTimeRule;
pub use metadata::extract_match_metadata;
pub use normalize::{
    CategoryStats, MATCH_TIME_COLUMN, MATCHUP_COLUMN, METADATA_COLUMNS, MatchDatasets,
    MatchNormalizer, RESULT_COLUMN, TEAM_COLUMN, check_table_count,
};
