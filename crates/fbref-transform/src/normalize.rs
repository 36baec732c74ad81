//! Per-match, per-category normalization.
//!
//! For every category the home and away tables of one page are tagged with
//! team, result, match time and matchup, stacked home first, and stripped of
//! team summary rows.

use polars::prelude::DataFrame;
use tracing::debug;

use fbref_common::string_column;
use fbref_model::{
    Category, HarvestOptions, MatchMetadata, ModelError, Side, TableBlock, TableLayout,
};

use crate::error::{Result, TransformError};
use crate::filter::filter_summary_rows;
use crate::frame::{CategoryFrame, block_to_frame, concat_diagonal};
use crate::match_time::MatchTimeRule;
use crate::metadata::extract_match_metadata;

/// Appended column holding the row's team name.
pub const TEAM_COLUMN: &str = "Team";
/// Appended column holding the team's result.
pub const RESULT_COLUMN: &str = "Result";
/// Appended column holding the cleaned match time.
pub const MATCH_TIME_COLUMN: &str = "Match Time";
/// Appended column holding `"{home} vs {away}"`.
pub const MATCHUP_COLUMN: &str = "Matchup";

/// Appended metadata columns, in order.
pub const METADATA_COLUMNS: [&str; 4] =
    [TEAM_COLUMN, RESULT_COLUMN, MATCH_TIME_COLUMN, MATCHUP_COLUMN];

/// Row counts of one category for one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStats {
    pub category: Category,
    pub home_rows: usize,
    pub away_rows: usize,
    /// Rows kept after the summary-row filter.
    pub kept_rows: usize,
}

impl CategoryStats {
    /// Rows before filtering.
    pub fn raw_rows(&self) -> usize {
        self.home_rows + self.away_rows
    }

    pub fn dropped_rows(&self) -> usize {
        self.raw_rows() - self.kept_rows
    }
}

/// Everything one page contributes to the run.
#[derive(Debug, Clone)]
pub struct MatchDatasets {
    pub metadata: MatchMetadata,
    /// One frame per category, in [`Category::ALL`] order.
    pub frames: Vec<CategoryFrame>,
    pub stats: Vec<CategoryStats>,
}

impl MatchDatasets {
    pub fn frame(&self, category: Category) -> Option<&CategoryFrame> {
        self.frames.iter().find(|frame| frame.category == category)
    }

    /// Rows kept across all categories.
    pub fn total_rows(&self) -> usize {
        self.frames.iter().map(CategoryFrame::record_count).sum()
    }
}

/// Checks a page's table count against the layout before any indexing.
pub fn check_table_count(layout: &TableLayout, table_count: usize) -> Result<()> {
    if let Some(expected) = layout.expected_table_count
        && expected != table_count
    {
        return Err(TransformError::TableCountMismatch {
            expected,
            found: table_count,
        });
    }
    for category in Category::ALL {
        let Some(pair) = layout.slot(category) else {
            continue;
        };
        for side in Side::BOTH {
            let index = pair.for_side(side);
            if index >= table_count {
                return Err(TransformError::LayoutMismatch {
                    category,
                    side,
                    index,
                    table_count,
                });
            }
        }
    }
    Ok(())
}

/// Returns the home and away tables of a category.
pub fn select_blocks<'a>(
    layout: &TableLayout,
    category: Category,
    tables: &'a [TableBlock],
) -> Result<(&'a TableBlock, &'a TableBlock)> {
    let pair = layout.slot(category).ok_or_else(|| {
        ModelError::InvalidLayout(format!("no table slots for {category}"))
    })?;
    let pick = |side: Side| {
        let index = pair.for_side(side);
        tables
            .get(index)
            .ok_or(TransformError::LayoutMismatch {
                category,
                side,
                index,
                table_count: tables.len(),
            })
    };
    Ok((pick(Side::Home)?, pick(Side::Away)?))
}

/// Builds one side's frame with the metadata columns appended.
pub fn side_frame(block: &TableBlock, metadata: &MatchMetadata, side: Side) -> Result<DataFrame> {
    let mut df = block_to_frame(block)?;
    let height = df.height();
    let matchup = metadata.matchup();
    let values = [
        metadata.team(side).to_string(),
        metadata.result(side).as_str().to_string(),
        metadata.match_time.clone(),
        matchup,
    ];
    for (name, value) in METADATA_COLUMNS.iter().zip(values) {
        df.with_column(string_column(name, vec![Some(value); height]))?;
    }
    Ok(df)
}

/// Normalizes one category of one page: tag, stack home before away, filter.
pub fn normalize_category(
    category: Category,
    home: &TableBlock,
    away: &TableBlock,
    metadata: &MatchMetadata,
) -> Result<(CategoryFrame, CategoryStats)> {
    let home_df = side_frame(home, metadata, Side::Home)?;
    let away_df = side_frame(away, metadata, Side::Away)?;
    let stats_home = home_df.height();
    let stats_away = away_df.height();

    let combined = concat_diagonal(&[home_df, away_df])?;
    let filtered = filter_summary_rows(&combined)?;
    let stats = CategoryStats {
        category,
        home_rows: stats_home,
        away_rows: stats_away,
        kept_rows: filtered.height(),
    };
    debug!(
        category = %category,
        home_rows = stats.home_rows,
        away_rows = stats.away_rows,
        kept_rows = stats.kept_rows,
        "normalized category"
    );
    Ok((CategoryFrame::new(category, filtered), stats))
}

/// Turns located page content into per-category datasets.
#[derive(Debug, Clone, Default)]
pub struct MatchNormalizer {
    layout: TableLayout,
    rule: MatchTimeRule,
}

impl MatchNormalizer {
    /// Fails when the layout misses a category or reuses a slot.
    pub fn new(layout: TableLayout, rule: MatchTimeRule) -> Result<Self> {
        layout.validate()?;
        Ok(Self { layout, rule })
    }

    pub fn from_options(options: &HarvestOptions) -> Result<Self> {
        Self::new(
            options.layout.clone(),
            MatchTimeRule::new(options.match_time_years.iter().cloned()),
        )
    }

    pub fn layout(&self) -> &TableLayout {
        &self.layout
    }

    /// Processes one page. Either every category succeeds or the page
    /// yields an error and nothing else.
    pub fn process(
        &self,
        title: &str,
        scores: &[String],
        tables: &[TableBlock],
    ) -> Result<MatchDatasets> {
        let metadata = extract_match_metadata(title, scores, &self.rule)?;
        check_table_count(&self.layout, tables.len())?;

        let mut frames = Vec::with_capacity(Category::ALL.len());
        let mut stats = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let (home, away) = select_blocks(&self.layout, category, tables)?;
            let (frame, category_stats) = normalize_category(category, home, away, &metadata)?;
            frames.push(frame);
            stats.push(category_stats);
        }

        debug!(
            matchup = %metadata.matchup(),
            match_time = %metadata.match_time,
            home_result = %metadata.home_result,
            away_result = %metadata.away_result,
            "normalized match"
        );
        Ok(MatchDatasets {
            metadata,
            frames,
            stats,
        })
    }
}
