//! Cross-match accumulation of category datasets.

use std::collections::BTreeMap;

use polars::prelude::DataFrame;

use fbref_model::Category;

use crate::error::Result;
use crate::frame::{CategoryFrame, concat_diagonal};
use crate::normalize::MatchDatasets;

/// Append-only per-category store of match frames, in arrival order.
#[derive(Debug, Default)]
pub struct CategoryAccumulator {
    parts: BTreeMap<Category, Vec<DataFrame>>,
    matches: usize,
}

impl CategoryAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one match in. All of its categories are appended together.
    pub fn append(&mut self, datasets: MatchDatasets) {
        for frame in datasets.frames {
            self.parts.entry(frame.category).or_default().push(frame.data);
        }
        self.matches += 1;
    }

    /// Number of matches folded so far.
    pub fn match_count(&self) -> usize {
        self.matches
    }

    /// Rows accumulated for one category.
    pub fn row_count(&self, category: Category) -> usize {
        self.parts
            .get(&category)
            .map_or(0, |frames| frames.iter().map(DataFrame::height).sum())
    }

    /// Stacks every category's frames; categories without rows finish empty.
    pub fn finish(self) -> Result<AggregatedDatasets> {
        let mut frames = Vec::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let data = match self.parts.get(&category) {
                Some(parts) => concat_diagonal(parts)?,
                None => DataFrame::empty(),
            };
            frames.push(CategoryFrame::new(category, data));
        }
        Ok(AggregatedDatasets {
            frames,
            match_count: self.matches,
        })
    }
}

/// Final per-category datasets of a run, in [`Category::ALL`] order.
#[derive(Debug, Clone)]
pub struct AggregatedDatasets {
    frames: Vec<CategoryFrame>,
    match_count: usize,
}

impl AggregatedDatasets {
    /// Builds datasets directly from frames, e.g. for export tests.
    pub fn from_frames(frames: Vec<CategoryFrame>, match_count: usize) -> Self {
        Self {
            frames,
            match_count,
        }
    }

    pub fn get(&self, category: Category) -> Option<&CategoryFrame> {
        self.frames.iter().find(|frame| frame.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryFrame> {
        self.frames.iter()
    }

    pub fn match_count(&self) -> usize {
        self.match_count
    }

    pub fn total_rows(&self) -> usize {
        self.frames.iter().map(CategoryFrame::record_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fbref_common::string_column;
    use fbref_model::{MatchMetadata, MatchResult};

    fn metadata() -> MatchMetadata {
        MatchMetadata {
            home_team: "Arsenal".to_string(),
            away_team: "Chelsea".to_string(),
            home_result: MatchResult::Draw,
            away_result: MatchResult::Draw,
            match_time_raw: "Sunday October 22, 2023".to_string(),
            match_time: "Sunday October 22, 2023".to_string(),
        }
    }

    fn players(names: &[&str]) -> DataFrame {
        let values = names.iter().map(|name| Some((*name).to_string())).collect();
        DataFrame::new(vec![string_column("Player", values)]).unwrap()
    }

    fn summary_only(names: &[&str]) -> MatchDatasets {
        MatchDatasets {
            metadata: metadata(),
            frames: vec![CategoryFrame::new(Category::Summary, players(names))],
            stats: Vec::new(),
        }
    }

    #[test]
    fn keeps_arrival_order() {
        let mut accumulator = CategoryAccumulator::new();
        accumulator.append(summary_only(&["Saka", "Rice"]));
        accumulator.append(summary_only(&["Palmer"]));
        assert_eq!(accumulator.match_count(), 2);
        assert_eq!(accumulator.row_count(Category::Summary), 3);

        let datasets = accumulator.finish().unwrap();
        let summary = datasets.get(Category::Summary).unwrap();
        let names: Vec<Option<&str>> = summary
            .data
            .column("Player")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(names, vec![Some("Saka"), Some("Rice"), Some("Palmer")]);
    }

    #[test]
    fn missing_categories_finish_empty() {
        let datasets = CategoryAccumulator::new().finish().unwrap();
        assert_eq!(datasets.iter().count(), 7);
        assert_eq!(datasets.total_rows(), 0);
        assert_eq!(datasets.match_count(), 0);
    }
}
