//! Settings that steer a harvest run.

use serde::{Deserialize, Serialize};

use crate::layout::TableLayout;

/// Year tokens used to cut the match-time text when none are configured.
pub const DEFAULT_MATCH_TIME_YEARS: [&str; 2] = ["2023", "2024"];

/// Output container for the aggregated datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Single workbook, one sheet per category.
    #[default]
    Xlsx,
    /// Directory with one CSV file per category.
    Csv,
}

/// What to do when a single document fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Stop the run; nothing is exported.
    #[default]
    Abort,
    /// Record the failure, drop the document and continue.
    Skip,
}

/// Bounds of the random delay between two fetches, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PacingOptions {
    pub min_secs: u64,
    pub max_secs: u64,
}

impl Default for PacingOptions {
    fn default() -> Self {
        Self {
            min_secs: 1,
            max_secs: 20,
        }
    }
}

impl PacingOptions {
    /// No delay at all (offline replays, tests).
    pub fn disabled() -> Self {
        Self {
            min_secs: 0,
            max_secs: 0,
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.max_secs == 0
    }
}

/// Options consumed by the per-document pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestOptions {
    pub layout: TableLayout,
    pub match_time_years: Vec<String>,
    pub failure_policy: FailurePolicy,
    pub pacing: PacingOptions,
    pub output_format: OutputFormat,
}

impl Default for HarvestOptions {
    fn default() -> Self {
        Self {
            layout: TableLayout::default(),
            match_time_years: DEFAULT_MATCH_TIME_YEARS
                .iter()
                .map(ToString::to_string)
                .collect(),
            failure_policy: FailurePolicy::default(),
            pacing: PacingOptions::default(),
            output_format: OutputFormat::default(),
        }
    }
}

impl HarvestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_layout(mut self, layout: TableLayout) -> Self {
        self.layout = layout;
        self
    }

    #[must_use]
    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    #[must_use]
    pub fn with_pacing(mut self, pacing: PacingOptions) -> Self {
        self.pacing = pacing;
        self
    }

    #[must_use]
    pub fn with_match_time_years(mut self, years: Vec<String>) -> Self {
        self.match_time_years = years;
        self
    }
}
