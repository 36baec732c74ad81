use std::path::PathBuf;

use thiserror::Error;

use fbref_ingest::IngestError;
use fbref_model::{Category, MatchResult, OutputFormat};
use fbref_transform::TransformError;

/// Why a single document could not be folded into the run.
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
    #[error(transparent)]
    Transform(#[from] TransformError),
}

impl DocumentError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Ingest(error) if error.is_parse() => FailureKind::Parse,
            Self::Ingest(_) => FailureKind::Retrieval,
            Self::Transform(TransformError::MetadataParse { .. }) => FailureKind::Metadata,
            Self::Transform(error) if error.is_layout_mismatch() => FailureKind::Layout,
            Self::Transform(_) => FailureKind::Frame,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Retrieval,
    Parse,
    Metadata,
    Layout,
    Frame,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::Retrieval => "retrieval",
            FailureKind::Parse => "parse",
            FailureKind::Metadata => "metadata",
            FailureKind::Layout => "layout",
            FailureKind::Frame => "frame",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DocumentFailure {
    /// 1-based position in the source list.
    pub index: usize,
    pub source: String,
    pub kind: FailureKind,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct MatchSummary {
    pub source: String,
    pub matchup: String,
    pub match_time: String,
    pub home_result: MatchResult,
    pub away_result: MatchResult,
    pub rows: usize,
}

#[derive(Debug, Clone)]
pub struct CategorySummary {
    pub category: Category,
    pub sheet_name: String,
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug)]
pub struct HarvestResult {
    pub format: OutputFormat,
    pub outputs: Vec<PathBuf>,
    pub documents: usize,
    pub matches: Vec<MatchSummary>,
    pub categories: Vec<CategorySummary>,
    pub failures: Vec<DocumentFailure>,
    pub has_errors: bool,
}
