//! Error types for match normalization.

use polars::prelude::PolarsError;
use thiserror::Error;

use fbref_model::{Category, ModelError, Side};

/// Errors raised while turning a page's tables into category datasets.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Title or score text does not have the expected shape.
    #[error("cannot parse match metadata from '{text}': {reason}")]
    MetadataParse { text: String, reason: String },

    /// A mapped table index points past the page's table sequence.
    #[error(
        "layout mismatch: {category} {side} table is mapped to index {index} but the page has {table_count} tables"
    )]
    LayoutMismatch {
        category: Category,
        side: Side,
        index: usize,
        table_count: usize,
    },

    /// The page's table count differs from the layout's pinned count.
    #[error("layout mismatch: expected {expected} tables, page has {found}")]
    TableCountMismatch { expected: usize, found: usize },

    /// The configured layout cannot be used.
    #[error(transparent)]
    InvalidLayout(#[from] ModelError),

    /// A DataFrame operation failed.
    #[error("DataFrame operation failed: {0}")]
    Frame(#[from] PolarsError),
}

impl TransformError {
    pub(crate) fn metadata(text: &str, reason: impl Into<String>) -> Self {
        Self::MetadataParse {
            text: text.to_string(),
            reason: reason.into(),
        }
    }

    /// True when the page does not fit the configured table layout.
    pub fn is_layout_mismatch(&self) -> bool {
        matches!(
            self,
            Self::LayoutMismatch { .. } | Self::TableCountMismatch { .. }
        )
    }
}

/// Result type for normalization operations.
pub type Result<T> = std::result::Result<T, TransformError>;
