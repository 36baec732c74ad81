//! Error types for match-report ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while retrieving or parsing a source document.
#[derive(Debug, Error)]
pub enum IngestError {
    // === Retrieval Errors ===
    /// The request could not be sent or the body could not be read.
    #[error("failed to retrieve {source_id}: {message}")]
    Retrieval { source_id: String, message: String },

    /// The server answered with a non-success status.
    #[error("failed to retrieve {source_id}: HTTP {status}")]
    HttpStatus { source_id: String, status: u16 },

    /// Offline mode and the document is not cached.
    #[error("{source_id} is not cached in {cache_dir}")]
    NotCached {
        source_id: String,
        cache_dir: PathBuf,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    // === File System Errors ===
    /// Failed to read a local file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a local file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Page Structure Errors ===
    /// The page has no `<h1>` title.
    #[error("page has no title element")]
    MissingTitle,

    /// The page has fewer than two score elements.
    #[error("page has {found} score element(s), expected 2")]
    MissingScores { found: usize },

    /// A CSS selector failed to compile.
    #[error("invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },
}

impl IngestError {
    /// True for failures of the retrieval step (network, status, cache miss).
    pub fn is_retrieval(&self) -> bool {
        matches!(
            self,
            Self::Retrieval { .. } | Self::HttpStatus { .. } | Self::NotCached { .. }
        )
    }

    /// True when the document was fetched but its page structure is unusable.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::MissingTitle | Self::MissingScores { .. })
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
