//! Match-report ingestion.
//!
//! This crate turns source identifiers into parsed pages:
//!
//! - **Fetching**: [`DocumentSource`] with HTTP, file and caching backends
//! - **Pacing**: [`Pacer`] spaces consecutive network fetches with a random
//!   delay; [`PacedFetcher`] applies it below the cache
//! - **Table location**: [`locate_tables`] lifts every displayed `<table>` of a page
//!   into a [`fbref_model::TableBlock`] together with the title and scores
//!
//! # Example
//!
//! ```ignore
//! use fbref_ingest::{DocumentSource, HttpFetcher, locate_tables};
//!
//! let mut fetcher = HttpFetcher::new()?;
//! let html = fetcher.fetch("https://fbref.com/en/matches/3a6836b4/")?;
//! let page = locate_tables(&html)?;
//! println!("{} tables in {}", page.tables.len(), page.title);
//! ```

mod error;
mod fetch;
mod html;
mod sources;

// === Error Types ===
pub use error::{IngestError, Result};

// === Fetching ===
pub use fetch::{
    CachingFetcher, DocumentSource, FileFetcher, HttpFetcher, PacedFetcher, Pacer, SourceRouter,
    USER_AGENTS, is_remote,
};

// === Page Parsing ===
pub use html::{MatchPage, locate_tables, parse_table};

// === Source Lists ===
pub use sources::{load_source_list, parse_source_list};
