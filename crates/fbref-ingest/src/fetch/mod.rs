//! Retrieval of raw match report documents.
//!
//! The pipeline only depends on [`DocumentSource`]; the implementations here
//! are thin wrappers around HTTP, the local file system and an on-disk cache,
//! plus a router that picks between remote and local by identifier.

mod cache;
mod file;
mod http;
mod pacing;
mod route;

pub use cache::CachingFetcher;
pub use file::FileFetcher;
pub use http::{HttpFetcher, USER_AGENTS};
pub use pacing::{PacedFetcher, Pacer};
pub use route::{SourceRouter, is_remote};

use crate::error::Result;

/// Anything that can turn a source identifier into raw HTML.
pub trait DocumentSource {
    /// Returns the raw content of one document.
    fn fetch(&mut self, source: &str) -> Result<String>;
}

impl<S: DocumentSource + ?Sized> DocumentSource for Box<S> {
    fn fetch(&mut self, source: &str) -> Result<String> {
        (**self).fetch(source)
    }
}
