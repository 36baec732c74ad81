use std::path::PathBuf;

use tracing::debug;

use crate::error::{IngestError, Result};

use super::DocumentSource;

/// Reads documents from local files; identifiers are paths or `file://` URLs.
#[derive(Debug, Clone, Default)]
pub struct FileFetcher {
    base_dir: Option<PathBuf>,
}

impl FileFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves relative identifiers against `dir`.
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    fn resolve(&self, source: &str) -> PathBuf {
        let path = PathBuf::from(source.strip_prefix("file://").unwrap_or(source));
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path,
        }
    }
}

impl DocumentSource for FileFetcher {
    fn fetch(&mut self, source: &str) -> Result<String> {
        let path = self.resolve(source);
        debug!(path = %path.display(), "reading document");
        std::fs::read_to_string(&path).map_err(|error| IngestError::FileRead { path, source: error })
    }
}
