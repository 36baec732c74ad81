use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

use super::DocumentSource;

/// Stores fetched documents under a directory and serves repeats from it.
///
/// Without an inner source the fetcher is offline: a cache miss is an error.
pub struct CachingFetcher<S> {
    cache_dir: PathBuf,
    inner: Option<S>,
}

impl<S: DocumentSource> CachingFetcher<S> {
    pub fn new(cache_dir: impl Into<PathBuf>, inner: S) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            inner: Some(inner),
        }
    }

    /// Cache-only fetcher that never touches the network.
    pub fn offline(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            inner: None,
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// File under the cache directory holding a source's HTML.
    pub fn cache_path(&self, source: &str) -> PathBuf {
        let stem: String = source
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .chars()
            .map(|ch| if ch.is_ascii_alphanumeric() || ch == '-' || ch == '.' { ch } else { '_' })
            .collect();
        self.cache_dir.join(format!("{stem}.html"))
    }

    fn store(&self, path: &Path, html: &str) -> Result<()> {
        std::fs::create_dir_all(&self.cache_dir).map_err(|error| IngestError::FileWrite {
            path: self.cache_dir.clone(),
            source: error,
        })?;
        std::fs::write(path, html).map_err(|error| IngestError::FileWrite {
            path: path.to_path_buf(),
            source: error,
        })?;
        debug!(path = %path.display(), "cached document");
        Ok(())
    }
}

impl<S: DocumentSource> DocumentSource for CachingFetcher<S> {
    fn fetch(&mut self, source: &str) -> Result<String> {
        let path = self.cache_path(source);
        if path.is_file() {
            debug!(path = %path.display(), "serving document from cache");
            return std::fs::read_to_string(&path)
                .map_err(|error| IngestError::FileRead { path, source: error });
        }

        let Some(inner) = self.inner.as_mut() else {
            return Err(IngestError::NotCached {
                source_id: source.to_string(),
                cache_dir: self.cache_dir.clone(),
            });
        };
        let html = inner.fetch(source)?;
        self.store(&path, &html)?;
        Ok(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FileFetcher;

    #[test]
    fn cache_path_is_flat_and_safe() {
        let fetcher: CachingFetcher<FileFetcher> = CachingFetcher::offline("cache");
        let path = fetcher.cache_path("https://fbref.com/en/matches/3a6836b4/Burnley-Manchester-City");
        assert_eq!(
            path,
            Path::new("cache").join("fbref.com_en_matches_3a6836b4_Burnley-Manchester-City.html")
        );
    }
}
