use tracing::debug;

use crate::error::Result;

use super::{DocumentSource, FileFetcher};

/// True for `http://` and `https://` identifiers.
pub fn is_remote(source: &str) -> bool {
    let lower = source.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Sends URLs to a remote source and everything else to the file system.
pub struct SourceRouter<R> {
    remote: R,
    local: FileFetcher,
}

impl<R: DocumentSource> SourceRouter<R> {
    pub fn new(remote: R) -> Self {
        Self {
            remote,
            local: FileFetcher::new(),
        }
    }
}

impl<R: DocumentSource> DocumentSource for SourceRouter<R> {
    fn fetch(&mut self, source: &str) -> Result<String> {
        if is_remote(source) {
            self.remote.fetch(source)
        } else {
            debug!(source, "routing to local file");
            self.local.fetch(source)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IngestError;

    struct Remote(Vec<String>);

    impl DocumentSource for Remote {
        fn fetch(&mut self, source: &str) -> Result<String> {
            self.0.push(source.to_string());
            Ok("<h1>remote</h1>".to_string())
        }
    }

    #[test]
    fn detects_remote_identifiers() {
        assert!(is_remote("https://fbref.com/en/matches/3a6836b4/"));
        assert!(is_remote("HTTP://example.org"));
        assert!(!is_remote("pages/match.html"));
        assert!(!is_remote("file:///tmp/match.html"));
    }

    #[test]
    fn routes_by_identifier() {
        let mut router = SourceRouter::new(Remote(Vec::new()));
        assert_eq!(
            router.fetch("https://fbref.com/en/matches/1").unwrap(),
            "<h1>remote</h1>"
        );
        let error = router.fetch("does/not/exist.html").unwrap_err();
        assert!(matches!(error, IngestError::FileRead { .. }));
        assert_eq!(router.remote.0, vec!["https://fbref.com/en/matches/1"]);
    }
}
