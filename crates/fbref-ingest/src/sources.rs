//! Source lists: one document identifier per line.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Reads source identifiers from a text file.
///
/// Blank lines and lines starting with `#` are ignored; surrounding
/// whitespace is trimmed.
pub fn load_source_list(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|error| IngestError::FileRead {
        path: path.to_path_buf(),
        source: error,
    })?;
    Ok(parse_source_list(&content))
}

/// Parses the content of a source list.
pub fn parse_source_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect()
}
