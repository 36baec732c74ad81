//! CSV directory output: one file per category.

use std::fs::File;
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, SerWriter};
use tracing::info;

use fbref_transform::AggregatedDatasets;

use crate::error::{ReportError, Result};

/// Writes `<Sheet>.csv` for every category into `dir`.
///
/// Categories without columns get an empty file.
pub fn write_csv_dir(datasets: &AggregatedDatasets, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).map_err(|source| ReportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut outputs = Vec::new();
    for frame in datasets.iter() {
        let path = dir.join(format!("{}.csv", frame.sheet_name()));
        let mut file = File::create(&path).map_err(|source| ReportError::Io {
            path: path.clone(),
            source,
        })?;
        if frame.data.width() == 0 {
            outputs.push(path);
            continue;
        }
        let mut data = frame.data.clone();
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut data)
            .map_err(|source| ReportError::Csv {
                path: path.clone(),
                source,
            })?;
        outputs.push(path);
    }

    info!(dir = %dir.display(), files = outputs.len(), "csv files written");
    Ok(outputs)
}
