//! Output generation for harvested match datasets.
//!
//! - **Workbook**: one worksheet per category (`.xlsx`)
//! - **CSV**: one `<Sheet>.csv` file per category in a directory

mod common;
mod csv;
mod error;
mod xlsx;

use std::path::{Path, PathBuf};

use fbref_model::OutputFormat;
use fbref_transform::AggregatedDatasets;

pub use common::{CellValue, cell_value};
pub use csv::write_csv_dir;
pub use error::{ReportError, Result};
pub use xlsx::write_workbook;

/// Writes the datasets in the requested format and returns the written paths.
pub fn write_output(
    datasets: &AggregatedDatasets,
    format: OutputFormat,
    destination: &Path,
) -> Result<Vec<PathBuf>> {
    match format {
        OutputFormat::Xlsx => Ok(vec![write_workbook(datasets, destination)?]),
        OutputFormat::Csv => write_csv_dir(datasets, destination),
    }
}
