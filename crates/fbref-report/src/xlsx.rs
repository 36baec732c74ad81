//! Excel workbook output.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use tracing::{debug, info};

use fbref_transform::{AggregatedDatasets, CategoryFrame};

use crate::common::{CellValue, column_cell};
use crate::error::{ReportError, Result};

/// Rows available below the header row.
const MAX_DATA_ROWS: usize = 1_048_575;

/// Writes one worksheet per category and saves the workbook.
///
/// The workbook is saved next to `path` first and moved into place once
/// complete, so a failed export never leaves a half-written file behind.
pub fn write_workbook(datasets: &AggregatedDatasets, path: &Path) -> Result<PathBuf> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    for frame in datasets.iter() {
        let worksheet = workbook.add_worksheet();
        write_sheet(worksheet, frame, &header)?;
        debug!(
            sheet = %frame.sheet_name(),
            rows = frame.record_count(),
            "wrote worksheet"
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| ReportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let partial = partial_path(path);
    workbook
        .save(&partial)
        .map_err(|source| workbook_error(&partial, source))?;
    std::fs::rename(&partial, path).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        path = %path.display(),
        rows = datasets.total_rows(),
        "workbook written"
    );
    Ok(path.to_path_buf())
}

fn write_sheet(worksheet: &mut Worksheet, frame: &CategoryFrame, header: &Format) -> Result<()> {
    let sheet = frame.sheet_name();
    let sheet_error = |source: XlsxError| workbook_error(Path::new(&sheet), source);
    worksheet.set_name(&sheet).map_err(sheet_error)?;

    let df = &frame.data;
    if df.height() > MAX_DATA_ROWS {
        return Err(ReportError::SheetTooLarge {
            sheet: sheet.clone(),
            reason: format!("{} rows", df.height()),
        });
    }

    for (col_idx, column) in df.get_columns().iter().enumerate() {
        let col = u16::try_from(col_idx).map_err(|_| ReportError::SheetTooLarge {
            sheet: sheet.clone(),
            reason: format!("{} columns", df.width()),
        })?;
        worksheet
            .write_string_with_format(0, col, column.name().as_str(), header)
            .map_err(sheet_error)?;

        for row_idx in 0..df.height() {
            // Bounded by MAX_DATA_ROWS above.
            let row = row_idx as u32 + 1;
            match column_cell(column, row_idx) {
                CellValue::Blank => {}
                CellValue::Number(number) => {
                    worksheet.write_number(row, col, number).map_err(sheet_error)?;
                }
                CellValue::Text(text) => {
                    worksheet.write_string(row, col, &text).map_err(sheet_error)?;
                }
            }
        }
    }
    Ok(())
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}

fn workbook_error(path: &Path, source: XlsxError) -> ReportError {
    ReportError::Workbook {
        path: path.to_path_buf(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_path_keeps_directory() {
        assert_eq!(
            partial_path(Path::new("out/matches.xlsx")),
            PathBuf::from("out/matches.xlsx.partial")
        );
    }
}
