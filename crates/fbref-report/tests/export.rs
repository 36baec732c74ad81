//! Integration tests for workbook and CSV export.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use polars::prelude::DataFrame;

use fbref_common::string_column;
use fbref_model::{Category, OutputFormat};
use fbref_report::{write_csv_dir, write_output, write_workbook};
use fbref_transform::{AggregatedDatasets, CategoryAccumulator, frame::CategoryFrame};

fn summary_frame() -> DataFrame {
    DataFrame::new(vec![
        string_column(
            "Unnamed: 0_level_0_Player",
            vec![Some("Saka".to_string()), Some("Palmer".to_string())],
        ),
        string_column("Performance_Gls", vec![Some("1".to_string()), None]),
        string_column(
            "Team",
            vec![Some("Arsenal".to_string()), Some("Chelsea".to_string())],
        ),
    ])
    .unwrap()
}

fn datasets() -> AggregatedDatasets {
    let frames = Category::ALL
        .iter()
        .map(|category| match category {
            Category::Summary => CategoryFrame::new(*category, summary_frame()),
            other => CategoryFrame::empty(*other),
        })
        .collect();
    AggregatedDatasets::from_frames(frames, 1)
}

#[test]
fn workbook_is_written_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reports").join("matches.xlsx");

    let written = write_workbook(&datasets(), &path).unwrap();

    assert_eq!(written, path);
    let metadata = std::fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0);
    assert!(!dir.path().join("reports").join("matches.xlsx.partial").exists());
}

fn passing_frame() -> DataFrame {
    DataFrame::new(vec![
        string_column("Player", vec![Some("Rice".to_string())]),
        string_column("Total_TotDist", vec![Some("1,210".to_string())]),
        string_column("Total_Cmp", vec![Some("61".to_string())]),
    ])
    .unwrap()
}

/// Reads one part of the xlsx package as text.
fn read_part(path: &Path, name: &str) -> String {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

/// The `<c>` element for one cell reference.
fn cell_xml<'a>(sheet: &'a str, reference: &str) -> &'a str {
    let start = sheet
        .find(&format!("<c r=\"{reference}\""))
        .unwrap_or_else(|| panic!("cell {reference} missing"));
    let end = start + sheet[start..].find("</c>").unwrap();
    &sheet[start..end]
}

#[test]
fn workbook_sheets_and_cell_types_follow_categories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matches.xlsx");
    let frames = Category::ALL
        .iter()
        .map(|category| match category {
            Category::Passing => CategoryFrame::new(*category, passing_frame()),
            other => CategoryFrame::empty(*other),
        })
        .collect();
    let datasets = AggregatedDatasets::from_frames(frames, 1);

    write_workbook(&datasets, &path).unwrap();

    let workbook = read_part(&path, "xl/workbook.xml");
    let positions: Vec<usize> = [
        "Summary",
        "Passing",
        "Pass_type",
        "Defensive_action",
        "Possession",
        "Miscellaneous_stats",
        "Goalkeeper",
    ]
    .iter()
    .map(|name| {
        workbook
            .find(&format!("name=\"{name}\""))
            .unwrap_or_else(|| panic!("sheet {name} missing"))
    })
    .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

    let passing = read_part(&path, "xl/worksheets/sheet2.xml");
    assert!(cell_xml(&passing, "A2").contains("t=\"s\""));
    let distance = cell_xml(&passing, "B2");
    assert!(!distance.contains("t=\""));
    assert!(distance.contains("<v>1210</v>"));
    assert!(cell_xml(&passing, "C2").contains("<v>61</v>"));

    let csv_dir = dir.path().join("csv");
    write_csv_dir(&datasets, &csv_dir).unwrap();
    let csv = std::fs::read_to_string(csv_dir.join("Passing.csv")).unwrap();
    assert_eq!(csv.lines().nth(1), Some("Rice,\"1,210\",61"));
}

#[test]
fn empty_run_still_writes_every_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.xlsx");
    let datasets = CategoryAccumulator::new().finish().unwrap();
    write_workbook(&datasets, &path).unwrap();
    assert!(path.exists());
}

#[test]
fn csv_directory_has_one_file_per_category() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("csv");

    let written = write_csv_dir(&datasets(), &out).unwrap();

    let names: Vec<String> = written
        .iter()
        .map(|path| path.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "Summary.csv",
            "Passing.csv",
            "Pass_type.csv",
            "Defensive_action.csv",
            "Possession.csv",
            "Miscellaneous_stats.csv",
            "Goalkeeper.csv",
        ]
    );

    let summary = std::fs::read_to_string(out.join("Summary.csv")).unwrap();
    let mut lines = summary.lines();
    assert_eq!(
        lines.next(),
        Some("Unnamed: 0_level_0_Player,Performance_Gls,Team")
    );
    assert_eq!(lines.next(), Some("Saka,1,Arsenal"));
    assert_eq!(lines.next(), Some("Palmer,,Chelsea"));
    assert_eq!(lines.next(), None);
}

#[test]
fn write_output_dispatches_on_format() {
    let dir = tempfile::tempdir().unwrap();
    let workbook = dir.path().join("run.xlsx");
    let written = write_output(&datasets(), OutputFormat::Xlsx, &workbook).unwrap();
    assert_eq!(written, vec![workbook]);

    let csv_dir = dir.path().join("run_csv");
    let written = write_output(&datasets(), OutputFormat::Csv, &csv_dir).unwrap();
    assert_eq!(written.len(), 7);
}
