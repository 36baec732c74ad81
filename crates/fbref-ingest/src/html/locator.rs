//! Locates every table of a match report page plus the title and scores.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use fbref_model::{ColumnLabel, TableBlock};

use crate::error::{IngestError, Result};

use super::grid::{RawCell, RawRow, expand_spans, has_displayed_text, is_hidden, normalize_text};

/// Parsed content of one match report page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchPage {
    /// Text of the page's first `<h1>`.
    pub title: String,
    /// Text of every `div.score`, in page order (home first).
    pub scores: Vec<String>,
    /// Every displayed `<table>` holding some text, in document order.
    pub tables: Vec<TableBlock>,
}

/// Parses raw HTML into a [`MatchPage`].
///
/// Fails when the page has no title or fewer than two score elements.
pub fn locate_tables(html: &str) -> Result<MatchPage> {
    let document = Html::parse_document(html);

    let title = document
        .select(&selector("h1")?)
        .next()
        .map(|element| normalize_text(element.text()))
        .ok_or(IngestError::MissingTitle)?;

    let scores: Vec<String> = document
        .select(&selector("div.score")?)
        .map(|element| normalize_text(element.text()))
        .collect();
    if scores.len() < 2 {
        return Err(IngestError::MissingScores {
            found: scores.len(),
        });
    }

    let mut skipped = 0usize;
    let tables: Vec<TableBlock> = document
        .select(&selector("table")?)
        .filter(|table| {
            let keep = !is_hidden(*table) && has_displayed_text(*table);
            if !keep {
                skipped += 1;
            }
            keep
        })
        .map(parse_table)
        .collect();
    debug!(
        title = %title,
        table_count = tables.len(),
        skipped,
        "located page tables"
    );

    Ok(MatchPage {
        title,
        scores,
        tables,
    })
}

/// Converts one `<table>` element into a [`TableBlock`].
///
/// Sections, rows and cells styled `display: none` are left out.
pub fn parse_table(table: ElementRef<'_>) -> TableBlock {
    let mut header_rows: Vec<RawRow> = Vec::new();
    let mut body_rows: Vec<RawRow> = Vec::new();
    let mut footer_rows: Vec<RawRow> = Vec::new();

    for child in child_elements(table) {
        match child.value().name() {
            "thead" => header_rows.extend(section_rows(child)),
            "tbody" => body_rows.extend(section_rows(child)),
            "tfoot" => footer_rows.extend(section_rows(child)),
            "tr" => body_rows.push(row_cells(child)),
            _ => {}
        }
    }

    // Without a <thead>, leading all-<th> rows form the header.
    if header_rows.is_empty() {
        let leading = body_rows
            .iter()
            .take_while(|row| !row.is_empty() && row.iter().all(|cell| cell.is_header))
            .count();
        header_rows = body_rows.drain(..leading).collect();
    }

    let header = expand_spans(&header_rows);
    let mut body = expand_spans(&body_rows);
    body.extend(expand_spans(&footer_rows));

    let width = header
        .iter()
        .chain(body.iter())
        .map(Vec::len)
        .max()
        .unwrap_or(0);

    let columns = build_labels(&header, width);
    let rows = body
        .into_iter()
        .map(|texts| pad_row(texts, width))
        .filter(|row| row.iter().any(Option::is_some))
        .collect();

    TableBlock::new(columns, rows)
}

/// Builds column labels from the expanded header grid.
///
/// Blank labels become `Unnamed: {column}` (single-row header) or
/// `Unnamed: {column}_level_{level}`; headerless tables get positional
/// labels. Repeated labels get a `.1`, `.2`, ... suffix on their last level.
fn build_labels(header: &[Vec<String>], width: usize) -> Vec<ColumnLabel> {
    let depth = header.len();
    let mut labels: Vec<ColumnLabel> = (0..width)
        .map(|column| {
            if depth == 0 {
                return ColumnLabel::single(column.to_string());
            }
            let levels = header
                .iter()
                .enumerate()
                .map(|(level, row)| match row.get(column) {
                    Some(text) if !text.is_empty() => text.clone(),
                    _ if depth == 1 => format!("Unnamed: {column}"),
                    _ => format!("Unnamed: {column}_level_{level}"),
                })
                .collect();
            ColumnLabel { levels }
        })
        .collect();

    for index in 1..labels.len() {
        let mut suffix = 0usize;
        let original = labels[index].clone();
        while labels[..index].contains(&labels[index]) {
            suffix += 1;
            let mut renamed = original.clone();
            if let Some(last) = renamed.levels.last_mut() {
                last.push_str(&format!(".{suffix}"));
            }
            labels[index] = renamed;
        }
    }
    labels
}

fn pad_row(texts: Vec<String>, width: usize) -> Vec<Option<String>> {
    let mut row: Vec<Option<String>> = texts
        .into_iter()
        .map(|text| if text.is_empty() { None } else { Some(text) })
        .collect();
    row.resize(width, None);
    row
}

fn section_rows(section: ElementRef<'_>) -> Vec<RawRow> {
    child_elements(section)
        .filter(|child| child.value().name() == "tr")
        .map(row_cells)
        .collect()
}

fn row_cells(row: ElementRef<'_>) -> RawRow {
    child_elements(row)
        .filter(|child| matches!(child.value().name(), "td" | "th"))
        .map(RawCell::from_element)
        .collect()
}

fn child_elements(element: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|child| !is_hidden(*child))
}

fn selector(source: &str) -> Result<Selector> {
    Selector::parse(source).map_err(|error| IngestError::Selector {
        selector: source.to_string(),
        message: error.to_string(),
    })
}
