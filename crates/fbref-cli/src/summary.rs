use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use fbref_model::MatchResult;
use fbref_cli::types::{FailureKind, HarvestResult};

pub fn print_summary(result: &HarvestResult) {
    for path in &result.outputs {
        println!("Output: {}", path.display());
    }
    println!(
        "Matches: {} of {} documents",
        result.matches.len(),
        result.documents
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Rows"),
        header_cell("Columns"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_rows = 0usize;
    for summary in &result.categories {
        total_rows += summary.rows;
        table.add_row(vec![
            Cell::new(&summary.sheet_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            count_cell(summary.rows),
            Cell::new(summary.columns),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    if !result.matches.is_empty() {
        print_match_table(result);
    }
    if !result.failures.is_empty() {
        print_failure_table(result);
    }
}

fn print_match_table(result: &HarvestResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Matchup"),
        header_cell("Match Time"),
        header_cell("Home"),
        header_cell("Away"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Center);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    for summary in &result.matches {
        table.add_row(vec![
            Cell::new(&summary.matchup),
            Cell::new(&summary.match_time),
            result_cell(summary.home_result),
            result_cell(summary.away_result),
            Cell::new(summary.rows),
        ]);
    }
    println!();
    println!("Matches:");
    println!("{table}");
}

fn print_failure_table(result: &HarvestResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Source"),
        header_cell("Stage"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for failure in &result.failures {
        table.add_row(vec![
            Cell::new(failure.index),
            Cell::new(&failure.source),
            kind_cell(failure.kind),
            Cell::new(&failure.message),
        ]);
    }
    eprintln!();
    eprintln!("Skipped documents:");
    eprintln!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn result_cell(result: MatchResult) -> Cell {
    let color = match result {
        MatchResult::Win => Color::Green,
        MatchResult::Lose => Color::Red,
        MatchResult::Draw => Color::Yellow,
    };
    Cell::new(result.as_str()).fg(color)
}

fn kind_cell(kind: FailureKind) -> Cell {
    let color = match kind {
        FailureKind::Retrieval => Color::Yellow,
        FailureKind::Parse | FailureKind::Metadata | FailureKind::Layout => Color::Red,
        FailureKind::Frame => Color::Magenta,
    };
    Cell::new(kind.as_str()).fg(color)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
