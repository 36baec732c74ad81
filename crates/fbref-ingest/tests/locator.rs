//! Integration tests for page parsing and document fetching.

use std::cell::Cell;
use std::time::{Duration, Instant};

use fbref_ingest::{
    CachingFetcher, DocumentSource, FileFetcher, IngestError, PacedFetcher, Pacer, Result,
    locate_tables,
};
use fbref_model::PacingOptions;

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Burnley vs. Manchester City</title></head>
<body>
  <h1>Burnley vs. Manchester City Match Report – Friday August 11, 2023</h1>
  <div class="scorebox">
    <div><div class="score">0</div></div>
    <div><div class="score">3</div></div>
  </div>
  <table id="lineup"><tr><th colspan="2">Burnley (4-4-2)</th></tr><tr><td>1</td><td>James Trafford</td></tr></table>
  <table id="stats_burnley_summary">
    <thead>
      <tr class="over_header"><th colspan="2"></th><th colspan="2">Performance</th></tr>
      <tr><th>Player</th><th>Min</th><th>Gls</th><th>Ast</th></tr>
    </thead>
    <tbody>
      <tr><th>Lyle Foster</th><td>90</td><td>0</td><td>0</td></tr>
      <tr><th>Zeki Amdouni</th><td>77</td><td>0</td><td>0</td></tr>
    </tbody>
    <tfoot>
      <tr><th>14 Players</th><td>990</td><td>0</td><td>0</td></tr>
    </tfoot>
  </table>
  <!-- <table id="hidden"><tr><td>commented out</td></tr></table> -->
</body>
</html>"#;

#[test]
fn locates_title_scores_and_tables_in_order() {
    let page = locate_tables(PAGE).expect("parse page");
    assert_eq!(
        page.title,
        "Burnley vs. Manchester City Match Report – Friday August 11, 2023"
    );
    assert_eq!(page.scores, vec!["0", "3"]);
    assert_eq!(page.tables.len(), 2);

    let summary = &page.tables[1];
    assert!(summary.is_multi_level());
    assert_eq!(summary.width(), 4);
    assert_eq!(summary.row_count(), 3);
    assert_eq!(summary.cell(2, 0), Some("14 Players"));
    assert_eq!(summary.columns[1].levels, vec!["Unnamed: 1_level_0", "Min"]);
}

#[test]
fn missing_title_is_a_parse_error() {
    let html = r#"<div class="score">1</div><div class="score">1</div><table></table>"#;
    let error = locate_tables(html).unwrap_err();
    assert!(matches!(error, IngestError::MissingTitle));
    assert!(error.is_parse());
}

#[test]
fn single_score_is_a_parse_error() {
    let html = r#"<h1>A vs. B Match Report – Sunday May 19, 2024</h1><div class="score">1</div>"#;
    let error = locate_tables(html).unwrap_err();
    assert!(matches!(error, IngestError::MissingScores { found: 1 }));
}

#[test]
fn page_without_tables_is_not_an_error() {
    let html = r#"<h1>A vs. B Match Report – Sunday May 19, 2024</h1>
        <div class="score">2</div><div class="score">2</div>"#;
    let page = locate_tables(html).expect("parse page");
    assert!(page.tables.is_empty());
}

#[test]
fn empty_and_hidden_tables_do_not_take_a_slot() {
    let html = r#"<h1>A vs. B Match Report – Sunday May 19, 2024</h1>
        <div class="score">2</div><div class="score">1</div>
        <table><tr><td>real 0</td></tr></table>
        <table></table>
        <table><tr><td>   </td></tr></table>
        <table style="display: none"><tr><td>hidden</td></tr></table>
        <table><tr><td style="display:none">ghost</td></tr></table>
        <table>
          <thead><tr><th>Player</th><th style="display:none">Id</th><th>Min</th></tr></thead>
          <tbody>
            <tr><td>Saka</td><td style="display:none">7</td><td>90</td></tr>
            <tr style="DISPLAY:NONE"><td>Hidden</td><td>0</td><td>0</td></tr>
          </tbody>
        </table>"#;
    let page = locate_tables(html).expect("parse page");

    assert_eq!(page.tables.len(), 2);
    assert_eq!(page.tables[0].cell(0, 0), Some("real 0"));

    let stats = &page.tables[1];
    let names: Vec<&str> = stats
        .columns
        .iter()
        .map(|label| label.levels[0].as_str())
        .collect();
    assert_eq!(names, vec!["Player", "Min"]);
    assert_eq!(stats.row_count(), 1);
    assert_eq!(stats.cell(0, 1), Some("90"));
}

#[test]
fn file_fetcher_reads_relative_paths() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("match.html"), PAGE).expect("write page");

    let mut fetcher = FileFetcher::new().with_base_dir(dir.path());
    let html = fetcher.fetch("match.html").expect("fetch");
    assert_eq!(html, PAGE);

    let error = fetcher.fetch("missing.html").unwrap_err();
    assert!(matches!(error, IngestError::FileRead { .. }));
}

struct CountingSource {
    calls: Cell<usize>,
}

impl DocumentSource for CountingSource {
    fn fetch(&mut self, source: &str) -> Result<String> {
        self.calls.set(self.calls.get() + 1);
        Ok(format!("<h1>{source}</h1>"))
    }
}

#[test]
fn caching_fetcher_serves_repeats_from_disk() {
    let dir = tempfile::tempdir().expect("tempdir");
    let inner = CountingSource {
        calls: Cell::new(0),
    };
    let mut fetcher = CachingFetcher::new(dir.path(), inner);

    let first = fetcher.fetch("https://fbref.com/en/matches/abc").expect("first");
    let second = fetcher.fetch("https://fbref.com/en/matches/abc").expect("second");
    assert_eq!(first, second);
    assert!(fetcher.cache_path("https://fbref.com/en/matches/abc").is_file());

    let mut offline: CachingFetcher<CountingSource> = CachingFetcher::offline(dir.path());
    assert_eq!(
        offline.fetch("https://fbref.com/en/matches/abc").expect("cached"),
        first
    );
    let miss = offline.fetch("https://fbref.com/en/matches/zzz").unwrap_err();
    assert!(miss.is_retrieval());
}

#[test]
fn cache_hits_skip_the_pacer() {
    let dir = tempfile::tempdir().expect("tempdir");
    let slow = PacingOptions {
        min_secs: 30,
        max_secs: 30,
    };
    let inner = CountingSource {
        calls: Cell::new(0),
    };
    let mut fetcher =
        CachingFetcher::new(dir.path(), PacedFetcher::new(inner, Pacer::with_seed(slow, 3)));

    let start = Instant::now();
    for _ in 0..3 {
        fetcher.fetch("https://fbref.com/en/matches/abc").expect("fetch");
    }
    assert!(start.elapsed() < Duration::from_secs(30));
}
