//! Harvest pipeline with explicit stages.
//!
//! Documents are handled strictly one after another:
//! 1. **Fetch**: Retrieve the raw HTML (network fetches are paced by the fetcher)
//! 2. **Locate**: Parse title, scores and every table of the page
//! 3. **Normalize**: Build one tagged, filtered frame per category
//! 4. **Aggregate**: Append the match to the per-category accumulator
//!
//! Export happens once, after the loop, in the command layer.

use std::time::Instant;

use anyhow::Result;
use indicatif::ProgressBar;
use tracing::{debug, info, info_span, warn};

use fbref_ingest::{DocumentSource, locate_tables};
use fbref_model::FailurePolicy;
use fbref_transform::{AggregatedDatasets, CategoryAccumulator, MatchDatasets, MatchNormalizer};

use crate::types::{DocumentError, DocumentFailure, MatchSummary};

/// Everything a finished document loop produced.
#[derive(Debug)]
pub struct HarvestRun {
    pub datasets: AggregatedDatasets,
    pub matches: Vec<MatchSummary>,
    pub failures: Vec<DocumentFailure>,
}

/// Steers one document loop.
pub struct HarvestContext<'a, S> {
    pub fetcher: &'a mut S,
    pub normalizer: &'a MatchNormalizer,
    pub policy: FailurePolicy,
    pub progress: &'a ProgressBar,
}

/// Locates and normalizes one already-fetched document.
pub fn process_document(
    html: &str,
    normalizer: &MatchNormalizer,
) -> std::result::Result<MatchDatasets, DocumentError> {
    let page = locate_tables(html)?;
    debug!(
        title = %page.title,
        tables = page.tables.len(),
        "page located"
    );
    Ok(normalizer.process(&page.title, &page.scores, &page.tables)?)
}

fn fetch_and_process<S: DocumentSource>(
    fetcher: &mut S,
    source: &str,
    normalizer: &MatchNormalizer,
) -> std::result::Result<MatchDatasets, DocumentError> {
    let fetch_start = Instant::now();
    let html = fetcher.fetch(source)?;
    debug!(
        bytes = html.len(),
        duration_ms = fetch_start.elapsed().as_millis(),
        "document fetched"
    );
    process_document(&html, normalizer)
}

/// Runs every source through fetch, parse and normalization, folding the
/// results in source order.
///
/// Under [`FailurePolicy::Abort`] the first failing document ends the loop
/// with an error and nothing is returned. Under [`FailurePolicy::Skip`] the
/// failure is recorded and the document contributes no rows.
pub fn run_documents<S: DocumentSource>(
    sources: &[String],
    context: HarvestContext<'_, S>,
) -> Result<HarvestRun> {
    let HarvestContext {
        fetcher,
        normalizer,
        policy,
        progress,
    } = context;

    let total = sources.len();
    let run_start = Instant::now();
    let mut accumulator = CategoryAccumulator::new();
    let mut matches = Vec::new();
    let mut failures = Vec::new();

    for (offset, source) in sources.iter().enumerate() {
        let index = offset + 1;
        let span = info_span!("document", index, total, source = %source);
        let _guard = span.enter();

        progress.set_message(source.clone());
        let start = Instant::now();
        match fetch_and_process(fetcher, source, normalizer) {
            Ok(datasets) => {
                let rows = datasets.total_rows();
                info!(
                    matchup = %datasets.metadata.matchup(),
                    home_result = %datasets.metadata.home_result,
                    away_result = %datasets.metadata.away_result,
                    rows,
                    duration_ms = start.elapsed().as_millis(),
                    "document processed"
                );
                matches.push(MatchSummary {
                    source: source.clone(),
                    matchup: datasets.metadata.matchup(),
                    match_time: datasets.metadata.match_time.clone(),
                    home_result: datasets.metadata.home_result,
                    away_result: datasets.metadata.away_result,
                    rows,
                });
                accumulator.append(datasets);
            }
            Err(error) => match policy {
                FailurePolicy::Abort => {
                    progress.abandon();
                    return Err(anyhow::Error::new(error)
                        .context(format!("document {index}/{total} ({source}) failed")));
                }
                FailurePolicy::Skip => {
                    warn!(kind = error.kind().as_str(), %error, "skipping document");
                    failures.push(DocumentFailure {
                        index,
                        source: source.clone(),
                        kind: error.kind(),
                        message: error.to_string(),
                    });
                }
            },
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    let datasets = accumulator.finish()?;
    info!(
        documents = total,
        matches = datasets.match_count(),
        failed = failures.len(),
        rows = datasets.total_rows(),
        duration_ms = run_start.elapsed().as_millis(),
        "documents complete"
    );
    Ok(HarvestRun {
        datasets,
        matches,
        failures,
    })
}
