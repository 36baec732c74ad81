use std::io::{self, IsTerminal};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, info_span};

use fbref_cli::config::{HarvestConfig, RunOverrides, RunPlan, load_config, resolve_run};
use fbref_cli::pipeline::{HarvestContext, HarvestRun, run_documents};
use fbref_cli::types::{CategorySummary, HarvestResult};
use fbref_ingest::{
    CachingFetcher, DocumentSource, HttpFetcher, PacedFetcher, Pacer, SourceRouter,
};
use fbref_model::{Category, Side, TableLayout};
use fbref_report::write_output;
use fbref_transform::MatchNormalizer;

use crate::cli::{LayoutArgs, RunArgs};
use crate::summary::{align_column, apply_table_style, dim_cell, header_cell};

pub fn run_harvest(args: &RunArgs, show_progress: bool) -> Result<HarvestResult> {
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => HarvestConfig::default(),
    };
    let plan = resolve_run(overrides_from_args(args), config)?;
    let run_span = info_span!("harvest", documents = plan.sources.len());
    let _run_guard = run_span.enter();

    let normalizer = MatchNormalizer::from_options(&plan.options).context("configure layout")?;
    let mut fetcher = build_fetcher(&plan)?;
    let progress = progress_bar(plan.sources.len(), show_progress);

    // =========================================================================
    // Stage 1: Fetch, locate, normalize and aggregate every document
    // =========================================================================
    let HarvestRun {
        datasets,
        matches,
        failures,
    } = run_documents(
        &plan.sources,
        HarvestContext {
            fetcher: &mut fetcher,
            normalizer: &normalizer,
            policy: plan.options.failure_policy,
            progress: &progress,
        },
    )?;

    // =========================================================================
    // Stage 2: Export once, after every document succeeded or was skipped
    // =========================================================================
    let export_start = Instant::now();
    let outputs = write_output(&datasets, plan.options.output_format, &plan.output)
        .with_context(|| format!("write {}", plan.output.display()))?;
    info!(
        outputs = outputs.len(),
        duration_ms = export_start.elapsed().as_millis(),
        "export complete"
    );

    let categories = datasets
        .iter()
        .map(|frame| CategorySummary {
            category: frame.category,
            sheet_name: frame.sheet_name(),
            rows: frame.record_count(),
            columns: frame.data.width(),
        })
        .collect();
    let has_errors = !failures.is_empty();
    Ok(HarvestResult {
        format: plan.options.output_format,
        outputs,
        documents: plan.sources.len(),
        matches,
        categories,
        failures,
        has_errors,
    })
}

pub fn run_layout(args: &LayoutArgs) -> Result<()> {
    let layout = match &args.config {
        Some(path) => load_config(path)?.layout.unwrap_or_default(),
        None => TableLayout::default(),
    };
    layout.validate()?;
    println!("{}", layout_table(&layout));
    match layout.expected_table_count {
        Some(count) => println!("Pages must contain exactly {count} tables."),
        None => println!(
            "Pages must contain at least {} tables.",
            layout.required_table_count()
        ),
    }
    Ok(())
}

fn layout_table(layout: &TableLayout) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Sheet"),
        header_cell("Home"),
        header_cell("Away"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for category in Category::ALL {
        let slot = |side: Side| match layout.slot(category) {
            Some(pair) => Cell::new(pair.for_side(side)),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(category.as_str()),
            Cell::new(category.sheet_name()),
            slot(Side::Home),
            slot(Side::Away),
        ]);
    }
    table
}

fn overrides_from_args(args: &RunArgs) -> RunOverrides {
    RunOverrides {
        sources: args.sources.clone(),
        sources_file: args.sources_file.clone(),
        output: args.output.clone(),
        format: args.format.map(Into::into),
        min_delay: args.min_delay,
        max_delay: args.max_delay,
        cache_dir: args.cache_dir.clone(),
        offline: args.offline,
        skip_failed: args.skip_failed,
    }
}

fn build_fetcher(plan: &RunPlan) -> Result<Box<dyn DocumentSource>> {
    if plan.offline {
        let dir = plan
            .cache_dir
            .clone()
            .context("offline runs need a cache directory")?;
        return Ok(Box::new(SourceRouter::new(
            CachingFetcher::<HttpFetcher>::offline(dir),
        )));
    }

    // Only network fetches are paced; cache hits and local files are not.
    let remote = PacedFetcher::new(
        HttpFetcher::new().context("create HTTP client")?,
        Pacer::new(plan.options.pacing),
    );
    let fetcher: Box<dyn DocumentSource> = match &plan.cache_dir {
        Some(dir) => Box::new(SourceRouter::new(CachingFetcher::new(dir.clone(), remote))),
        None => Box::new(SourceRouter::new(remote)),
    };
    Ok(fetcher)
}

fn progress_bar(len: usize, show: bool) -> ProgressBar {
    if !show || !io::stderr().is_terminal() {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len as u64);
    let style = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    bar.set_style(style.progress_chars("=> "));
    bar
}
