//! Run configuration: optional TOML file merged with command-line flags.
//!
//! Precedence is flags, then file, then built-in defaults.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use fbref_ingest::{is_remote, load_source_list};
use fbref_model::{FailurePolicy, HarvestOptions, OutputFormat, PacingOptions, TableLayout};

/// Workbook written when no output is configured.
pub const DEFAULT_WORKBOOK: &str = "data.xlsx";
/// CSV directory written when no output is configured.
pub const DEFAULT_CSV_DIR: &str = "data";

/// Contents of a `--config` file. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HarvestConfig {
    pub sources: Vec<String>,
    pub sources_file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub pacing: Option<PacingConfig>,
    pub match_time_years: Option<Vec<String>>,
    pub layout: Option<TableLayout>,
    pub cache_dir: Option<PathBuf>,
    pub skip_failed: Option<bool>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PacingConfig {
    pub min_secs: Option<u64>,
    pub max_secs: Option<u64>,
}

/// Values given on the command line for a run.
#[derive(Debug, Clone, Default)]
pub struct RunOverrides {
    pub sources: Vec<String>,
    pub sources_file: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub min_delay: Option<u64>,
    pub max_delay: Option<u64>,
    pub cache_dir: Option<PathBuf>,
    pub offline: bool,
    pub skip_failed: bool,
}

/// Fully merged settings of one run.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub sources: Vec<String>,
    pub output: PathBuf,
    pub cache_dir: Option<PathBuf>,
    pub offline: bool,
    pub options: HarvestOptions,
}

/// Reads and parses a TOML config file.
pub fn load_config(path: &Path) -> Result<HarvestConfig> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_config(&content).with_context(|| format!("parse {}", path.display()))
}

pub fn parse_config(content: &str) -> Result<HarvestConfig> {
    Ok(toml::from_str(content)?)
}

/// Merges flags over the config file and validates the result.
pub fn resolve_run(overrides: RunOverrides, config: HarvestConfig) -> Result<RunPlan> {
    let mut sources = overrides.sources;
    if let Some(path) = overrides.sources_file.as_ref() {
        sources.extend(load_source_list(path)?);
    }
    if sources.is_empty() {
        sources = config.sources;
        if let Some(path) = config.sources_file.as_ref() {
            sources.extend(load_source_list(path)?);
        }
    }
    if sources.is_empty() {
        bail!("no sources given: pass URLs or paths, --sources-file, or a config with `sources`");
    }

    let format = overrides.format.or(config.format).unwrap_or_default();
    let output = overrides
        .output
        .or(config.output)
        .unwrap_or_else(|| default_output(format));

    let cache_dir = overrides.cache_dir.or(config.cache_dir);
    if overrides.offline && cache_dir.is_none() {
        bail!("--offline needs a cache directory (--cache-dir or `cache_dir`)");
    }

    let file_pacing = config.pacing.unwrap_or_default();
    let defaults = PacingOptions::default();
    let mut pacing = PacingOptions {
        min_secs: overrides
            .min_delay
            .or(file_pacing.min_secs)
            .unwrap_or(defaults.min_secs),
        max_secs: overrides
            .max_delay
            .or(file_pacing.max_secs)
            .unwrap_or(defaults.max_secs),
    };
    if pacing.min_secs > pacing.max_secs {
        bail!(
            "minimum delay {}s exceeds maximum delay {}s",
            pacing.min_secs,
            pacing.max_secs
        );
    }
    // Local files and cache replays never hit the network.
    if overrides.offline || !sources.iter().any(|source| is_remote(source)) {
        pacing = PacingOptions::disabled();
    }

    let layout = config.layout.unwrap_or_default();
    layout.validate()?;

    let policy = if overrides.skip_failed || config.skip_failed.unwrap_or(false) {
        FailurePolicy::Skip
    } else {
        FailurePolicy::Abort
    };

    let mut options = HarvestOptions::new()
        .with_layout(layout)
        .with_failure_policy(policy)
        .with_pacing(pacing);
    if let Some(years) = config.match_time_years {
        options = options.with_match_time_years(years);
    }
    options.output_format = format;

    Ok(RunPlan {
        sources,
        output,
        cache_dir,
        offline: overrides.offline,
        options,
    })
}

fn default_output(format: OutputFormat) -> PathBuf {
    match format {
        OutputFormat::Xlsx => PathBuf::from(DEFAULT_WORKBOOK),
        OutputFormat::Csv => PathBuf::from(DEFAULT_CSV_DIR),
    }
}
