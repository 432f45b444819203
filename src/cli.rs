//! Command-line surface: argument parsing and the top-level run.
use anyhow::Context;
use std::path::{Path, PathBuf};
use tallysleuth_core::inventory::{validate_all, JsonLinesInventory};
use tallysleuth_core::report::write_reports;
use tallysleuth_core::{Aggregator, SourceSpec, SpecError};
use tracing::{debug, info};

/// Compare how forensic parsing tools classify the same storage media.
#[derive(clap::Parser, Debug)]
#[command(name = "tallysleuth")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Inventories, each prefixed with a long and short label
    /// (e.g. 'Fiwalk:fi:fiout.jsonl')
    #[arg(required = true, value_name = "LABELED_INVENTORY")]
    pub labeled_inventories: Vec<String>,

    /// Pre-run diagnostic: check labeling of paths, then exit
    #[arg(long)]
    pub check_labeling: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Directory summary.tex and summary.html are written to
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl Args {
    pub fn log_level(&self) -> tracing::Level {
        if self.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }

    /// Validate every inventory specification and build the run config.
    pub fn into_config(self) -> Result<RunConfig, SpecError> {
        Ok(RunConfig {
            sources: validate_all(&self.labeled_inventories)?,
            check_only: self.check_labeling,
            output_dir: self.output_dir,
        })
    }
}

/// Everything a run needs, already validated.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub sources: Vec<SourceSpec>,
    /// Stop after validation; write nothing.
    pub check_only: bool,
    pub output_dir: PathBuf,
}

/// Summarise every source in argument order, then write both documents.
pub fn run(config: &RunConfig) -> anyhow::Result<()> {
    if config.check_only {
        info!("All {} source specifications are valid", config.sources.len());
        return Ok(());
    }

    let mut aggregator = Aggregator::new();
    for spec in &config.sources {
        debug!(
            "Summarising {} ({}) from {}",
            spec.label,
            spec.short_label,
            spec.path.display()
        );
        aggregator.summarize(spec.label.clone(), &JsonLinesInventory::new(&spec.path));
    }

    ensure_dir(&config.output_dir)?;
    write_reports(&aggregator, &config.output_dir).context("failed to write summary documents")?;
    Ok(())
}

fn ensure_dir(dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory {}", dir.display()))
}
