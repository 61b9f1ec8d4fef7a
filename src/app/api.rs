//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::adapters::CommandProcessRunner;
use crate::app::config::{self, ConfigOverrides};
use crate::app::{AppContext, commands};
use crate::ports::ProcessRunner;

pub use crate::app::commands::list::CategorySummary;
pub use crate::domain::{AppError, BatchConfig, BatchReport, CategoryName};

/// Options for a batch run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Categories to run. Empty means the configured default category.
    pub categories: Vec<String>,
    /// Run every category directory under the source root.
    pub all: bool,
    /// Fail after the batch if any compile or execute step did not succeed.
    pub strict: bool,
    /// Write the run reports as JSON to this path.
    pub report: Option<PathBuf>,
}

/// Load configuration relative to the current directory.
pub fn load_config(
    explicit: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<BatchConfig, AppError> {
    config::load_config(explicit, &std::env::current_dir()?, overrides)
}

/// Compile and execute the requested categories, printing progress to stdout.
pub fn run(config: BatchConfig, options: RunOptions) -> Result<Vec<BatchReport>, AppError> {
    let ctx = AppContext::new(config, CommandProcessRunner::new());
    let stdout = io::stdout();
    run_with(&ctx, &options, &mut stdout.lock())
}

/// Run with an explicit context and progress writer.
pub fn run_with<R: ProcessRunner, W: Write>(
    ctx: &AppContext<R>,
    options: &RunOptions,
    out: &mut W,
) -> Result<Vec<BatchReport>, AppError> {
    let categories = resolve_categories(ctx.config(), options)?;

    let mut reports = Vec::with_capacity(categories.len());
    for category in &categories {
        reports.push(commands::run::execute(ctx, category, out)?);
    }

    if let Some(path) = &options.report {
        write_report(path, &reports)?;
    }

    if options.strict {
        let failed: usize = reports.iter().map(BatchReport::failed_steps).sum();
        if failed > 0 {
            let files = reports.iter().map(|r| r.files.len()).sum();
            return Err(AppError::StepsFailed { failed, files });
        }
    }
    Ok(reports)
}

/// List category directories under the configured source root.
pub fn list(config: &BatchConfig) -> Result<Vec<CategorySummary>, AppError> {
    commands::list::execute(config)
}

fn resolve_categories(
    config: &BatchConfig,
    options: &RunOptions,
) -> Result<Vec<CategoryName>, AppError> {
    if options.all {
        return Ok(commands::list::execute(config)?.into_iter().map(|c| c.name).collect());
    }
    if options.categories.is_empty() {
        return Ok(vec![config.default_category.clone()]);
    }
    options.categories.iter().map(|name| CategoryName::new(name)).collect()
}

fn write_report(path: &Path, reports: &[BatchReport]) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(reports)?;
    fs::write(path, json)?;
    Ok(())
}
