//! Compile and execute every entry of one category's source directory.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use chrono::Utc;
use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::{
    AppError, BatchReport, CategoryName, FileReport, ResultPaths, SourceFile, StepStatus,
};
use crate::ports::{Invocation, ProcessRunner};

/// Run the compile/execute pipeline for `category`, writing progress lines to `out`.
///
/// Per-file tool failures are recorded in the report and never stop the batch.
/// Directory and result-file errors abort it.
pub fn execute<R: ProcessRunner, W: Write>(
    ctx: &AppContext<R>,
    category: &CategoryName,
    out: &mut W,
) -> Result<BatchReport, AppError> {
    let config = ctx.config();
    let source_dir = config.source_dir(category);
    let results_dir = config.results_dir(category);
    let started_at = Utc::now();

    info!(%category, source_dir = %source_dir.display(), "starting batch");

    fs::create_dir_all(&results_dir)
        .map_err(|source| AppError::ResultsDirCreate { path: results_dir.clone(), source })?;

    let sources = list_sources(&source_dir, category, &config.source_root)?;
    let mut files = Vec::with_capacity(sources.len());
    for source in &sources {
        let paths = ResultPaths::derive(&results_dir, source, config);
        files.push(process_file(ctx, source, paths, out)?);
    }

    let report = BatchReport {
        category: category.clone(),
        source_dir,
        results_dir,
        started_at,
        finished_at: Utc::now(),
        files,
    };
    info!(
        %category,
        files = report.files.len(),
        failed_steps = report.failed_steps(),
        "batch finished"
    );
    Ok(report)
}

/// List every entry of `dir`, sorted by name.
fn list_sources(
    dir: &Path,
    category: &CategoryName,
    source_root: &Path,
) -> Result<Vec<SourceFile>, AppError> {
    let unreadable = |source: io::Error| {
        if source.kind() == io::ErrorKind::NotFound {
            AppError::CategoryNotFound {
                name: category.to_string(),
                root: source_root.to_path_buf(),
            }
        } else {
            AppError::SourceDirUnreadable { path: dir.to_path_buf(), source }
        }
    };

    let mut sources = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        if let Some(source) = SourceFile::from_path(entry.path()) {
            sources.push(source);
        }
    }
    sources.sort_by(|a, b| a.file_name().cmp(b.file_name()));
    Ok(sources)
}

fn process_file<R: ProcessRunner, W: Write>(
    ctx: &AppContext<R>,
    source: &SourceFile,
    paths: ResultPaths,
    out: &mut W,
) -> Result<FileReport, AppError> {
    let compiler = &ctx.config().compiler;

    writeln!(out, "compiling {} ......", source.display_name())?;
    let arguments = compiler.arguments(source.path(), &paths.artifact);
    let command = Invocation::new(&compiler.program, arguments);
    let compile = ctx.runner().run(&command, None);
    log_step("compile", source, &compile);

    writeln!(out, "executing {} ......", paths.artifact_name())?;
    let result_file = File::create(&paths.result)
        .map_err(|e| AppError::ResultFileOpen { path: paths.result.clone(), source: e })?;
    let program = Invocation::new(&paths.artifact, Vec::new());
    let execute = ctx.runner().run(&program, Some(result_file));
    log_step("execute", source, &execute);

    writeln!(out, "done, output in {}", paths.result.display())?;

    Ok(FileReport {
        source: source.display_name().into_owned(),
        artifact: paths.artifact,
        result: paths.result,
        compile,
        execute,
    })
}

fn log_step(step: &str, source: &SourceFile, status: &StepStatus) {
    match status {
        StepStatus::Succeeded => {}
        StepStatus::Failed { code } => {
            warn!(step, source = %source.display_name(), code = ?code, "step failed");
        }
        StepStatus::NotLaunched { reason } => {
            warn!(step, source = %source.display_name(), %reason, "step could not be launched");
        }
    }
}
