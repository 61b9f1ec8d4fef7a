//! Run report models.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::CategoryName;

/// Observed outcome of one subprocess step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepStatus {
    Succeeded,
    /// Non-zero exit. `code` is absent when the process was killed by a signal.
    Failed { code: Option<i32> },
    /// The process could not be spawned.
    NotLaunched { reason: String },
}

impl StepStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, StepStatus::Succeeded)
    }
}

/// Outcome of the compile/execute pipeline for one source entry.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub source: String,
    pub artifact: PathBuf,
    pub result: PathBuf,
    pub compile: StepStatus,
    pub execute: StepStatus,
}

impl FileReport {
    /// Number of steps that did not succeed (0..=2).
    pub fn failed_steps(&self) -> usize {
        [&self.compile, &self.execute].iter().filter(|s| !s.is_success()).count()
    }
}

/// Report for one category run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub category: CategoryName,
    pub source_dir: PathBuf,
    pub results_dir: PathBuf,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub files: Vec<FileReport>,
}

impl BatchReport {
    pub fn failed_steps(&self) -> usize {
        self.files.iter().map(FileReport::failed_steps).sum()
    }
}
