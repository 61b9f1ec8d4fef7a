//! Run command implementation.

use std::path::PathBuf;

use crate::app::api::{self, RunOptions};
use crate::domain::{AppError, BatchConfig};

pub fn run_batch(
    config: BatchConfig,
    categories: Vec<String>,
    all: bool,
    strict: bool,
    report: Option<PathBuf>,
) -> Result<(), AppError> {
    let options = RunOptions { categories, all, strict, report };
    api::run(config, options)?;
    Ok(())
}
