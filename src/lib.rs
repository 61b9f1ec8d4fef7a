//! batchrun: compile a directory of test programs and capture each program's output.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{CategorySummary, RunOptions, list, load_config, run, run_with};
pub use app::config::{CONFIG_FILE, ConfigOverrides};
pub use domain::{AppError, BatchConfig, BatchReport, CategoryName, FileReport, StepStatus};
