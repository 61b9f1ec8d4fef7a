//! CLI Adapter.

mod list;
mod run;

use std::path::PathBuf;

use crate::app::config::ConfigOverrides;
use crate::domain::AppError;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "batchrun")]
#[command(version)]
#[command(
    about = "Compile a directory of test programs and capture their output",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to ./batchrun.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Override the directory holding one folder per category
    #[arg(long, global = true)]
    source_root: Option<PathBuf>,
    /// Override the directory receiving one results folder per category
    #[arg(long, global = true)]
    results_root: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile and execute every source file of one or more categories
    #[clap(visible_alias = "r")]
    Run {
        /// Categories to run (defaults to the configured category)
        #[arg(conflicts_with = "all")]
        categories: Vec<String>,
        /// Run every category under the source root
        #[arg(short, long)]
        all: bool,
        /// Exit non-zero if any compile or execute step failed
        #[arg(long)]
        strict: bool,
        /// Write a JSON report of every step to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// List categories under the source root
    #[clap(visible_alias = "ls")]
    List,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let overrides =
        ConfigOverrides { source_root: cli.source_root, results_root: cli.results_root };

    let result: Result<(), AppError> =
        crate::app::api::load_config(cli.config.as_deref(), &overrides).and_then(|config| {
            match cli.command {
                Commands::Run { categories, all, strict, report } => {
                    run::run_batch(config, categories, all, strict, report)
                }
                Commands::List => list::run_list(&config),
            }
        });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
