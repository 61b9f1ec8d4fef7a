//! Batch configuration domain models.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::CategoryName;

/// Configuration for a batch run, loaded from `batchrun.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchConfig {
    /// Directory holding one folder of test programs per category.
    #[serde(default = "default_source_root")]
    pub source_root: PathBuf,
    /// Directory receiving one results folder per category.
    #[serde(default = "default_results_root")]
    pub results_root: PathBuf,
    /// Category used when none is named on the command line.
    #[serde(default = "default_category")]
    pub default_category: CategoryName,
    /// Suffix appended to the base name for compiled artifacts.
    #[serde(default = "default_artifact_suffix")]
    pub artifact_suffix: String,
    /// Suffix appended to the base name for captured output.
    #[serde(default = "default_result_suffix")]
    pub result_suffix: String,
    /// Compiler command template.
    #[serde(default)]
    pub compiler: CompilerConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            results_root: default_results_root(),
            default_category: default_category(),
            artifact_suffix: default_artifact_suffix(),
            result_suffix: default_result_suffix(),
            compiler: CompilerConfig::default(),
        }
    }
}

impl BatchConfig {
    /// Source directory for a category.
    pub fn source_dir(&self, category: &CategoryName) -> PathBuf {
        self.source_root.join(category.as_str())
    }

    /// Results directory for a category.
    pub fn results_dir(&self, category: &CategoryName) -> PathBuf {
        self.results_root.join(category.as_str())
    }
}

/// Fixed compiler invocation: `<program> <args...> <source> <output_flag> <artifact>`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompilerConfig {
    #[serde(default = "default_program")]
    pub program: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
    #[serde(default = "default_output_flag")]
    pub output_flag: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            output_flag: default_output_flag(),
        }
    }
}

impl CompilerConfig {
    /// Full argument list for compiling `source` into `artifact`.
    pub fn arguments(&self, source: &Path, artifact: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = self.args.iter().map(OsString::from).collect();
        args.push(source.as_os_str().to_owned());
        args.push(OsString::from(&self.output_flag));
        args.push(artifact.as_os_str().to_owned());
        args
    }
}

fn default_source_root() -> PathBuf {
    PathBuf::from("../test")
}

fn default_results_root() -> PathBuf {
    PathBuf::from("../results")
}

fn default_category() -> CategoryName {
    CategoryName::new("vector").expect("static category name is valid")
}

fn default_artifact_suffix() -> String {
    ".exe".to_string()
}

fn default_result_suffix() -> String {
    ".txt".to_string()
}

fn default_program() -> String {
    "g++".to_string()
}

fn default_args() -> Vec<String> {
    vec!["-std=c++11".to_string(), "-O2".to_string()]
}

fn default_output_flag() -> String {
    "-o".to_string()
}
