use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use super::{BatchConfig, SourceFile};

/// Output locations derived from a source file's base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPaths {
    /// Compiled executable.
    pub artifact: PathBuf,
    /// Captured standard output.
    pub result: PathBuf,
}

impl ResultPaths {
    pub fn derive(results_dir: &Path, source: &SourceFile, config: &BatchConfig) -> Self {
        let base = source.base_name();
        Self {
            artifact: results_dir.join(with_suffix(base, &config.artifact_suffix)),
            result: results_dir.join(with_suffix(base, &config.result_suffix)),
        }
    }

    /// Artifact file name as shown in progress output.
    pub fn artifact_name(&self) -> String {
        self.artifact.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
    }
}

fn with_suffix(base: &OsStr, suffix: &str) -> PathBuf {
    let mut name = base.to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
