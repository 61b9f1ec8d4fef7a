//! Batch configuration loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, BatchConfig};

/// Config file looked up in the working directory when none is given.
pub const CONFIG_FILE: &str = "batchrun.toml";

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub source_root: Option<PathBuf>,
    pub results_root: Option<PathBuf>,
}

/// Load the batch configuration.
///
/// An explicit path must exist. Without one, `batchrun.toml` in `cwd` is used
/// when present, and defaults otherwise.
pub fn load_config(
    explicit: Option<&Path>,
    cwd: &Path,
    overrides: &ConfigOverrides,
) -> Result<BatchConfig, AppError> {
    let mut config = match explicit {
        Some(path) if !path.exists() => return Err(AppError::ConfigMissing(path.to_path_buf())),
        Some(path) => parse_config_file(path)?,
        None => {
            let path = cwd.join(CONFIG_FILE);
            if path.is_file() { parse_config_file(&path)? } else { BatchConfig::default() }
        }
    };

    if let Some(root) = &overrides.source_root {
        config.source_root = root.clone();
    }
    if let Some(root) = &overrides.results_root {
        config.results_root = root.clone();
    }
    Ok(config)
}

fn parse_config_file(path: &Path) -> Result<BatchConfig, AppError> {
    debug!(path = %path.display(), "loading config");
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}
