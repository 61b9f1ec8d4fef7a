use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for batchrun operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Source directory could not be listed.
    #[error("Cannot read source directory {}: {source}", path.display())]
    SourceDirUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Results directory could not be created.
    #[error("Cannot create results directory {}: {source}", path.display())]
    ResultsDirCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Result file could not be opened for writing.
    #[error("Cannot open result file {}: {source}", path.display())]
    ResultFileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Category identifier is invalid.
    #[error("Invalid category '{0}': must be alphanumeric with hyphens or underscores")]
    InvalidCategory(String),

    /// Category directory does not exist under the source root.
    #[error("Category '{name}' not found under {}", root.display())]
    CategoryNotFound { name: String, root: PathBuf },

    /// Explicitly requested config file is missing.
    #[error("Config file not found: {}", .0.display())]
    ConfigMissing(PathBuf),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Report serialization error.
    #[error("Failed to serialize report: {0}")]
    ReportSerialize(#[from] serde_json::Error),

    /// One or more compile/execute steps did not succeed (strict mode).
    #[error("{failed} step(s) failed across {files} file(s)")]
    StepsFailed { failed: usize, files: usize },
}
