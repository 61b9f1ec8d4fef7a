//! Category discovery under the source root.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use tracing::warn;

use crate::domain::{AppError, BatchConfig, CategoryName};

/// A category directory and the number of entries it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: CategoryName,
    pub entries: usize,
}

/// List category directories under the source root, sorted by name.
///
/// Directories whose names are not valid categories are skipped.
pub fn execute(config: &BatchConfig) -> Result<Vec<CategorySummary>, AppError> {
    let root = &config.source_root;
    let mut categories = Vec::new();
    for entry in fs::read_dir(root).map_err(unreadable(root))? {
        let entry = entry.map_err(unreadable(root))?;
        let path = entry.path();
        // Follows symlinks, so a linked category directory is listed too.
        if !path.is_dir() {
            continue;
        }
        let raw = entry.file_name().to_string_lossy().into_owned();
        let Ok(name) = CategoryName::new(&raw) else {
            warn!(directory = %raw, "skipping directory with invalid category name");
            continue;
        };
        let entries = fs::read_dir(&path).map_err(unreadable(&path))?.count();
        categories.push(CategorySummary { name, entries });
    }
    categories.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(categories)
}

fn unreadable(path: &Path) -> impl FnOnce(io::Error) -> AppError {
    let path = path.to_path_buf();
    move |source| AppError::SourceDirUnreadable { path, source }
}
