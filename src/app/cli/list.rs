//! List command implementation.

use crate::domain::{AppError, BatchConfig};

pub fn run_list(config: &BatchConfig) -> Result<(), AppError> {
    let categories = crate::app::api::list(config)?;
    if categories.is_empty() {
        println!("No categories under {}", config.source_root.display());
        return Ok(());
    }
    for category in categories {
        println!("{:<20} {} file(s)", category.name.as_str(), category.entries);
    }
    Ok(())
}
