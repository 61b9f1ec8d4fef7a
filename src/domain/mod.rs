pub mod category;
pub mod config;
pub mod error;
pub mod report;
pub mod result_paths;
pub mod source_file;

pub use category::CategoryName;
pub use config::{BatchConfig, CompilerConfig};
pub use error::AppError;
pub use report::{BatchReport, FileReport, StepStatus};
pub use result_paths::ResultPaths;
pub use source_file::{SourceFile, split_name};
